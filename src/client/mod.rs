//! Blocking RPC client for the mbtool daemon.
//!
//! Every operation is one round trip through [`MbtoolClient::call`]:
//!
//! 1. encode the [`Request`] and write it as one frame,
//! 2. read one frame and decode the [`Response`] union,
//! 3. map `Unsupported`/`Invalid` to [`CommandError`], any other
//!    mismatched tag to [`ProtocolError::UnexpectedResponse`],
//! 4. map an embedded error sub-table to [`CommandError::Failed`].
//!
//! Methods take `&mut self`, so a connection never has two requests in
//! flight. Share a client between threads behind a `Mutex`.

use std::io;
use std::os::unix::net::UnixStream;

use log::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{CommandError, HandshakeError, ProtocolError, Result};
use crate::rpc::codec::{self, DEFAULT_MAX_MESSAGE_SIZE};
use crate::rpc::handshake;
use crate::rpc::request::Request;
use crate::rpc::response::{Reply, Response};
use crate::rpc::transport::{self, CancelHandle, Transport};
use crate::rpc::wire::ResponseType;

/// Issue `$request` and unwrap the matching `Response::$variant`.
macro_rules! rpc {
    ($client:expr, $request:expr, $variant:ident) => {
        $client.call($request, ResponseType::$variant, |response| match response {
            Response::$variant(reply) => Some(reply),
            _ => None,
        })
    };
}

mod exec;
mod file;
mod path;
mod rom;
mod system;

pub use file::OpenFile;
pub use rom::{SetKernelResult, SwitchRomResult};

/// Client bound to one daemon connection.
pub struct MbtoolClient<T: Transport> {
    transport: T,
    max_message_size: usize,
}

impl MbtoolClient<UnixStream> {
    /// Validate `config`, connect to the daemon it names, run the handshake
    /// and, when `min_daemon_version` is set, check the daemon's version.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let mut stream = transport::connect(config)?;
        handshake::perform(&mut stream)?;
        let mut client = Self::new(stream).with_max_message_size(config.max_message_size);
        if let Some(min) = &config.min_daemon_version {
            client.require_version(min)?;
        }
        Ok(client)
    }

    /// Handle that aborts a blocked call from another thread.
    pub fn cancel_handle(&self) -> io::Result<CancelHandle> {
        CancelHandle::new(&self.transport)
    }
}

impl<T: Transport> MbtoolClient<T> {
    /// Wrap an already connected (and handshaken) transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }

    #[must_use]
    pub fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Fail with [`HandshakeError::DaemonTooOld`] unless the daemon reports
    /// at least `min`. Returns the reported version.
    pub fn require_version(&mut self, min: &str) -> Result<String> {
        let found = self.get_version()?;
        if !handshake::version_at_least(&found, min) {
            warn!("RPC: daemon version {found} is older than {min}");
            return Err(HandshakeError::DaemonTooOld {
                found,
                required: min.to_owned(),
            }
            .into());
        }
        info!("RPC: daemon version {found}");
        Ok(found)
    }

    // ── Generic call path ─────────────────────────────────────

    pub(crate) fn send(&mut self, request: &Request) -> Result<()> {
        debug!("RPC: -> {}", request.kind());
        codec::write_message(&mut self.transport, &request.encode(), self.max_message_size)?;
        Ok(())
    }

    pub(crate) fn receive(&mut self) -> Result<Response> {
        let buf = codec::read_message(&mut self.transport, self.max_message_size)?;
        let response = Response::decode(&buf)
            .inspect_err(|e| warn!("RPC: undecodable response: {e}"))?;
        debug!("RPC: <- {}", response.kind());
        Ok(response)
    }

    /// Send one request and read exactly one response, unchecked.
    pub fn round_trip(&mut self, request: &Request) -> Result<Response> {
        self.send(request)?;
        self.receive()
    }

    /// Send `request`, expect a `expected` response and extract its payload
    /// with `unwrap`.
    pub fn call<R>(
        &mut self,
        request: Request,
        expected: ResponseType,
        unwrap: impl FnOnce(Response) -> Option<Reply<R>>,
    ) -> Result<R> {
        let kind = request.kind();
        let response = self.round_trip(&request)?;
        let reply = match response {
            Response::Unsupported => return Err(CommandError::Unsupported(kind).into()),
            Response::Invalid => return Err(CommandError::Invalid(kind).into()),
            other => {
                let actual = other.kind();
                unwrap(other).ok_or(ProtocolError::UnexpectedResponse { expected, actual })?
            }
        };
        reply.into_result(kind).map_err(|e| {
            warn!("RPC: {e}");
            e.into()
        })
    }
}
