//! Transport abstraction: any blocking byte-oriented channel.
//!
//! Concrete implementations:
//! - `UnixStream` (the daemon's local socket, path or abstract name)
//! - scripted mocks in tests
//!
//! The client is generic over `Transport`, so swapping the channel
//! requires zero changes to the RPC logic.

use std::fmt;
use std::io::{self, Read, Write};
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

use log::{debug, info};

use crate::config::ClientConfig;

/// Byte-oriented transport channel.
pub trait Transport {
    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns the number of bytes read; 0 means the peer hung up.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Write part or all of `data`; returns the number of bytes written.
    fn write(&mut self, data: &[u8]) -> io::Result<usize>;

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

impl Transport for UnixStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Write::write(self, data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        (**self).write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Where the daemon listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketAddress {
    /// Linux abstract namespace, written `@name`.
    Abstract(String),
    Path(PathBuf),
}

impl SocketAddress {
    pub fn parse(s: &str) -> Self {
        match s.strip_prefix('@') {
            Some(name) => Self::Abstract(name.to_owned()),
            None => Self::Path(PathBuf::from(s)),
        }
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abstract(name) => write!(f, "@{name}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Open the daemon socket named in `config` and apply its timeouts.
pub fn connect(config: &ClientConfig) -> io::Result<UnixStream> {
    let addr = SocketAddress::parse(&config.socket_address);
    debug!("connecting to {addr}");
    let stream = match &addr {
        SocketAddress::Abstract(name) => connect_abstract(name)?,
        SocketAddress::Path(path) => UnixStream::connect(path)?,
    };
    stream.set_read_timeout(config.read_timeout())?;
    stream.set_write_timeout(config.write_timeout())?;
    info!("connected to mbtool daemon at {addr}");
    Ok(stream)
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn connect_abstract(name: &str) -> io::Result<UnixStream> {
    #[cfg(target_os = "android")]
    use std::os::android::net::SocketAddrExt;
    #[cfg(target_os = "linux")]
    use std::os::linux::net::SocketAddrExt;

    let addr = std::os::unix::net::SocketAddr::from_abstract_name(name.as_bytes())?;
    UnixStream::connect_addr(&addr)
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn connect_abstract(name: &str) -> io::Result<UnixStream> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("abstract socket @{name} requires Linux or Android"),
    ))
}

/// Unblocks a pending call from another thread by shutting the socket
/// down. The interrupted call surfaces as an I/O error.
#[derive(Debug)]
pub struct CancelHandle {
    stream: UnixStream,
}

impl CancelHandle {
    pub fn new(stream: &UnixStream) -> io::Result<Self> {
        Ok(Self {
            stream: stream.try_clone()?,
        })
    }

    pub fn cancel(&self) -> io::Result<()> {
        match self.stream.shutdown(Shutdown::Both) {
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::codec;

    #[test]
    fn parses_abstract_and_path_addresses() {
        assert_eq!(
            SocketAddress::parse("@mbtool.daemon"),
            SocketAddress::Abstract("mbtool.daemon".into())
        );
        assert_eq!(
            SocketAddress::parse("/dev/socket/mbtool"),
            SocketAddress::Path("/dev/socket/mbtool".into())
        );
        assert_eq!(SocketAddress::parse("@x").to_string(), "@x");
    }

    #[test]
    fn cancel_unblocks_pending_read() {
        let (mut ours, _theirs) = UnixStream::pair().unwrap();
        let cancel = CancelHandle::new(&ours).unwrap();
        let reader = std::thread::spawn(move || codec::read_message(&mut ours, 64));
        std::thread::sleep(std::time::Duration::from_millis(20));
        cancel.cancel().unwrap();
        assert!(reader.join().unwrap().is_err());
    }

    #[test]
    fn connect_to_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            socket_address: dir.path().join("nope.sock").display().to_string(),
            ..ClientConfig::default()
        };
        assert!(connect(&config).is_err());
    }
}
