//! Signature-checked executable invocation with streamed output.
//!
//! One request, then any number of `SignedExecOutputResponse` lines
//! followed by exactly one terminal `SignedExecResponse`.

use log::{debug, warn};

use super::MbtoolClient;
use crate::error::{CommandError, ProtocolError, Result};
use crate::rpc::request::Request;
use crate::rpc::response::{Response, SignedExecResult};
use crate::rpc::transport::Transport;
use crate::rpc::wire::ResponseType;

impl<T: Transport> MbtoolClient<T> {
    /// Run `binary_path` after the daemon verifies it against
    /// `signature_path`. Each output line is passed to `on_line` as it
    /// arrives, before the next message is read.
    ///
    /// Signature and process failures come back in the result's
    /// [`status`](SignedExecResult::status); only a populated error
    /// sub-table becomes a [`CommandError`].
    pub fn signed_exec<S: AsRef<str>>(
        &mut self,
        binary_path: &str,
        signature_path: &str,
        arg0: Option<&str>,
        args: &[S],
        mut on_line: impl FnMut(&str),
    ) -> Result<SignedExecResult> {
        let request = Request::SignedExec {
            binary_path: binary_path.to_owned(),
            signature_path: signature_path.to_owned(),
            arg0: arg0.map(str::to_owned),
            args: args.iter().map(|a| a.as_ref().to_owned()).collect(),
        };
        let kind = request.kind();
        self.send(&request)?;

        let mut lines = 0usize;
        loop {
            match self.receive()? {
                Response::SignedExecOutput(line) => {
                    lines += 1;
                    on_line(&line);
                }
                Response::SignedExec(reply) => {
                    let result = reply.into_result(kind).map_err(|e| {
                        warn!("RPC: {e}");
                        e
                    })?;
                    debug!(
                        "RPC: {binary_path} finished ({}) after {lines} lines",
                        result.status
                    );
                    return Ok(result);
                }
                Response::Unsupported => return Err(CommandError::Unsupported(kind).into()),
                Response::Invalid => return Err(CommandError::Invalid(kind).into()),
                other => {
                    return Err(ProtocolError::UnexpectedResponse {
                        expected: ResponseType::SignedExec,
                        actual: other.kind(),
                    }
                    .into());
                }
            }
        }
    }
}
