//! Error taxonomy for the mbtool client.
//!
//! Every RPC either returns its payload or exactly one of:
//!
//! - [`Error::Io`]: the socket failed or the framing was corrupt.
//! - [`Error::Protocol`]: the daemon answered with something this schema
//!   does not expect (client/daemon skew).
//! - [`Error::Command`]: the daemon understood the request and refused or
//!   failed it.
//!
//! [`Error::Handshake`] and [`Error::Config`] only come out of connection
//! setup.

use std::io;
use std::path::PathBuf;

use flatbuffers::InvalidFlatbuffer;
use thiserror::Error;

use crate::rpc::wire::{RequestType, ResponseType};

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("handshake failed: {0}")]
    Handshake(#[from] HandshakeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// `errno` reported by the daemon, if this is an operation failure.
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Command(CommandError::Failed { errno, .. }) => Some(*errno),
            _ => None,
        }
    }

    /// True for failures where the connection can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Protocol(_) | Self::Handshake(_))
    }
}

/// The daemon sent bytes that do not match the v3 schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("buffer failed verification: {0}")]
    InvalidBuffer(InvalidFlatbuffer),
    #[error("malformed message: {0}")]
    Malformed(&'static str),
    #[error("response carries no union type")]
    EmptyUnion,
    #[error("unknown union tag {0}")]
    UnknownTag(u8),
    #[error("union tag and payload disagree")]
    MissingPayload,
    #[error("unexpected response type: expected {expected}, got {actual}")]
    UnexpectedResponse {
        expected: ResponseType,
        actual: ResponseType,
    },
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("invalid value {value} for `{field}`")]
    InvalidEnum { field: &'static str, value: i16 },
}

impl From<InvalidFlatbuffer> for ProtocolError {
    fn from(e: InvalidFlatbuffer) -> Self {
        match e {
            // Only the root tables carry a union.
            InvalidFlatbuffer::InconsistentUnion { .. } => Self::MissingPayload,
            other => Self::InvalidBuffer(other),
        }
    }
}

/// The daemon rejected or failed a well-formed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("daemon does not support {0}")]
    Unsupported(RequestType),
    #[error("daemon rejected {0} as invalid")]
    Invalid(RequestType),
    #[error("{request} failed: {msg} (errno {errno})")]
    Failed {
        request: RequestType,
        errno: i32,
        msg: String,
    },
}

/// Connection setup did not reach a usable v3 session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandshakeError {
    #[error("daemon denied access to this client")]
    Denied,
    #[error("unexpected authorization reply: {0:?}")]
    UnexpectedAuthReply(String),
    #[error("daemon does not speak protocol version {0}")]
    UnsupportedProtocol(i32),
    #[error("unexpected protocol reply: {0:?}")]
    UnexpectedVersionReply(String),
    #[error("daemon version {found} is older than required {required}")]
    DaemonTooOld { found: String, required: String },
}

/// Loading or validating a [`crate::config::ClientConfig`] failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_only_on_failed_commands() {
        let failed: Error = CommandError::Failed {
            request: RequestType::FileOpen,
            errno: 2,
            msg: "No such file or directory".into(),
        }
        .into();
        assert_eq!(failed.errno(), Some(2));
        assert!(!failed.is_fatal());

        let unsupported: Error = CommandError::Unsupported(RequestType::PathMkdir).into();
        assert_eq!(unsupported.errno(), None);

        let io: Error = io::Error::from(io::ErrorKind::UnexpectedEof).into();
        assert!(io.is_fatal());
    }

    #[test]
    fn messages_name_the_request_kind() {
        let e = CommandError::Unsupported(RequestType::MbWipeRom);
        assert_eq!(e.to_string(), "daemon does not support MbWipeRomRequest");

        let e = CommandError::Failed {
            request: RequestType::PathCopy,
            errno: 13,
            msg: "Permission denied".into(),
        };
        assert_eq!(
            e.to_string(),
            "PathCopyRequest failed: Permission denied (errno 13)"
        );
    }
}
