//! Connection handshake.
//!
//! ```text
//! daemon → client   string  "ALLOW" | "DENY"
//! client → daemon   int32   protocol version (3)
//! daemon → client   string  "OK" | "UNSUPPORTED"
//! ```
//!
//! After `OK` the connection carries framed v3 messages only.

use log::{debug, warn};

use super::codec;
use super::wire::PROTOCOL_VERSION;
use super::transport::Transport;
use crate::error::{HandshakeError, Result};

pub const AUTH_ALLOW: &str = "ALLOW";
pub const AUTH_DENY: &str = "DENY";
pub const VERSION_OK: &str = "OK";
pub const VERSION_UNSUPPORTED: &str = "UNSUPPORTED";

/// Handshake replies are single words.
const MAX_REPLY_LEN: usize = 64;

/// Run the client side of the handshake.
pub fn perform<T: Transport + ?Sized>(transport: &mut T) -> Result<()> {
    let auth = codec::read_string(transport, MAX_REPLY_LEN)?;
    match auth.as_str() {
        AUTH_ALLOW => debug!("daemon authorized connection"),
        AUTH_DENY => {
            warn!("daemon denied connection");
            return Err(HandshakeError::Denied.into());
        }
        _ => return Err(HandshakeError::UnexpectedAuthReply(auth).into()),
    }

    codec::write_int32(transport, PROTOCOL_VERSION)?;

    let reply = codec::read_string(transport, MAX_REPLY_LEN)?;
    match reply.as_str() {
        VERSION_OK => {
            debug!("daemon accepted protocol v{PROTOCOL_VERSION}");
            Ok(())
        }
        VERSION_UNSUPPORTED => Err(HandshakeError::UnsupportedProtocol(PROTOCOL_VERSION).into()),
        _ => Err(HandshakeError::UnexpectedVersionReply(reply).into()),
    }
}

/// Daemon side, for stub daemons in tests: sends the authorization
/// verdict and, if allowed, answers the version with `accept`.
/// Returns the version the client asked for.
pub fn serve<T: Transport + ?Sized>(
    transport: &mut T,
    allow: bool,
    accept: impl FnOnce(i32) -> bool,
) -> std::io::Result<Option<i32>> {
    if !allow {
        codec::write_string(transport, AUTH_DENY)?;
        return Ok(None);
    }
    codec::write_string(transport, AUTH_ALLOW)?;
    let version = codec::read_int32(transport)?;
    let reply = if accept(version) {
        VERSION_OK
    } else {
        VERSION_UNSUPPORTED
    };
    codec::write_string(transport, reply)?;
    Ok(Some(version))
}

/// Compare dotted version strings numerically (`"9.3.0-r2" >= "9.2"`).
/// Components stop at the first non-digit; missing components count as 0.
pub fn version_at_least(found: &str, required: &str) -> bool {
    let found = numeric_prefix(found);
    let required = numeric_prefix(required);
    let len = found.len().max(required.len());
    let pad = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);
    for i in 0..len {
        let (a, b) = (pad(&found, i), pad(&required, i));
        if a != b {
            return a > b;
        }
    }
    true
}

fn numeric_prefix(version: &str) -> Vec<u64> {
    let mut parts = Vec::new();
    for component in version.trim_start_matches(['v', 'V']).split('.') {
        let digits: String = component.chars().take_while(char::is_ascii_digit).collect();
        match digits.parse() {
            Ok(n) => parts.push(n),
            Err(_) => break,
        }
        if digits.len() != component.len() {
            break;
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::os::unix::net::UnixStream;
    use std::thread;

    fn run(allow: bool, accept: bool) -> Result<()> {
        let (mut client, mut daemon) = UnixStream::pair().unwrap();
        let stub = thread::spawn(move || serve(&mut daemon, allow, |_| accept).unwrap());
        let result = perform(&mut client);
        let asked = stub.join().unwrap();
        if allow {
            assert_eq!(asked, Some(PROTOCOL_VERSION));
        }
        result
    }

    #[test]
    fn allow_and_ok_completes() {
        run(true, true).unwrap();
    }

    #[test]
    fn deny_is_handshake_error() {
        assert!(matches!(
            run(false, true),
            Err(Error::Handshake(HandshakeError::Denied))
        ));
    }

    #[test]
    fn unsupported_version_is_handshake_error() {
        assert!(matches!(
            run(true, false),
            Err(Error::Handshake(HandshakeError::UnsupportedProtocol(3)))
        ));
    }

    #[test]
    fn garbage_auth_reply_is_reported() {
        let (mut client, mut daemon) = UnixStream::pair().unwrap();
        codec::write_string(&mut daemon, "MAYBE").unwrap();
        match perform(&mut client) {
            Err(Error::Handshake(HandshakeError::UnexpectedAuthReply(s))) => assert_eq!(s, "MAYBE"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn version_comparison() {
        assert!(version_at_least("9.3.0", "9.3.0"));
        assert!(version_at_least("9.3.0.r123.gabcdef", "9.2"));
        assert!(version_at_least("10.0", "9.99"));
        assert!(!version_at_least("9.1.9", "9.2"));
        assert!(!version_at_least("", "1"));
        assert!(version_at_least("v8.0.0", "8"));
    }
}
