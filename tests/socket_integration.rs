//! End-to-end tests over a real UNIX socket with a stub daemon thread.
//!
//! The stub accepts one connection, runs the daemon side of the
//! handshake, then answers each decoded request through a handler.

use std::os::unix::net::UnixListener;
use std::path::Path;
use std::thread::{self, JoinHandle};

use mbtool_client::rpc::codec::{self, DEFAULT_MAX_MESSAGE_SIZE};
use mbtool_client::rpc::handshake;
use mbtool_client::{
    ClientConfig, ConfigError, Error, FileOpenFlag, HandshakeError, MbtoolClient, Reply, Request, Response,
    SignedExecResult, SignedExecStatus, StatBuf,
};

struct StubDaemon {
    allow: bool,
    accept_version: bool,
}

impl StubDaemon {
    fn spawn(
        self,
        socket: &Path,
        handler: impl Fn(&Request) -> Vec<Response> + Send + 'static,
    ) -> JoinHandle<Vec<Request>> {
        let listener = UnixListener::bind(socket).unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut seen = Vec::new();
            let accept = self.accept_version;
            match handshake::serve(&mut stream, self.allow, |v| accept && v == 3) {
                Ok(Some(_)) if accept => {}
                _ => return seen,
            }
            while let Ok(buf) = codec::read_message(&mut stream, DEFAULT_MAX_MESSAGE_SIZE) {
                let request = Request::decode(&buf).unwrap();
                for response in handler(&request) {
                    let frame = response.encode();
                    if codec::write_message(&mut stream, &frame, DEFAULT_MAX_MESSAGE_SIZE).is_err() {
                        return seen;
                    }
                }
                seen.push(request);
            }
            seen
        })
    }
}

fn config_for(socket: &Path) -> ClientConfig {
    ClientConfig {
        socket_address: socket.display().to_string(),
        read_timeout_ms: 5_000,
        write_timeout_ms: 5_000,
        ..ClientConfig::default()
    }
}

fn well_behaved() -> StubDaemon {
    StubDaemon {
        allow: true,
        accept_version: true,
    }
}

// ── Full round trips ──────────────────────────────────────────

#[test]
fn open_stat_close_over_socket() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("mbtool.sock");
    let daemon = well_behaved().spawn(&socket, |request| {
        vec![match request {
            Request::FileOpen { .. } => Response::FileOpen(Reply::Success(7)),
            Request::FileStat { id: 7 } => Response::FileStat(Reply::Success(StatBuf {
                st_size: 1024,
                st_mode: 0o100_644,
                ..StatBuf::default()
            })),
            Request::FileClose { id: 7 } => Response::FileClose(Reply::Success(())),
            _ => Response::Unsupported,
        }]
    });

    {
        let mut client = MbtoolClient::connect(&config_for(&socket)).unwrap();
        let stat = client
            .with_file("/data/foo", &[FileOpenFlag::RdOnly], 0, |c, id| c.file_stat(id))
            .unwrap();
        assert_eq!(stat.st_size, 1024);
    }

    let seen = daemon.join().unwrap();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[2], Request::FileClose { id: 7 });
}

#[test]
fn signed_exec_streams_over_socket() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("mbtool.sock");
    let daemon = well_behaved().spawn(&socket, |request| match request {
        Request::SignedExec { args, .. } => {
            let mut out: Vec<Response> = args
                .iter()
                .map(|a| Response::SignedExecOutput(format!("arg {a}")))
                .collect();
            out.push(Response::SignedExec(Reply::Success(SignedExecResult {
                status: SignedExecStatus::ProcessExited,
                exit_status: 0,
                term_sig: 0,
                error_msg: None,
            })));
            out
        }
        _ => vec![Response::Invalid],
    });

    let mut client = MbtoolClient::connect(&config_for(&socket)).unwrap();
    let mut lines = Vec::new();
    let result = client
        .signed_exec("/bin/x", "/bin/x.sig", None, &["a", "b", "c"], |l| {
            lines.push(l.to_owned());
        })
        .unwrap();
    assert_eq!(result.status, SignedExecStatus::ProcessExited);
    assert_eq!(lines, ["arg a", "arg b", "arg c"]);

    drop(client);
    assert_eq!(daemon.join().unwrap().len(), 1);
}

#[test]
fn min_version_is_checked_on_connect() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("mbtool.sock");
    let daemon = well_behaved().spawn(&socket, |_| {
        vec![Response::MbGetVersion(Reply::Success("8.0.0".into()))]
    });

    let config = ClientConfig {
        min_daemon_version: Some("9.0".into()),
        ..config_for(&socket)
    };
    let err = MbtoolClient::connect(&config).err().unwrap();
    assert!(matches!(
        err,
        Error::Handshake(HandshakeError::DaemonTooOld { .. })
    ));
    daemon.join().unwrap();
}

// ── Handshake failures ────────────────────────────────────────

#[test]
fn denied_connection_is_handshake_error() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("mbtool.sock");
    let daemon = StubDaemon {
        allow: false,
        accept_version: true,
    }
    .spawn(&socket, |_| Vec::new());

    let err = MbtoolClient::connect(&config_for(&socket)).err().unwrap();
    assert!(matches!(err, Error::Handshake(HandshakeError::Denied)));
    daemon.join().unwrap();
}

#[test]
fn unsupported_protocol_is_handshake_error() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("mbtool.sock");
    let daemon = StubDaemon {
        allow: true,
        accept_version: false,
    }
    .spawn(&socket, |_| Vec::new());

    let err = MbtoolClient::connect(&config_for(&socket)).err().unwrap();
    assert!(matches!(
        err,
        Error::Handshake(HandshakeError::UnsupportedProtocol(3))
    ));
    daemon.join().unwrap();
}

#[test]
fn no_daemon_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MbtoolClient::connect(&config_for(&dir.path().join("absent.sock")))
        .err()
        .unwrap();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn invalid_config_fails_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("mbtool.sock");
    // The socket is live, so only validation can reject this config.
    let _listener = UnixListener::bind(&socket).unwrap();
    let config = ClientConfig {
        max_message_size: 0,
        ..config_for(&socket)
    };
    let err = MbtoolClient::connect(&config).err().unwrap();
    assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    assert!(!err.is_fatal());
}

#[test]
fn read_timeout_surfaces_as_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("mbtool.sock");
    let (release, wait) = std::sync::mpsc::channel::<()>();
    let daemon = well_behaved().spawn(&socket, move |_| {
        // Hold the reply until the client has given up.
        let _ = wait.recv();
        Vec::new()
    });

    let config = ClientConfig {
        read_timeout_ms: 50,
        ..config_for(&socket)
    };
    let mut client = MbtoolClient::connect(&config).unwrap();
    let err = client.get_version().unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err:?}");

    release.send(()).unwrap();
    drop(client);
    daemon.join().unwrap();
}
