//! Error mapping shared by every RPC method.
//!
//! Each method is driven through the same three failure scripts:
//! `Unsupported`, `Invalid`, and a response of the wrong kind.

use mbtool_client::{
    CommandError, Error, FileOpenFlag, FixedResolver, MbtoolClient, PathDeleteFlag,
    ProtocolError, Reply, RequestType, Response, SeekWhence, WipeTarget,
};

use crate::mock_daemon::{MockDaemon, client};

type Call = fn(&mut MbtoolClient<MockDaemon>) -> Result<(), Error>;

fn boot() -> FixedResolver {
    FixedResolver {
        device: Some("/dev/block/boot".into()),
        search_dirs: Vec::new(),
    }
}

/// Every single-response method, with the request kind it sends.
fn methods() -> Vec<(RequestType, Call)> {
    let table: [(RequestType, Call); 27] = [
        (RequestType::FileOpen, |c| c.file_open("/f", &[FileOpenFlag::RdOnly], 0).map(drop)),
        (RequestType::FileClose, |c| c.file_close(1)),
        (RequestType::FileRead, |c| c.file_read(1, 10).map(drop)),
        (RequestType::FileWrite, |c| c.file_write(1, b"x").map(drop)),
        (RequestType::FileSeek, |c| c.file_seek(1, -1, SeekWhence::End).map(drop)),
        (RequestType::FileStat, |c| c.file_stat(1).map(drop)),
        (RequestType::FileChmod, |c| c.file_chmod(1, 0o644)),
        (RequestType::FileSELinuxGetLabel, |c| c.file_selinux_get_label(1).map(drop)),
        (RequestType::FileSELinuxSetLabel, |c| c.file_selinux_set_label(1, "l")),
        (RequestType::PathCopy, |c| c.path_copy("/a", "/b")),
        (RequestType::PathDelete, |c| c.path_delete("/a", PathDeleteFlag::Unlink)),
        (RequestType::PathChmod, |c| c.path_chmod("/a", 0o755)),
        (RequestType::PathMkdir, |c| c.path_mkdir("/a", 0o755, false)),
        (RequestType::PathReadlink, |c| c.path_readlink("/a").map(drop)),
        (RequestType::PathSELinuxGetLabel, |c| c.path_selinux_get_label("/a", false).map(drop)),
        (RequestType::PathSELinuxSetLabel, |c| c.path_selinux_set_label("/a", "l", true)),
        (RequestType::PathGetDirectorySize, |c| {
            c.path_get_directory_size("/a", &["b"]).map(drop)
        }),
        (RequestType::MbGetVersion, |c| c.get_version().map(drop)),
        (RequestType::MbGetInstalledRoms, |c| c.get_installed_roms().map(drop)),
        (RequestType::MbGetBootedRomId, |c| c.get_booted_rom_id().map(drop)),
        (RequestType::MbSwitchRom, |c| c.switch_rom("r", false, &boot()).map(drop)),
        (RequestType::MbSetKernel, |c| c.set_kernel("r", &boot()).map(drop)),
        (RequestType::MbWipeRom, |c| c.wipe_rom("r", &[WipeTarget::Cache]).map(drop)),
        (RequestType::MbGetPackagesCount, |c| c.get_packages_counts("r").map(drop)),
        (RequestType::Reboot, |c| c.reboot_via_init(None)),
        (RequestType::Shutdown, |c| c.shutdown_via_mbtool()),
        (RequestType::SignedExec, |c| {
            c.signed_exec("/x", "/x.sig", None, &["a"], |_| {}).map(drop)
        }),
    ];
    table.to_vec()
}

#[test]
fn table_covers_every_request_kind() {
    let mut kinds: Vec<_> = methods().into_iter().map(|(k, _)| k).collect();
    kinds.sort_by_key(|k| k.tag());
    assert_eq!(kinds, RequestType::ALL);
}

#[test]
fn unsupported_names_the_request_for_every_method() {
    for (kind, call) in methods() {
        let mut c = client([Response::Unsupported]);
        let err = call(&mut c).unwrap_err();
        assert!(
            matches!(err, Error::Command(CommandError::Unsupported(k)) if k == kind),
            "{kind}: {err:?}"
        );
        assert!(err.to_string().contains("does not support"), "{kind}: {err}");
        assert!(err.to_string().contains(kind.name()), "{kind}: {err}");
    }
}

#[test]
fn invalid_is_command_error_for_every_method() {
    for (kind, call) in methods() {
        let mut c = client([Response::Invalid]);
        let err = call(&mut c).unwrap_err();
        assert!(
            matches!(err, Error::Command(CommandError::Invalid(k)) if k == kind),
            "{kind}: {err:?}"
        );
    }
}

#[test]
fn mismatched_response_is_protocol_error_for_every_method() {
    for (kind, call) in methods() {
        // PathMkdir is never a valid answer to anything but PathMkdir.
        let wrong = if kind == RequestType::PathMkdir {
            Response::PathDelete(Reply::Success(()))
        } else {
            Response::PathMkdir(Reply::Success(()))
        };
        let mut c = client([wrong]);
        let err = call(&mut c).unwrap_err();
        assert!(
            matches!(err, Error::Protocol(ProtocolError::UnexpectedResponse { .. })),
            "{kind}: {err:?}"
        );
        assert!(err.is_fatal());
    }
}

#[test]
fn embedded_error_table_becomes_failed_command() {
    let mut c = client([Response::PathCopy(Reply::failure(28, "No space left on device"))]);
    match c.path_copy("/a", "/b").unwrap_err() {
        Error::Command(CommandError::Failed {
            request,
            errno,
            msg,
        }) => {
            assert_eq!(request, RequestType::PathCopy);
            assert_eq!(errno, 28);
            assert_eq!(msg, "No space left on device");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn closed_connection_is_io_error() {
    let mut c = client([]);
    let err = c.get_version().unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn corrupt_payload_is_protocol_error() {
    let mut daemon = MockDaemon::new();
    daemon.push_raw(&[0xde, 0xad, 0xbe, 0xef, 0x00]);
    let mut c = MbtoolClient::new(daemon);
    let err = c.get_version().unwrap_err();
    assert!(matches!(err, Error::Protocol(_)), "{err:?}");
}

#[test]
fn oversized_frame_is_rejected_before_allocation() {
    let mut daemon = MockDaemon::new();
    daemon.push_raw(&[0u8; 4096]);
    let mut c = MbtoolClient::new(daemon).with_max_message_size(1024);
    let err = c.get_version().unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::InvalidData));
}

#[test]
fn oversized_request_is_rejected_before_sending() {
    let mut c = MbtoolClient::new(MockDaemon::new()).with_max_message_size(1024);
    let err = c.file_write(1, &[0u8; 4096]).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::InvalidInput));
    assert_eq!(c.transport().bytes_written(), 0);

    // The limit is per message, so a request that fits still goes out.
    c.transport_mut().push(&Response::FileWrite(Reply::Success(16)));
    assert_eq!(c.file_write(1, &[0u8; 16]).unwrap(), 16);
    assert!(c.transport().bytes_written() > 0);
}
