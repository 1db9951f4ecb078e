//! File-handle RPCs and the scoped close discipline.

use mbtool_client::{
    CommandError, Error, FileOpenFlag, Reply, Request, RequestType, Response, SeekWhence, StatBuf,
};

use crate::mock_daemon::client;

const EBADF: i32 = 9;

fn stat_1024() -> StatBuf {
    StatBuf {
        st_size: 1024,
        st_mode: 0o100_644,
        st_nlink: 1,
        ..StatBuf::default()
    }
}

// ── Basic calls ───────────────────────────────────────────────

#[test]
fn open_then_stat_returns_daemon_values() {
    let mut c = client([
        Response::FileOpen(Reply::Success(7)),
        Response::FileStat(Reply::Success(stat_1024())),
    ]);

    let id = c.file_open("/data/foo", &[FileOpenFlag::RdOnly], 0).unwrap();
    assert_eq!(id, 7);
    let st = c.file_stat(id).unwrap();
    assert_eq!(st.st_size, 1024);
    assert_eq!(st.st_mode, 0o100_644);

    assert_eq!(
        c.transport().requests(),
        vec![
            Request::FileOpen {
                path: "/data/foo".into(),
                flags: vec![FileOpenFlag::RdOnly],
                perms: 0,
            },
            Request::FileStat { id: 7 },
        ]
    );
}

#[test]
fn open_then_close_succeeds() {
    let mut c = client([
        Response::FileOpen(Reply::Success(3)),
        Response::FileClose(Reply::Success(())),
    ]);
    let id = c.file_open("/cache/x", &[FileOpenFlag::WrOnly, FileOpenFlag::Creat], 0o644).unwrap();
    c.file_close(id).unwrap();
}

#[test]
fn second_close_propagates_daemon_error() {
    let mut c = client([
        Response::FileOpen(Reply::Success(3)),
        Response::FileClose(Reply::Success(())),
        Response::FileClose(Reply::failure(EBADF, "Bad file descriptor")),
    ]);
    let id = c.file_open("/cache/x", &[FileOpenFlag::RdOnly], 0).unwrap();
    c.file_close(id).unwrap();

    let err = c.file_close(id).unwrap_err();
    assert_eq!(err.errno(), Some(EBADF));
    assert!(matches!(
        err,
        Error::Command(CommandError::Failed {
            request: RequestType::FileClose,
            ..
        })
    ));
}

#[test]
fn read_write_seek_and_labels() {
    let mut c = client([
        Response::FileWrite(Reply::Success(5)),
        Response::FileSeek(Reply::Success(0)),
        Response::FileRead(Reply::Success(b"hello".to_vec())),
        Response::FileChmod(Reply::Success(())),
        Response::FileSELinuxGetLabel(Reply::Success("u:object_r:system_file:s0".into())),
        Response::FileSELinuxSetLabel(Reply::Success(())),
    ]);

    assert_eq!(c.file_write(4, b"hello").unwrap(), 5);
    assert_eq!(c.file_seek(4, 0, SeekWhence::Set).unwrap(), 0);
    assert_eq!(c.file_read(4, 4096).unwrap(), b"hello");
    c.file_chmod(4, 0o600).unwrap();
    assert_eq!(c.file_selinux_get_label(4).unwrap(), "u:object_r:system_file:s0");
    c.file_selinux_set_label(4, "u:object_r:app_data_file:s0").unwrap();

    let requests = c.transport().requests();
    assert_eq!(
        requests[1],
        Request::FileSeek {
            id: 4,
            offset: 0,
            whence: SeekWhence::Set
        }
    );
    assert_eq!(requests[3], Request::FileChmod { id: 4, mode: 0o600 });
}

// ── Scoped handles ────────────────────────────────────────────

#[test]
fn dropped_guard_issues_exactly_one_close() {
    let mut c = client([
        Response::FileOpen(Reply::Success(11)),
        Response::FileStat(Reply::Success(stat_1024())),
        Response::FileClose(Reply::Success(())),
    ]);
    {
        let mut file = c.open_file("/system/build.prop", &[FileOpenFlag::RdOnly], 0).unwrap();
        assert_eq!(file.id(), 11);
        assert_eq!(file.stat().unwrap().st_size, 1024);
    }

    let closes = c
        .transport()
        .requests()
        .into_iter()
        .filter(|r| matches!(r, Request::FileClose { id: 11 }))
        .count();
    assert_eq!(closes, 1);
}

#[test]
fn explicit_close_reports_result_and_skips_drop_close() {
    let mut c = client([
        Response::FileOpen(Reply::Success(2)),
        Response::FileClose(Reply::failure(5, "Input/output error")),
    ]);
    let file = c.open_file("/data/f", &[FileOpenFlag::RdOnly], 0).unwrap();
    assert_eq!(file.close().unwrap_err().errno(), Some(5));
    assert_eq!(c.transport().requests().len(), 2);
}

#[test]
fn guard_read_to_end_stops_on_empty_read() {
    let mut c = client([
        Response::FileOpen(Reply::Success(1)),
        Response::FileRead(Reply::Success(b"abc".to_vec())),
        Response::FileRead(Reply::Success(b"def".to_vec())),
        Response::FileRead(Reply::Success(Vec::new())),
        Response::FileClose(Reply::Success(())),
    ]);
    let mut file = c.open_file("/data/f", &[FileOpenFlag::RdOnly], 0).unwrap();
    assert_eq!(file.read_to_end(3).unwrap(), b"abcdef");
    file.close().unwrap();
}

#[test]
fn guard_write_all_continues_after_short_write() {
    let mut c = client([
        Response::FileOpen(Reply::Success(1)),
        Response::FileWrite(Reply::Success(2)),
        Response::FileWrite(Reply::Success(3)),
        Response::FileClose(Reply::Success(())),
    ]);
    let mut file = c.open_file("/data/f", &[FileOpenFlag::WrOnly], 0).unwrap();
    file.write_all(b"12345").unwrap();
    file.close().unwrap();

    let requests = c.transport().requests();
    assert_eq!(requests[1], Request::FileWrite { id: 1, data: b"12345".to_vec() });
    assert_eq!(requests[2], Request::FileWrite { id: 1, data: b"345".to_vec() });
}

#[test]
fn with_file_closes_when_body_fails() {
    let mut c = client([
        Response::FileOpen(Reply::Success(8)),
        Response::FileRead(Reply::failure(21, "Is a directory")),
        Response::FileClose(Reply::Success(())),
    ]);
    let err = c
        .with_file("/data", &[FileOpenFlag::RdOnly], 0, |c, id| c.file_read(id, 16))
        .unwrap_err();
    assert_eq!(err.errno(), Some(21));
    assert_eq!(c.transport().requests().last(), Some(&Request::FileClose { id: 8 }));
}

#[test]
fn with_file_body_error_wins_over_close_error() {
    let mut c = client([
        Response::FileOpen(Reply::Success(8)),
        Response::FileRead(Reply::failure(21, "Is a directory")),
        Response::FileClose(Reply::failure(EBADF, "Bad file descriptor")),
    ]);
    let err = c
        .with_file("/data", &[FileOpenFlag::RdOnly], 0, |c, id| c.file_read(id, 16))
        .unwrap_err();
    assert_eq!(err.errno(), Some(21));
}

#[test]
fn with_file_reports_close_error_after_successful_body() {
    let mut c = client([
        Response::FileOpen(Reply::Success(8)),
        Response::FileStat(Reply::Success(stat_1024())),
        Response::FileClose(Reply::failure(EBADF, "Bad file descriptor")),
    ]);
    let err = c
        .with_file("/data/f", &[FileOpenFlag::RdOnly], 0, |c, id| c.file_stat(id))
        .unwrap_err();
    assert_eq!(err.errno(), Some(EBADF));
}

#[test]
fn failed_open_sends_no_close() {
    let mut c = client([Response::FileOpen(Reply::failure(2, "No such file or directory"))]);
    assert!(c.open_file("/missing", &[FileOpenFlag::RdOnly], 0).is_err());
    assert_eq!(c.transport().requests().len(), 1);
}
