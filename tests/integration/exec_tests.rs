//! Signed executable invocation with streamed output.

use mbtool_client::{
    CommandError, Error, ProtocolError, Reply, Request, RequestType, Response, ResponseType,
    SignedExecResult, SignedExecStatus,
};

use crate::mock_daemon::client;

fn exited(code: i32) -> Response {
    Response::SignedExec(Reply::Success(SignedExecResult {
        status: SignedExecStatus::ProcessExited,
        exit_status: code,
        term_sig: 0,
        error_msg: None,
    }))
}

fn output(line: &str) -> Response {
    Response::SignedExecOutput(line.to_owned())
}

#[test]
fn lines_reach_callback_in_order_before_result() {
    let lines = ["Mounting /system", "", "Done: 3 files"];
    let mut script: Vec<Response> = lines.iter().map(|l| output(l)).collect();
    script.push(exited(0));
    let mut c = client(script);

    let mut seen = Vec::new();
    let result = c
        .signed_exec("/data/local/tmp/updater", "/data/local/tmp/updater.sig", Some("updater"), &["3", "1"], |line| {
            seen.push(line.to_owned());
        })
        .unwrap();

    assert_eq!(seen, lines);
    assert_eq!(result.status, SignedExecStatus::ProcessExited);
    assert_eq!(result.exit_status, 0);
    assert_eq!(c.transport().unread(), 0);
    assert_eq!(
        c.transport().requests(),
        vec![Request::SignedExec {
            binary_path: "/data/local/tmp/updater".into(),
            signature_path: "/data/local/tmp/updater.sig".into(),
            arg0: Some("updater".into()),
            args: vec!["3".into(), "1".into()],
        }]
    );
}

#[test]
fn no_output_lines_means_no_callbacks() {
    let mut c = client([exited(2)]);
    let mut calls = 0;
    let no_args: &[&str] = &[];
    let result = c.signed_exec("/bin/x", "/bin/x.sig", None, no_args, |_| calls += 1).unwrap();
    assert_eq!(calls, 0);
    assert_eq!(result.exit_status, 2);
}

#[test]
fn signature_failure_is_a_result_not_an_error() {
    let mut c = client([Response::SignedExec(Reply::Success(SignedExecResult {
        status: SignedExecStatus::InvalidSignature,
        exit_status: 0,
        term_sig: 0,
        error_msg: Some("signature mismatch".into()),
    }))]);
    let no_args: &[&str] = &[];
    let result = c.signed_exec("/bin/x", "/bin/x.sig", None, no_args, |_| {}).unwrap();
    assert_eq!(result.status, SignedExecStatus::InvalidSignature);
    assert_eq!(result.error_msg.as_deref(), Some("signature mismatch"));
}

#[test]
fn killed_by_signal_carries_term_sig() {
    let mut c = client([
        output("working"),
        Response::SignedExec(Reply::Success(SignedExecResult {
            status: SignedExecStatus::ProcessKilledBySignal,
            exit_status: 0,
            term_sig: 9,
            error_msg: None,
        })),
    ]);
    let no_args: &[&str] = &[];
    let result = c.signed_exec("/bin/x", "/bin/x.sig", None, no_args, |_| {}).unwrap();
    assert_eq!(result.term_sig, 9);
}

#[test]
fn foreign_response_mid_stream_is_protocol_error() {
    let mut c = client([output("one"), Response::FileClose(Reply::Success(()))]);
    let mut seen = 0;
    let no_args: &[&str] = &[];
    let err = c.signed_exec("/bin/x", "/bin/x.sig", None, no_args, |_| seen += 1).unwrap_err();
    assert_eq!(seen, 1);
    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::UnexpectedResponse {
            expected: ResponseType::SignedExec,
            actual: ResponseType::FileClose,
        })
    ));
}

#[test]
fn unsupported_and_error_table() {
    let no_args: &[&str] = &[];

    let mut c = client([Response::Unsupported]);
    let err = c.signed_exec("/bin/x", "/bin/x.sig", None, no_args, |_| {}).unwrap_err();
    assert!(matches!(
        err,
        Error::Command(CommandError::Unsupported(RequestType::SignedExec))
    ));

    let mut c = client([Response::SignedExec(Reply::failure(13, "Permission denied"))]);
    let err = c.signed_exec("/bin/x", "/bin/x.sig", None, no_args, |_| {}).unwrap_err();
    assert_eq!(err.errno(), Some(13));
}

#[test]
fn daemon_hangup_mid_stream_is_io_error() {
    let mut c = client([output("partial")]);
    let no_args: &[&str] = &[];
    let err = c.signed_exec("/bin/x", "/bin/x.sig", None, no_args, |_| {}).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    assert!(err.is_fatal());
}
