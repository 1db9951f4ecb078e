//! Path RPCs.

use mbtool_client::{PathDeleteFlag, Reply, Request, Response};

use crate::mock_daemon::client;

#[test]
fn path_calls_send_their_arguments() {
    let mut c = client([
        Response::PathCopy(Reply::Success(())),
        Response::PathDelete(Reply::Success(())),
        Response::PathChmod(Reply::Success(())),
        Response::PathMkdir(Reply::Success(())),
        Response::PathSELinuxSetLabel(Reply::Success(())),
    ]);

    c.path_copy("/data/a", "/data/b").unwrap();
    c.path_delete("/data/b", PathDeleteFlag::Recursive).unwrap();
    c.path_chmod("/data/a", 0o755).unwrap();
    c.path_mkdir("/data/x/y", 0o700, true).unwrap();
    c.path_selinux_set_label("/data/a", "u:object_r:media_rw_data_file:s0", false)
        .unwrap();

    assert_eq!(
        c.transport().requests(),
        vec![
            Request::PathCopy {
                source: "/data/a".into(),
                target: "/data/b".into(),
            },
            Request::PathDelete {
                path: "/data/b".into(),
                flag: PathDeleteFlag::Recursive,
            },
            Request::PathChmod {
                path: "/data/a".into(),
                mode: 0o755,
            },
            Request::PathMkdir {
                path: "/data/x/y".into(),
                mode: 0o700,
                recursive: true,
            },
            Request::PathSELinuxSetLabel {
                path: "/data/a".into(),
                label: "u:object_r:media_rw_data_file:s0".into(),
                follow_symlinks: false,
            },
        ]
    );
}

#[test]
fn path_queries_return_payloads() {
    let mut c = client([
        Response::PathReadlink(Reply::Success("/system/bin/toybox".into())),
        Response::PathSELinuxGetLabel(Reply::Success("u:object_r:system_file:s0".into())),
        Response::PathGetDirectorySize(Reply::Success(u64::MAX)),
    ]);

    assert_eq!(c.path_readlink("/system/bin/ls").unwrap(), "/system/bin/toybox");
    assert_eq!(
        c.path_selinux_get_label("/system", true).unwrap(),
        "u:object_r:system_file:s0"
    );
    assert_eq!(
        c.path_get_directory_size("/data", &["media", "app-lib"]).unwrap(),
        u64::MAX
    );

    let requests = c.transport().requests();
    assert_eq!(
        requests[2],
        Request::PathGetDirectorySize {
            path: "/data".into(),
            exclusions: vec!["media".into(), "app-lib".into()],
        }
    );
}

#[test]
fn empty_exclusion_list_is_sent_as_empty() {
    let mut c = client([Response::PathGetDirectorySize(Reply::Success(0))]);
    let none: &[&str] = &[];
    assert_eq!(c.path_get_directory_size("/cache", none).unwrap(), 0);
    assert_eq!(
        c.transport().requests()[0],
        Request::PathGetDirectorySize {
            path: "/cache".into(),
            exclusions: Vec::new(),
        }
    );
}
