//! Property and fuzz-style tests for the wire codec.
//!
//! Requests and responses must survive encode → decode unchanged across
//! boundary values, and hostile bytes must never panic the decoders.

use mbtool_client::rpc::codec;
use mbtool_client::rpc::transport::Transport;
use std::collections::HashSet;

use mbtool_client::{
    FileOpenFlag, MbSwitchRomResult, PackageCounts, PathDeleteFlag, RebootType, Reply, Request,
    RequestType, Response, ResponseType, RomInfo, SeekWhence, ShutdownType, SignedExecResult,
    SignedExecStatus, StatBuf, WipeResult, WipeTarget,
};
use proptest::prelude::*;
use proptest::sample::select;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

// ── Strategies ────────────────────────────────────────────────

fn text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), ".{0,40}", "/[a-z0-9_./-]{0,60}"]
}

fn texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(text(), 0..6)
}

fn id() -> impl Strategy<Value = i32> {
    prop_oneof![Just(0), Just(-1), Just(i32::MIN), Just(i32::MAX), any::<i32>()]
}

fn size() -> impl Strategy<Value = u64> {
    prop_oneof![Just(0), Just(1), Just(u64::MAX), any::<u64>()]
}

fn offset() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0), Just(-1), Just(i64::MIN), Just(i64::MAX), any::<i64>()]
}

fn request() -> impl Strategy<Value = Request> {
    prop_oneof![
        (id(), any::<u32>()).prop_map(|(id, mode)| Request::FileChmod { id, mode }),
        id().prop_map(|id| Request::FileClose { id }),
        (text(), prop::collection::vec(select(FileOpenFlag::ALL), 0..4), any::<u32>())
            .prop_map(|(path, flags, perms)| Request::FileOpen { path, flags, perms }),
        (id(), size()).prop_map(|(id, count)| Request::FileRead { id, count }),
        (id(), offset(), select(SeekWhence::ALL))
            .prop_map(|(id, offset, whence)| Request::FileSeek { id, offset, whence }),
        id().prop_map(|id| Request::FileStat { id }),
        (id(), prop::collection::vec(any::<u8>(), 0..256))
            .prop_map(|(id, data)| Request::FileWrite { id, data }),
        id().prop_map(|id| Request::FileSELinuxGetLabel { id }),
        (id(), text()).prop_map(|(id, label)| Request::FileSELinuxSetLabel { id, label }),
        (text(), any::<u32>()).prop_map(|(path, mode)| Request::PathChmod { path, mode }),
        (text(), text()).prop_map(|(source, target)| Request::PathCopy { source, target }),
        (text(), any::<bool>()).prop_map(|(path, follow_symlinks)| {
            Request::PathSELinuxGetLabel {
                path,
                follow_symlinks,
            }
        }),
        (text(), text(), any::<bool>()).prop_map(|(path, label, follow_symlinks)| {
            Request::PathSELinuxSetLabel {
                path,
                label,
                follow_symlinks,
            }
        }),
        (text(), texts())
            .prop_map(|(path, exclusions)| Request::PathGetDirectorySize { path, exclusions }),
        (text(), select(PathDeleteFlag::ALL))
            .prop_map(|(path, flag)| Request::PathDelete { path, flag }),
        (text(), any::<u32>(), any::<bool>())
            .prop_map(|(path, mode, recursive)| Request::PathMkdir { path, mode, recursive }),
        text().prop_map(|path| Request::PathReadlink { path }),
        (text(), text(), prop::option::of(text()), texts()).prop_map(
            |(binary_path, signature_path, arg0, args)| Request::SignedExec {
                binary_path,
                signature_path,
                arg0,
                args,
            }
        ),
        (text(), text(), texts(), any::<bool>()).prop_map(
            |(rom_id, boot_blockdev, blockdev_base_dirs, force_update_checksums)| {
                Request::MbSwitchRom {
                    rom_id,
                    boot_blockdev,
                    blockdev_base_dirs,
                    force_update_checksums,
                }
            }
        ),
        (text(), text()).prop_map(|(rom_id, boot_blockdev)| Request::MbSetKernel {
            rom_id,
            boot_blockdev,
        }),
        (text(), prop::collection::vec(select(WipeTarget::ALL), 0..5))
            .prop_map(|(rom_id, targets)| Request::MbWipeRom { rom_id, targets }),
        text().prop_map(|rom_id| Request::MbGetPackagesCount { rom_id }),
        (select(RebootType::ALL), prop::option::of(text()), any::<bool>())
            .prop_map(|(kind, arg, confirm)| Request::Reboot { kind, arg, confirm }),
        select(ShutdownType::ALL).prop_map(|kind| Request::Shutdown { kind }),
        Just(Request::MbGetVersion),
        Just(Request::MbGetInstalledRoms),
        Just(Request::MbGetBootedRomId),
    ]
}

fn stat() -> impl Strategy<Value = StatBuf> {
    (
        (size(), size(), any::<u32>(), size(), any::<u32>(), any::<u32>(), size()),
        (offset(), offset(), offset(), offset(), offset(), offset()),
    )
        .prop_map(
            |(
                (st_dev, st_ino, st_mode, st_nlink, st_uid, st_gid, st_rdev),
                (st_size, st_blksize, st_blocks, st_atime, st_mtime, st_ctime),
            )| StatBuf {
                st_dev,
                st_ino,
                st_mode,
                st_nlink,
                st_uid,
                st_gid,
                st_rdev,
                st_size,
                st_blksize,
                st_blocks,
                st_atime,
                st_mtime,
                st_ctime,
            },
        )
}

fn rom() -> impl Strategy<Value = RomInfo> {
    (text(), text(), text(), text(), text(), text()).prop_map(
        |(id, system_path, cache_path, data_path, version, build)| RomInfo {
            id,
            system_path,
            cache_path,
            data_path,
            version,
            build,
        },
    )
}

fn reply<T: std::fmt::Debug + Clone>(
    payload: impl Strategy<Value = T>,
) -> impl Strategy<Value = Reply<T>> {
    prop_oneof![
        3 => payload.prop_map(Reply::Success),
        1 => (id(), text()).prop_map(|(errno, msg)| Reply::failure(errno, msg)),
    ]
}

fn response() -> impl Strategy<Value = Response> {
    prop_oneof![
        Just(Response::Unsupported),
        Just(Response::Invalid),
        reply(Just(())).prop_map(Response::FileChmod),
        reply(Just(())).prop_map(Response::FileClose),
        reply(id()).prop_map(Response::FileOpen),
        reply(prop::collection::vec(any::<u8>(), 0..256)).prop_map(Response::FileRead),
        reply(offset()).prop_map(Response::FileSeek),
        reply(stat()).prop_map(Response::FileStat),
        reply(size()).prop_map(Response::FileWrite),
        reply(text()).prop_map(Response::FileSELinuxGetLabel),
        reply(Just(())).prop_map(Response::FileSELinuxSetLabel),
        reply(Just(())).prop_map(Response::PathChmod),
        reply(Just(())).prop_map(Response::PathCopy),
        reply(text()).prop_map(Response::PathSELinuxGetLabel),
        reply(Just(())).prop_map(Response::PathSELinuxSetLabel),
        reply(size()).prop_map(Response::PathGetDirectorySize),
        reply(Just(())).prop_map(Response::PathDelete),
        reply(Just(())).prop_map(Response::PathMkdir),
        reply(text()).prop_map(Response::PathReadlink),
        text().prop_map(Response::SignedExecOutput),
        reply(
            (select(SignedExecStatus::ALL), id(), id(), prop::option::of(text())).prop_map(
                |(status, exit_status, term_sig, error_msg)| SignedExecResult {
                    status,
                    exit_status,
                    term_sig,
                    error_msg,
                }
            )
        )
        .prop_map(Response::SignedExec),
        reply(text()).prop_map(Response::MbGetVersion),
        reply(prop::collection::vec(rom(), 0..4)).prop_map(Response::MbGetInstalledRoms),
        reply(prop::option::of(text())).prop_map(Response::MbGetBootedRomId),
        reply(select(MbSwitchRomResult::ALL)).prop_map(Response::MbSwitchRom),
        reply(any::<bool>()).prop_map(Response::MbSetKernel),
        reply(
            (
                prop::collection::vec(select(WipeTarget::ALL), 0..5),
                prop::collection::vec(select(WipeTarget::ALL), 0..5)
            )
                .prop_map(|(succeeded, failed)| WipeResult { succeeded, failed })
        )
        .prop_map(Response::MbWipeRom),
        reply(
            (any::<u32>(), any::<u32>(), any::<u32>()).prop_map(|(a, b, c)| PackageCounts {
                system_packages: a,
                system_update_packages: b,
                non_system_packages: c,
            })
        )
        .prop_map(Response::MbGetPackagesCount),
        reply(Just(())).prop_map(Response::Reboot),
        reply(Just(())).prop_map(Response::Shutdown),
    ]
}

/// Read-only transport over a byte slice.
struct Bytes<'a>(&'a [u8]);

impl Transport for Bytes<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.0.len());
        buf[..n].copy_from_slice(&self.0[..n]);
        self.0 = &self.0[n..];
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ── Round trips ───────────────────────────────────────────────

fn sample<S: Strategy>(strategy: &S, count: usize) -> Vec<S::Value> {
    let mut runner = TestRunner::deterministic();
    (0..count)
        .map(|_| strategy.new_tree(&mut runner).unwrap().current())
        .collect()
}

#[test]
fn strategies_cover_every_union_member() {
    let requests: HashSet<RequestType> =
        sample(&request(), 4000).iter().map(Request::kind).collect();
    for kind in RequestType::ALL {
        assert!(requests.contains(kind), "request strategy never yields {kind}");
    }

    let responses: HashSet<ResponseType> =
        sample(&response(), 4000).iter().map(Response::kind).collect();
    for kind in ResponseType::ALL {
        assert!(responses.contains(kind), "response strategy never yields {kind}");
    }
}

proptest! {
    #[test]
    fn request_survives_encode_decode(req in request()) {
        let decoded = Request::decode(&req.encode()).unwrap();
        prop_assert_eq!(decoded, req);
    }

    #[test]
    fn response_survives_encode_decode(resp in response()) {
        let decoded = Response::decode(&resp.encode()).unwrap();
        prop_assert_eq!(decoded, resp);
    }

    #[test]
    fn framed_response_survives_the_codec(resp in response()) {
        let frame = codec::encode_frame(&resp.encode()).unwrap();
        let payload = codec::read_message(&mut Bytes(&frame), codec::DEFAULT_MAX_MESSAGE_SIZE).unwrap();
        prop_assert_eq!(Response::decode(&payload).unwrap(), resp);
    }
}

// ── Hostile input ─────────────────────────────────────────────

proptest! {
    #[test]
    fn response_decoder_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = Response::decode(&bytes);
        let _ = Request::decode(&bytes);
    }

    #[test]
    fn bit_flipped_response_never_panics(resp in response(), pos in any::<usize>(), bit in 0u8..8) {
        let mut buf = resp.encode();
        let pos = pos % buf.len();
        buf[pos] ^= 1 << bit;
        let _ = Response::decode(&buf);
    }

    #[test]
    fn frame_reader_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64), max in 0usize..128) {
        let _ = codec::read_message(&mut Bytes(&bytes), max);
    }
}
