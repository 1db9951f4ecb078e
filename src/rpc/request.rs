//! Typed v3 requests and their FlatBuffers encoding.
//!
//! [`Request::encode`] is what the client sends. [`Request::decode`] is the
//! daemon-side view, used by stub daemons in tests and by the fuzz targets.

use flatbuffers::FlatBufferBuilder;

use super::builder::{
    UnionOffset, opt_string, owned, payload, required, shorts, strings, wire_enum, wire_enum_vec,
};
use super::fb;
use super::wire::{
    FileOpenFlag, PathDeleteFlag, RebootType, RequestType, SeekWhence, ShutdownType, WipeTarget,
};
use crate::error::ProtocolError;

/// One request, exactly one union member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FileChmod {
        id: i32,
        mode: u32,
    },
    FileClose {
        id: i32,
    },
    /// `perms` is the schema's `uint` creation mode (`0o644` etc.), not a
    /// signed value.
    FileOpen {
        path: String,
        flags: Vec<FileOpenFlag>,
        perms: u32,
    },
    FileRead {
        id: i32,
        count: u64,
    },
    FileSeek {
        id: i32,
        offset: i64,
        whence: SeekWhence,
    },
    FileStat {
        id: i32,
    },
    FileWrite {
        id: i32,
        data: Vec<u8>,
    },
    FileSELinuxGetLabel {
        id: i32,
    },
    FileSELinuxSetLabel {
        id: i32,
        label: String,
    },
    PathChmod {
        path: String,
        mode: u32,
    },
    PathCopy {
        source: String,
        target: String,
    },
    PathSELinuxGetLabel {
        path: String,
        follow_symlinks: bool,
    },
    PathSELinuxSetLabel {
        path: String,
        label: String,
        follow_symlinks: bool,
    },
    PathGetDirectorySize {
        path: String,
        exclusions: Vec<String>,
    },
    PathDelete {
        path: String,
        flag: PathDeleteFlag,
    },
    PathMkdir {
        path: String,
        mode: u32,
        recursive: bool,
    },
    PathReadlink {
        path: String,
    },
    SignedExec {
        binary_path: String,
        signature_path: String,
        arg0: Option<String>,
        args: Vec<String>,
    },
    MbGetVersion,
    MbGetInstalledRoms,
    MbGetBootedRomId,
    MbSwitchRom {
        rom_id: String,
        boot_blockdev: String,
        blockdev_base_dirs: Vec<String>,
        force_update_checksums: bool,
    },
    MbSetKernel {
        rom_id: String,
        boot_blockdev: String,
    },
    MbWipeRom {
        rom_id: String,
        targets: Vec<WipeTarget>,
    },
    MbGetPackagesCount {
        rom_id: String,
    },
    Reboot {
        kind: RebootType,
        arg: Option<String>,
        confirm: bool,
    },
    Shutdown {
        kind: ShutdownType,
    },
}

impl Request {
    pub fn kind(&self) -> RequestType {
        match self {
            Self::FileChmod { .. } => RequestType::FileChmod,
            Self::FileClose { .. } => RequestType::FileClose,
            Self::FileOpen { .. } => RequestType::FileOpen,
            Self::FileRead { .. } => RequestType::FileRead,
            Self::FileSeek { .. } => RequestType::FileSeek,
            Self::FileStat { .. } => RequestType::FileStat,
            Self::FileWrite { .. } => RequestType::FileWrite,
            Self::FileSELinuxGetLabel { .. } => RequestType::FileSELinuxGetLabel,
            Self::FileSELinuxSetLabel { .. } => RequestType::FileSELinuxSetLabel,
            Self::PathChmod { .. } => RequestType::PathChmod,
            Self::PathCopy { .. } => RequestType::PathCopy,
            Self::PathSELinuxGetLabel { .. } => RequestType::PathSELinuxGetLabel,
            Self::PathSELinuxSetLabel { .. } => RequestType::PathSELinuxSetLabel,
            Self::PathGetDirectorySize { .. } => RequestType::PathGetDirectorySize,
            Self::PathDelete { .. } => RequestType::PathDelete,
            Self::PathMkdir { .. } => RequestType::PathMkdir,
            Self::PathReadlink { .. } => RequestType::PathReadlink,
            Self::SignedExec { .. } => RequestType::SignedExec,
            Self::MbGetVersion => RequestType::MbGetVersion,
            Self::MbGetInstalledRoms => RequestType::MbGetInstalledRoms,
            Self::MbGetBootedRomId => RequestType::MbGetBootedRomId,
            Self::MbSwitchRom { .. } => RequestType::MbSwitchRom,
            Self::MbSetKernel { .. } => RequestType::MbSetKernel,
            Self::MbWipeRom { .. } => RequestType::MbWipeRom,
            Self::MbGetPackagesCount { .. } => RequestType::MbGetPackagesCount,
            Self::Reboot { .. } => RequestType::Reboot,
            Self::Shutdown { .. } => RequestType::Shutdown,
        }
    }

    /// Serialize into a finished `Request` root buffer.
    pub fn encode(&self) -> Vec<u8> {
        let mut fbb = FlatBufferBuilder::with_capacity(256);
        let body = self.build_body(&mut fbb);
        let root = fb::Request::create(
            &mut fbb,
            &fb::RequestArgs {
                request_type: self.kind().to_fb(),
                request: Some(body),
            },
        );
        fbb.finish(root, None);
        fbb.finished_data().to_vec()
    }

    fn build_body(&self, fbb: &mut FlatBufferBuilder<'_>) -> UnionOffset {
        match self {
            Self::FileChmod { id, mode } => {
                fb::FileChmodRequest::create(fbb, &fb::FileChmodRequestArgs { id: *id, mode: *mode })
                    .as_union_value()
            }
            Self::FileClose { id } => {
                fb::FileCloseRequest::create(fbb, &fb::FileCloseRequestArgs { id: *id })
                    .as_union_value()
            }
            Self::FileOpen { path, flags, perms } => {
                let path = fbb.create_string(path);
                let flags = shorts(fbb, flags, FileOpenFlag::wire);
                fb::FileOpenRequest::create(
                    fbb,
                    &fb::FileOpenRequestArgs {
                        path: Some(path),
                        flags: Some(flags),
                        perms: *perms,
                    },
                )
                .as_union_value()
            }
            Self::FileRead { id, count } => fb::FileReadRequest::create(
                fbb,
                &fb::FileReadRequestArgs {
                    id: *id,
                    count: *count,
                },
            )
            .as_union_value(),
            Self::FileSeek { id, offset, whence } => fb::FileSeekRequest::create(
                fbb,
                &fb::FileSeekRequestArgs {
                    id: *id,
                    offset: *offset,
                    whence: whence.wire(),
                },
            )
            .as_union_value(),
            Self::FileStat { id } => {
                fb::FileStatRequest::create(fbb, &fb::FileStatRequestArgs { id: *id })
                    .as_union_value()
            }
            Self::FileWrite { id, data } => {
                let data = fbb.create_vector(data.as_slice());
                fb::FileWriteRequest::create(
                    fbb,
                    &fb::FileWriteRequestArgs {
                        id: *id,
                        data: Some(data),
                    },
                )
                .as_union_value()
            }
            Self::FileSELinuxGetLabel { id } => fb::FileSELinuxGetLabelRequest::create(
                fbb,
                &fb::FileSELinuxGetLabelRequestArgs { id: *id },
            )
            .as_union_value(),
            Self::FileSELinuxSetLabel { id, label } => {
                let label = fbb.create_string(label);
                fb::FileSELinuxSetLabelRequest::create(
                    fbb,
                    &fb::FileSELinuxSetLabelRequestArgs {
                        id: *id,
                        label: Some(label),
                    },
                )
                .as_union_value()
            }
            Self::PathChmod { path, mode } => {
                let path = fbb.create_string(path);
                fb::PathChmodRequest::create(
                    fbb,
                    &fb::PathChmodRequestArgs {
                        path: Some(path),
                        mode: *mode,
                    },
                )
                .as_union_value()
            }
            Self::PathCopy { source, target } => {
                let source = fbb.create_string(source);
                let target = fbb.create_string(target);
                fb::PathCopyRequest::create(
                    fbb,
                    &fb::PathCopyRequestArgs {
                        source: Some(source),
                        target: Some(target),
                    },
                )
                .as_union_value()
            }
            Self::PathSELinuxGetLabel {
                path,
                follow_symlinks,
            } => {
                let path = fbb.create_string(path);
                fb::PathSELinuxGetLabelRequest::create(
                    fbb,
                    &fb::PathSELinuxGetLabelRequestArgs {
                        path: Some(path),
                        follow_symlinks: *follow_symlinks,
                    },
                )
                .as_union_value()
            }
            Self::PathSELinuxSetLabel {
                path,
                label,
                follow_symlinks,
            } => {
                let path = fbb.create_string(path);
                let label = fbb.create_string(label);
                fb::PathSELinuxSetLabelRequest::create(
                    fbb,
                    &fb::PathSELinuxSetLabelRequestArgs {
                        path: Some(path),
                        label: Some(label),
                        follow_symlinks: *follow_symlinks,
                    },
                )
                .as_union_value()
            }
            Self::PathGetDirectorySize { path, exclusions } => {
                let path = fbb.create_string(path);
                let exclusions = strings(fbb, exclusions);
                fb::PathGetDirectorySizeRequest::create(
                    fbb,
                    &fb::PathGetDirectorySizeRequestArgs {
                        path: Some(path),
                        exclusions: Some(exclusions),
                    },
                )
                .as_union_value()
            }
            Self::PathDelete { path, flag } => {
                let path = fbb.create_string(path);
                fb::PathDeleteRequest::create(
                    fbb,
                    &fb::PathDeleteRequestArgs {
                        path: Some(path),
                        flag: flag.wire(),
                    },
                )
                .as_union_value()
            }
            Self::PathMkdir {
                path,
                mode,
                recursive,
            } => {
                let path = fbb.create_string(path);
                fb::PathMkdirRequest::create(
                    fbb,
                    &fb::PathMkdirRequestArgs {
                        path: Some(path),
                        mode: *mode,
                        recursive: *recursive,
                    },
                )
                .as_union_value()
            }
            Self::PathReadlink { path } => {
                let path = fbb.create_string(path);
                fb::PathReadlinkRequest::create(fbb, &fb::PathReadlinkRequestArgs { path: Some(path) })
                    .as_union_value()
            }
            Self::SignedExec {
                binary_path,
                signature_path,
                arg0,
                args,
            } => {
                let binary_path = fbb.create_string(binary_path);
                let signature_path = fbb.create_string(signature_path);
                let arg0 = opt_string(fbb, arg0.as_deref());
                let args = strings(fbb, args);
                fb::SignedExecRequest::create(
                    fbb,
                    &fb::SignedExecRequestArgs {
                        binary_path: Some(binary_path),
                        signature_path: Some(signature_path),
                        arg0,
                        args: Some(args),
                    },
                )
                .as_union_value()
            }
            Self::MbGetVersion => {
                fb::MbGetVersionRequest::create(fbb, &fb::MbGetVersionRequestArgs {}).as_union_value()
            }
            Self::MbGetInstalledRoms => {
                fb::MbGetInstalledRomsRequest::create(fbb, &fb::MbGetInstalledRomsRequestArgs {})
                    .as_union_value()
            }
            Self::MbGetBootedRomId => {
                fb::MbGetBootedRomIdRequest::create(fbb, &fb::MbGetBootedRomIdRequestArgs {})
                    .as_union_value()
            }
            Self::MbSwitchRom {
                rom_id,
                boot_blockdev,
                blockdev_base_dirs,
                force_update_checksums,
            } => {
                let rom_id = fbb.create_string(rom_id);
                let boot_blockdev = fbb.create_string(boot_blockdev);
                let base_dirs = strings(fbb, blockdev_base_dirs);
                fb::MbSwitchRomRequest::create(
                    fbb,
                    &fb::MbSwitchRomRequestArgs {
                        rom_id: Some(rom_id),
                        boot_blockdev: Some(boot_blockdev),
                        blockdev_base_dirs: Some(base_dirs),
                        force_update_checksums: *force_update_checksums,
                    },
                )
                .as_union_value()
            }
            Self::MbSetKernel {
                rom_id,
                boot_blockdev,
            } => {
                let rom_id = fbb.create_string(rom_id);
                let boot_blockdev = fbb.create_string(boot_blockdev);
                fb::MbSetKernelRequest::create(
                    fbb,
                    &fb::MbSetKernelRequestArgs {
                        rom_id: Some(rom_id),
                        boot_blockdev: Some(boot_blockdev),
                    },
                )
                .as_union_value()
            }
            Self::MbWipeRom { rom_id, targets } => {
                let rom_id = fbb.create_string(rom_id);
                let targets = shorts(fbb, targets, WipeTarget::wire);
                fb::MbWipeRomRequest::create(
                    fbb,
                    &fb::MbWipeRomRequestArgs {
                        rom_id: Some(rom_id),
                        targets: Some(targets),
                    },
                )
                .as_union_value()
            }
            Self::MbGetPackagesCount { rom_id } => {
                let rom_id = fbb.create_string(rom_id);
                fb::MbGetPackagesCountRequest::create(
                    fbb,
                    &fb::MbGetPackagesCountRequestArgs {
                        rom_id: Some(rom_id),
                    },
                )
                .as_union_value()
            }
            Self::Reboot { kind, arg, confirm } => {
                let arg = opt_string(fbb, arg.as_deref());
                fb::RebootRequest::create(
                    fbb,
                    &fb::RebootRequestArgs {
                        type_: kind.wire(),
                        arg,
                        confirm: *confirm,
                    },
                )
                .as_union_value()
            }
            Self::Shutdown { kind } => fb::ShutdownRequest::create(
                fbb,
                &fb::ShutdownRequestArgs {
                    type_: kind.wire(),
                },
            )
            .as_union_value(),
        }
    }

    /// Parse a `Request` root buffer.
    pub fn decode(buf: &[u8]) -> Result<Self, ProtocolError> {
        let root = flatbuffers::root::<fb::Request>(buf)?;
        let tag = root.request_type();
        if tag == fb::RequestType::NONE {
            return Err(ProtocolError::EmptyUnion);
        }
        let kind = RequestType::from_fb(tag).ok_or(ProtocolError::UnknownTag(tag.0))?;
        Self::decode_body(kind, &root)
    }

    fn decode_body(kind: RequestType, root: &fb::Request<'_>) -> Result<Self, ProtocolError> {
        let request = match kind {
            RequestType::FileChmod => {
                let t = payload(root.request_as_file_chmod_request())?;
                Self::FileChmod {
                    id: t.id(),
                    mode: t.mode(),
                }
            }
            RequestType::FileClose => Self::FileClose {
                id: payload(root.request_as_file_close_request())?.id(),
            },
            RequestType::FileOpen => {
                let t = payload(root.request_as_file_open_request())?;
                Self::FileOpen {
                    path: required(t.path(), "path")?,
                    flags: wire_enum_vec(t.flags(), "flags", FileOpenFlag::from_wire)?,
                    perms: t.perms(),
                }
            }
            RequestType::FileRead => {
                let t = payload(root.request_as_file_read_request())?;
                Self::FileRead {
                    id: t.id(),
                    count: t.count(),
                }
            }
            RequestType::FileSeek => {
                let t = payload(root.request_as_file_seek_request())?;
                Self::FileSeek {
                    id: t.id(),
                    offset: t.offset(),
                    whence: wire_enum(t.whence(), "whence", SeekWhence::from_wire)?,
                }
            }
            RequestType::FileStat => Self::FileStat {
                id: payload(root.request_as_file_stat_request())?.id(),
            },
            RequestType::FileWrite => {
                let t = payload(root.request_as_file_write_request())?;
                Self::FileWrite {
                    id: t.id(),
                    data: t.data().map(|v| v.bytes().to_vec()).unwrap_or_default(),
                }
            }
            RequestType::FileSELinuxGetLabel => Self::FileSELinuxGetLabel {
                id: payload(root.request_as_file_selinux_get_label_request())?.id(),
            },
            RequestType::FileSELinuxSetLabel => {
                let t = payload(root.request_as_file_selinux_set_label_request())?;
                Self::FileSELinuxSetLabel {
                    id: t.id(),
                    label: required(t.label(), "label")?,
                }
            }
            RequestType::PathChmod => {
                let t = payload(root.request_as_path_chmod_request())?;
                Self::PathChmod {
                    path: required(t.path(), "path")?,
                    mode: t.mode(),
                }
            }
            RequestType::PathCopy => {
                let t = payload(root.request_as_path_copy_request())?;
                Self::PathCopy {
                    source: required(t.source(), "source")?,
                    target: required(t.target(), "target")?,
                }
            }
            RequestType::PathSELinuxGetLabel => {
                let t = payload(root.request_as_path_selinux_get_label_request())?;
                Self::PathSELinuxGetLabel {
                    path: required(t.path(), "path")?,
                    follow_symlinks: t.follow_symlinks(),
                }
            }
            RequestType::PathSELinuxSetLabel => {
                let t = payload(root.request_as_path_selinux_set_label_request())?;
                Self::PathSELinuxSetLabel {
                    path: required(t.path(), "path")?,
                    label: required(t.label(), "label")?,
                    follow_symlinks: t.follow_symlinks(),
                }
            }
            RequestType::PathGetDirectorySize => {
                let t = payload(root.request_as_path_get_directory_size_request())?;
                Self::PathGetDirectorySize {
                    path: required(t.path(), "path")?,
                    exclusions: owned(t.exclusions()),
                }
            }
            RequestType::PathDelete => {
                let t = payload(root.request_as_path_delete_request())?;
                Self::PathDelete {
                    path: required(t.path(), "path")?,
                    flag: wire_enum(t.flag(), "flag", PathDeleteFlag::from_wire)?,
                }
            }
            RequestType::PathMkdir => {
                let t = payload(root.request_as_path_mkdir_request())?;
                Self::PathMkdir {
                    path: required(t.path(), "path")?,
                    mode: t.mode(),
                    recursive: t.recursive(),
                }
            }
            RequestType::PathReadlink => {
                let t = payload(root.request_as_path_readlink_request())?;
                Self::PathReadlink {
                    path: required(t.path(), "path")?,
                }
            }
            RequestType::SignedExec => {
                let t = payload(root.request_as_signed_exec_request())?;
                Self::SignedExec {
                    binary_path: required(t.binary_path(), "binary_path")?,
                    signature_path: required(t.signature_path(), "signature_path")?,
                    arg0: t.arg0().map(str::to_owned),
                    args: owned(t.args()),
                }
            }
            RequestType::MbGetVersion => {
                payload(root.request_as_mb_get_version_request())?;
                Self::MbGetVersion
            }
            RequestType::MbGetInstalledRoms => {
                payload(root.request_as_mb_get_installed_roms_request())?;
                Self::MbGetInstalledRoms
            }
            RequestType::MbGetBootedRomId => {
                payload(root.request_as_mb_get_booted_rom_id_request())?;
                Self::MbGetBootedRomId
            }
            RequestType::MbSwitchRom => {
                let t = payload(root.request_as_mb_switch_rom_request())?;
                Self::MbSwitchRom {
                    rom_id: required(t.rom_id(), "rom_id")?,
                    boot_blockdev: required(t.boot_blockdev(), "boot_blockdev")?,
                    blockdev_base_dirs: owned(t.blockdev_base_dirs()),
                    force_update_checksums: t.force_update_checksums(),
                }
            }
            RequestType::MbSetKernel => {
                let t = payload(root.request_as_mb_set_kernel_request())?;
                Self::MbSetKernel {
                    rom_id: required(t.rom_id(), "rom_id")?,
                    boot_blockdev: required(t.boot_blockdev(), "boot_blockdev")?,
                }
            }
            RequestType::MbWipeRom => {
                let t = payload(root.request_as_mb_wipe_rom_request())?;
                Self::MbWipeRom {
                    rom_id: required(t.rom_id(), "rom_id")?,
                    targets: wire_enum_vec(t.targets(), "targets", WipeTarget::from_wire)?,
                }
            }
            RequestType::MbGetPackagesCount => {
                let t = payload(root.request_as_mb_get_packages_count_request())?;
                Self::MbGetPackagesCount {
                    rom_id: required(t.rom_id(), "rom_id")?,
                }
            }
            RequestType::Reboot => {
                let t = payload(root.request_as_reboot_request())?;
                Self::Reboot {
                    kind: wire_enum(t.type_(), "type", RebootType::from_wire)?,
                    arg: t.arg().map(str::to_owned),
                    confirm: t.confirm(),
                }
            }
            RequestType::Shutdown => {
                let t = payload(root.request_as_shutdown_request())?;
                Self::Shutdown {
                    kind: wire_enum(t.type_(), "type", ShutdownType::from_wire)?,
                }
            }
        };
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_open_survives_encode_decode() {
        let req = Request::FileOpen {
            path: "/data/foo".into(),
            flags: vec![FileOpenFlag::RdOnly],
            perms: 0o644,
        };
        let buf = req.encode();
        assert_eq!(Request::decode(&buf).unwrap(), req);
    }

    #[test]
    fn optional_strings_keep_absence() {
        let with_arg = Request::Reboot {
            kind: RebootType::Init,
            arg: Some(String::new()),
            confirm: false,
        };
        let without = Request::Reboot {
            kind: RebootType::Framework,
            arg: None,
            confirm: true,
        };
        assert_eq!(Request::decode(&with_arg.encode()).unwrap(), with_arg);
        assert_eq!(Request::decode(&without.encode()).unwrap(), without);
    }

    #[test]
    fn encoded_fields_are_readable_through_generated_accessors() {
        let buf = Request::MbSetKernel {
            rom_id: "dual".into(),
            boot_blockdev: "/dev/block/by-name/boot".into(),
        }
        .encode();
        let root = flatbuffers::root::<fb::Request>(&buf).unwrap();
        assert_eq!(root.request_type(), fb::RequestType::MbSetKernelRequest);
        let body = root.request_as_mb_set_kernel_request().unwrap();
        assert_eq!(body.rom_id(), Some("dual"));
        assert_eq!(body.boot_blockdev(), Some("/dev/block/by-name/boot"));
    }

    #[test]
    fn missing_union_value_is_rejected() {
        let mut fbb = FlatBufferBuilder::new();
        let root = fb::Request::create(
            &mut fbb,
            &fb::RequestArgs {
                request_type: fb::RequestType::FileStatRequest,
                request: None,
            },
        );
        fbb.finish(root, None);
        assert_eq!(
            Request::decode(fbb.finished_data()),
            Err(ProtocolError::MissingPayload)
        );
    }

    #[test]
    fn unknown_and_empty_tags_are_rejected() {
        for (tag, expected) in [
            (fb::RequestType::NONE, ProtocolError::EmptyUnion),
            (fb::RequestType(200), ProtocolError::UnknownTag(200)),
        ] {
            let mut fbb = FlatBufferBuilder::new();
            let body = (tag != fb::RequestType::NONE).then(|| {
                fb::MbGetVersionRequest::create(&mut fbb, &fb::MbGetVersionRequestArgs {})
                    .as_union_value()
            });
            let root = fb::Request::create(
                &mut fbb,
                &fb::RequestArgs {
                    request_type: tag,
                    request: body,
                },
            );
            fbb.finish(root, None);
            assert_eq!(Request::decode(fbb.finished_data()), Err(expected));
        }
    }

    #[test]
    fn out_of_range_enum_is_rejected() {
        let mut fbb = FlatBufferBuilder::new();
        let path = fbb.create_string("/x");
        let body = fb::PathDeleteRequest::create(
            &mut fbb,
            &fb::PathDeleteRequestArgs {
                path: Some(path),
                flag: 99,
            },
        );
        let root = fb::Request::create(
            &mut fbb,
            &fb::RequestArgs {
                request_type: fb::RequestType::PathDeleteRequest,
                request: Some(body.as_union_value()),
            },
        );
        fbb.finish(root, None);
        assert_eq!(
            Request::decode(fbb.finished_data()),
            Err(ProtocolError::InvalidEnum {
                field: "flag",
                value: 99
            })
        );
    }

    #[test]
    fn truncated_buffer_fails_verification() {
        let buf = Request::PathReadlink {
            path: "/system/bin/sh".into(),
        }
        .encode();
        assert!(matches!(
            Request::decode(&buf[..buf.len() / 2]),
            Err(ProtocolError::InvalidBuffer(_))
        ));
    }
}
