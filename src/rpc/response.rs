//! Typed v3 responses and their FlatBuffers encoding.
//!
//! Decoding dispatches on the `Response.response_type` tag and hands back a
//! closed [`Response`] sum type. Every ordinary response table carries an
//! optional `error` sub-table; when present the operation was recognised
//! but failed, and the payload fields are ignored.

use flatbuffers::{FlatBufferBuilder, WIPOffset};
use serde::Serialize;

use super::builder::{UnionOffset, opt_string, payload, required, shorts, wire_enum_vec};
use super::fb;
use super::wire::{MbSwitchRomResult, RequestType, ResponseType, SignedExecStatus, WipeTarget};
use crate::error::{CommandError, ProtocolError};

/// Contents of a `*Error` sub-table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub errno: i32,
    pub msg: String,
}

/// Outcome embedded in an ordinary response table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Success(T),
    Failure(RemoteError),
}

impl<T> Reply<T> {
    pub fn failure(errno: i32, msg: impl Into<String>) -> Self {
        Self::Failure(RemoteError {
            errno,
            msg: msg.into(),
        })
    }

    /// Turn an embedded error into [`CommandError::Failed`] for `request`.
    pub fn into_result(self, request: RequestType) -> Result<T, CommandError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(RemoteError { errno, msg }) => Err(CommandError::Failed {
                request,
                errno,
                msg,
            }),
        }
    }
}

/// POSIX `stat` fields as reported by the daemon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatBuf {
    pub st_dev: u64,
    pub st_ino: u64,
    pub st_mode: u32,
    pub st_nlink: u64,
    pub st_uid: u32,
    pub st_gid: u32,
    pub st_rdev: u64,
    pub st_size: i64,
    pub st_blksize: i64,
    pub st_blocks: i64,
    pub st_atime: i64,
    pub st_mtime: i64,
    pub st_ctime: i64,
}

/// An installed ROM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RomInfo {
    pub id: String,
    pub system_path: String,
    pub cache_path: String,
    pub data_path: String,
    pub version: String,
    pub build: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WipeResult {
    pub succeeded: Vec<WipeTarget>,
    pub failed: Vec<WipeTarget>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PackageCounts {
    pub system_packages: u32,
    pub system_update_packages: u32,
    pub non_system_packages: u32,
}

/// Terminal state of a signed executable invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedExecResult {
    pub status: SignedExecStatus,
    pub exit_status: i32,
    pub term_sig: i32,
    pub error_msg: Option<String>,
}

/// One decoded `Response` root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Unsupported,
    Invalid,
    FileChmod(Reply<()>),
    FileClose(Reply<()>),
    FileOpen(Reply<i32>),
    FileRead(Reply<Vec<u8>>),
    FileSeek(Reply<i64>),
    FileStat(Reply<StatBuf>),
    FileWrite(Reply<u64>),
    FileSELinuxGetLabel(Reply<String>),
    FileSELinuxSetLabel(Reply<()>),
    PathChmod(Reply<()>),
    PathCopy(Reply<()>),
    PathSELinuxGetLabel(Reply<String>),
    PathSELinuxSetLabel(Reply<()>),
    PathGetDirectorySize(Reply<u64>),
    PathDelete(Reply<()>),
    PathMkdir(Reply<()>),
    PathReadlink(Reply<String>),
    SignedExecOutput(String),
    SignedExec(Reply<SignedExecResult>),
    MbGetVersion(Reply<String>),
    MbGetInstalledRoms(Reply<Vec<RomInfo>>),
    MbGetBootedRomId(Reply<Option<String>>),
    MbSwitchRom(Reply<MbSwitchRomResult>),
    MbSetKernel(Reply<bool>),
    MbWipeRom(Reply<WipeResult>),
    MbGetPackagesCount(Reply<PackageCounts>),
    Reboot(Reply<()>),
    Shutdown(Reply<()>),
}

impl Response {
    pub fn kind(&self) -> ResponseType {
        match self {
            Self::Unsupported => ResponseType::Unsupported,
            Self::Invalid => ResponseType::Invalid,
            Self::FileChmod(_) => ResponseType::FileChmod,
            Self::FileClose(_) => ResponseType::FileClose,
            Self::FileOpen(_) => ResponseType::FileOpen,
            Self::FileRead(_) => ResponseType::FileRead,
            Self::FileSeek(_) => ResponseType::FileSeek,
            Self::FileStat(_) => ResponseType::FileStat,
            Self::FileWrite(_) => ResponseType::FileWrite,
            Self::FileSELinuxGetLabel(_) => ResponseType::FileSELinuxGetLabel,
            Self::FileSELinuxSetLabel(_) => ResponseType::FileSELinuxSetLabel,
            Self::PathChmod(_) => ResponseType::PathChmod,
            Self::PathCopy(_) => ResponseType::PathCopy,
            Self::PathSELinuxGetLabel(_) => ResponseType::PathSELinuxGetLabel,
            Self::PathSELinuxSetLabel(_) => ResponseType::PathSELinuxSetLabel,
            Self::PathGetDirectorySize(_) => ResponseType::PathGetDirectorySize,
            Self::PathDelete(_) => ResponseType::PathDelete,
            Self::PathMkdir(_) => ResponseType::PathMkdir,
            Self::PathReadlink(_) => ResponseType::PathReadlink,
            Self::SignedExecOutput(_) => ResponseType::SignedExecOutput,
            Self::SignedExec(_) => ResponseType::SignedExec,
            Self::MbGetVersion(_) => ResponseType::MbGetVersion,
            Self::MbGetInstalledRoms(_) => ResponseType::MbGetInstalledRoms,
            Self::MbGetBootedRomId(_) => ResponseType::MbGetBootedRomId,
            Self::MbSwitchRom(_) => ResponseType::MbSwitchRom,
            Self::MbSetKernel(_) => ResponseType::MbSetKernel,
            Self::MbWipeRom(_) => ResponseType::MbWipeRom,
            Self::MbGetPackagesCount(_) => ResponseType::MbGetPackagesCount,
            Self::Reboot(_) => ResponseType::Reboot,
            Self::Shutdown(_) => ResponseType::Shutdown,
        }
    }

    // ── Encoding (daemon side) ────────────────────────────────

    /// Serialize into a finished `Response` root buffer.
    pub fn encode(&self) -> Vec<u8> {
        let mut fbb = FlatBufferBuilder::with_capacity(256);
        let body = self.build_body(&mut fbb);
        let root = fb::Response::create(
            &mut fbb,
            &fb::ResponseArgs {
                response_type: self.kind().to_fb(),
                response: Some(body),
            },
        );
        fbb.finish(root, None);
        fbb.finished_data().to_vec()
    }

    fn build_body(&self, fbb: &mut FlatBufferBuilder<'_>) -> UnionOffset {
        match self {
            Self::Unsupported => {
                fb::Unsupported::create(fbb, &fb::UnsupportedArgs {}).as_union_value()
            }
            Self::Invalid => fb::Invalid::create(fbb, &fb::InvalidArgs {}).as_union_value(),
            Self::FileChmod(r) => {
                let error = file_error(fbb, r);
                fb::FileChmodResponse::create(fbb, &fb::FileChmodResponseArgs { error })
                    .as_union_value()
            }
            Self::FileClose(r) => {
                let error = file_error(fbb, r);
                fb::FileCloseResponse::create(fbb, &fb::FileCloseResponseArgs { error })
                    .as_union_value()
            }
            Self::FileOpen(r) => {
                let error = file_error(fbb, r);
                fb::FileOpenResponse::create(
                    fbb,
                    &fb::FileOpenResponseArgs {
                        error,
                        id: success(r).copied().unwrap_or_default(),
                    },
                )
                .as_union_value()
            }
            Self::FileRead(r) => {
                let error = file_error(fbb, r);
                let data = success(r).map(|d| fbb.create_vector(d.as_slice()));
                fb::FileReadResponse::create(
                    fbb,
                    &fb::FileReadResponseArgs {
                        error,
                        bytes_read: success(r).map_or(0, |d| d.len() as u64),
                        data,
                    },
                )
                .as_union_value()
            }
            Self::FileSeek(r) => {
                let error = file_error(fbb, r);
                fb::FileSeekResponse::create(
                    fbb,
                    &fb::FileSeekResponseArgs {
                        error,
                        offset: success(r).copied().unwrap_or_default(),
                    },
                )
                .as_union_value()
            }
            Self::FileStat(r) => {
                let error = file_error(fbb, r);
                let stat = success(r).map(|st| encode_stat(fbb, st));
                fb::FileStatResponse::create(fbb, &fb::FileStatResponseArgs { error, stat })
                    .as_union_value()
            }
            Self::FileWrite(r) => {
                let error = file_error(fbb, r);
                fb::FileWriteResponse::create(
                    fbb,
                    &fb::FileWriteResponseArgs {
                        error,
                        bytes_written: success(r).copied().unwrap_or_default(),
                    },
                )
                .as_union_value()
            }
            Self::FileSELinuxGetLabel(r) => {
                let error = file_error(fbb, r);
                let label = opt_string(fbb, success(r).map(String::as_str));
                fb::FileSELinuxGetLabelResponse::create(
                    fbb,
                    &fb::FileSELinuxGetLabelResponseArgs { error, label },
                )
                .as_union_value()
            }
            Self::FileSELinuxSetLabel(r) => {
                let error = file_error(fbb, r);
                fb::FileSELinuxSetLabelResponse::create(
                    fbb,
                    &fb::FileSELinuxSetLabelResponseArgs { error },
                )
                .as_union_value()
            }
            Self::PathChmod(r) => {
                let error = path_error(fbb, r);
                fb::PathChmodResponse::create(fbb, &fb::PathChmodResponseArgs { error })
                    .as_union_value()
            }
            Self::PathCopy(r) => {
                let error = path_error(fbb, r);
                fb::PathCopyResponse::create(fbb, &fb::PathCopyResponseArgs { error })
                    .as_union_value()
            }
            Self::PathSELinuxGetLabel(r) => {
                let error = path_error(fbb, r);
                let label = opt_string(fbb, success(r).map(String::as_str));
                fb::PathSELinuxGetLabelResponse::create(
                    fbb,
                    &fb::PathSELinuxGetLabelResponseArgs { error, label },
                )
                .as_union_value()
            }
            Self::PathSELinuxSetLabel(r) => {
                let error = path_error(fbb, r);
                fb::PathSELinuxSetLabelResponse::create(
                    fbb,
                    &fb::PathSELinuxSetLabelResponseArgs { error },
                )
                .as_union_value()
            }
            Self::PathGetDirectorySize(r) => {
                let error = path_error(fbb, r);
                fb::PathGetDirectorySizeResponse::create(
                    fbb,
                    &fb::PathGetDirectorySizeResponseArgs {
                        error,
                        size: success(r).copied().unwrap_or_default(),
                    },
                )
                .as_union_value()
            }
            Self::PathDelete(r) => {
                let error = path_error(fbb, r);
                fb::PathDeleteResponse::create(fbb, &fb::PathDeleteResponseArgs { error })
                    .as_union_value()
            }
            Self::PathMkdir(r) => {
                let error = path_error(fbb, r);
                fb::PathMkdirResponse::create(fbb, &fb::PathMkdirResponseArgs { error })
                    .as_union_value()
            }
            Self::PathReadlink(r) => {
                let error = path_error(fbb, r);
                let target = opt_string(fbb, success(r).map(String::as_str));
                fb::PathReadlinkResponse::create(
                    fbb,
                    &fb::PathReadlinkResponseArgs { error, target },
                )
                .as_union_value()
            }
            Self::SignedExecOutput(line) => {
                let line = fbb.create_string(line);
                fb::SignedExecOutputResponse::create(
                    fbb,
                    &fb::SignedExecOutputResponseArgs { line: Some(line) },
                )
                .as_union_value()
            }
            Self::SignedExec(r) => {
                let error = exec_error(fbb, r);
                let result = success(r);
                let error_msg = opt_string(fbb, result.and_then(|res| res.error_msg.as_deref()));
                fb::SignedExecResponse::create(
                    fbb,
                    &fb::SignedExecResponseArgs {
                        error,
                        result: fb::SignedExecResult(result.map_or(0, |res| res.status.wire())),
                        exit_status: result.map_or(0, |res| res.exit_status),
                        term_sig: result.map_or(0, |res| res.term_sig),
                        error_msg,
                    },
                )
                .as_union_value()
            }
            Self::MbGetVersion(r) => {
                let error = mb_error(fbb, r);
                let version = opt_string(fbb, success(r).map(String::as_str));
                fb::MbGetVersionResponse::create(
                    fbb,
                    &fb::MbGetVersionResponseArgs { error, version },
                )
                .as_union_value()
            }
            Self::MbGetInstalledRoms(r) => {
                let error = mb_error(fbb, r);
                let roms = success(r).map(|roms| {
                    let roms: Vec<_> = roms.iter().map(|rom| encode_rom(fbb, rom)).collect();
                    fbb.create_vector(&roms)
                });
                fb::MbGetInstalledRomsResponse::create(
                    fbb,
                    &fb::MbGetInstalledRomsResponseArgs { error, roms },
                )
                .as_union_value()
            }
            Self::MbGetBootedRomId(r) => {
                let error = mb_error(fbb, r);
                let rom_id = opt_string(fbb, success(r).and_then(Option::as_deref));
                fb::MbGetBootedRomIdResponse::create(
                    fbb,
                    &fb::MbGetBootedRomIdResponseArgs { error, rom_id },
                )
                .as_union_value()
            }
            Self::MbSwitchRom(r) => {
                let error = mb_error(fbb, r);
                fb::MbSwitchRomResponse::create(
                    fbb,
                    &fb::MbSwitchRomResponseArgs {
                        error,
                        result: fb::MbSwitchRomResult(success(r).map_or(0, |res| res.wire())),
                    },
                )
                .as_union_value()
            }
            Self::MbSetKernel(r) => {
                let error = mb_error(fbb, r);
                fb::MbSetKernelResponse::create(
                    fbb,
                    &fb::MbSetKernelResponseArgs {
                        error,
                        success: success(r).copied().unwrap_or_default(),
                    },
                )
                .as_union_value()
            }
            Self::MbWipeRom(r) => {
                let error = mb_error(fbb, r);
                let succeeded = success(r).map(|res| shorts(fbb, &res.succeeded, WipeTarget::wire));
                let failed = success(r).map(|res| shorts(fbb, &res.failed, WipeTarget::wire));
                fb::MbWipeRomResponse::create(
                    fbb,
                    &fb::MbWipeRomResponseArgs {
                        error,
                        succeeded,
                        failed,
                    },
                )
                .as_union_value()
            }
            Self::MbGetPackagesCount(r) => {
                let error = mb_error(fbb, r);
                let counts = success(r).copied().unwrap_or_default();
                fb::MbGetPackagesCountResponse::create(
                    fbb,
                    &fb::MbGetPackagesCountResponseArgs {
                        error,
                        system_packages: counts.system_packages,
                        system_update_packages: counts.system_update_packages,
                        non_system_packages: counts.non_system_packages,
                    },
                )
                .as_union_value()
            }
            Self::Reboot(r) => {
                let error = system_error(fbb, r);
                fb::RebootResponse::create(fbb, &fb::RebootResponseArgs { error }).as_union_value()
            }
            Self::Shutdown(r) => {
                let error = system_error(fbb, r);
                fb::ShutdownResponse::create(fbb, &fb::ShutdownResponseArgs { error })
                    .as_union_value()
            }
        }
    }

    // ── Decoding (client side) ────────────────────────────────

    /// Parse a `Response` root buffer.
    pub fn decode(buf: &[u8]) -> Result<Self, ProtocolError> {
        let root = flatbuffers::root::<fb::Response>(buf)?;
        let tag = root.response_type();
        if tag == fb::ResponseType::NONE {
            return Err(ProtocolError::EmptyUnion);
        }
        let kind = ResponseType::from_fb(tag).ok_or(ProtocolError::UnknownTag(tag.0))?;
        Self::decode_body(kind, &root)
    }

    fn decode_body(kind: ResponseType, root: &fb::Response<'_>) -> Result<Self, ProtocolError> {
        let response = match kind {
            ResponseType::Unsupported => {
                payload(root.response_as_unsupported())?;
                Self::Unsupported
            }
            ResponseType::Invalid => {
                payload(root.response_as_invalid())?;
                Self::Invalid
            }
            ResponseType::FileChmod => {
                let t = payload(root.response_as_file_chmod_response())?;
                Self::FileChmod(reply(t.error(), || Ok(()))?)
            }
            ResponseType::FileClose => {
                let t = payload(root.response_as_file_close_response())?;
                Self::FileClose(reply(t.error(), || Ok(()))?)
            }
            ResponseType::FileOpen => {
                let t = payload(root.response_as_file_open_response())?;
                Self::FileOpen(reply(t.error(), || Ok(t.id()))?)
            }
            ResponseType::FileRead => {
                let t = payload(root.response_as_file_read_response())?;
                Self::FileRead(reply(t.error(), || {
                    let data = t.data().map(|v| v.bytes()).unwrap_or_default();
                    if t.bytes_read() != data.len() as u64 {
                        return Err(ProtocolError::Malformed("bytes_read does not match data"));
                    }
                    Ok(data.to_vec())
                })?)
            }
            ResponseType::FileSeek => {
                let t = payload(root.response_as_file_seek_response())?;
                Self::FileSeek(reply(t.error(), || Ok(t.offset()))?)
            }
            ResponseType::FileStat => {
                let t = payload(root.response_as_file_stat_response())?;
                Self::FileStat(reply(t.error(), || {
                    t.stat()
                        .map(|st| decode_stat(&st))
                        .ok_or(ProtocolError::MissingField("stat"))
                })?)
            }
            ResponseType::FileWrite => {
                let t = payload(root.response_as_file_write_response())?;
                Self::FileWrite(reply(t.error(), || Ok(t.bytes_written()))?)
            }
            ResponseType::FileSELinuxGetLabel => {
                let t = payload(root.response_as_file_selinux_get_label_response())?;
                Self::FileSELinuxGetLabel(reply(t.error(), || required(t.label(), "label"))?)
            }
            ResponseType::FileSELinuxSetLabel => {
                let t = payload(root.response_as_file_selinux_set_label_response())?;
                Self::FileSELinuxSetLabel(reply(t.error(), || Ok(()))?)
            }
            ResponseType::PathChmod => {
                let t = payload(root.response_as_path_chmod_response())?;
                Self::PathChmod(reply(t.error(), || Ok(()))?)
            }
            ResponseType::PathCopy => {
                let t = payload(root.response_as_path_copy_response())?;
                Self::PathCopy(reply(t.error(), || Ok(()))?)
            }
            ResponseType::PathSELinuxGetLabel => {
                let t = payload(root.response_as_path_selinux_get_label_response())?;
                Self::PathSELinuxGetLabel(reply(t.error(), || required(t.label(), "label"))?)
            }
            ResponseType::PathSELinuxSetLabel => {
                let t = payload(root.response_as_path_selinux_set_label_response())?;
                Self::PathSELinuxSetLabel(reply(t.error(), || Ok(()))?)
            }
            ResponseType::PathGetDirectorySize => {
                let t = payload(root.response_as_path_get_directory_size_response())?;
                Self::PathGetDirectorySize(reply(t.error(), || Ok(t.size()))?)
            }
            ResponseType::PathDelete => {
                let t = payload(root.response_as_path_delete_response())?;
                Self::PathDelete(reply(t.error(), || Ok(()))?)
            }
            ResponseType::PathMkdir => {
                let t = payload(root.response_as_path_mkdir_response())?;
                Self::PathMkdir(reply(t.error(), || Ok(()))?)
            }
            ResponseType::PathReadlink => {
                let t = payload(root.response_as_path_readlink_response())?;
                Self::PathReadlink(reply(t.error(), || required(t.target(), "target"))?)
            }
            ResponseType::SignedExecOutput => {
                let t = payload(root.response_as_signed_exec_output_response())?;
                Self::SignedExecOutput(required(t.line(), "line")?)
            }
            ResponseType::SignedExec => {
                let t = payload(root.response_as_signed_exec_response())?;
                Self::SignedExec(reply(t.error(), || {
                    Ok(SignedExecResult {
                        status: fb::exec_status_from_fb(t.result()).ok_or(
                            ProtocolError::InvalidEnum {
                                field: "result",
                                value: t.result().0,
                            },
                        )?,
                        exit_status: t.exit_status(),
                        term_sig: t.term_sig(),
                        error_msg: t.error_msg().map(str::to_owned),
                    })
                })?)
            }
            ResponseType::MbGetVersion => {
                let t = payload(root.response_as_mb_get_version_response())?;
                Self::MbGetVersion(reply(t.error(), || required(t.version(), "version"))?)
            }
            ResponseType::MbGetInstalledRoms => {
                let t = payload(root.response_as_mb_get_installed_roms_response())?;
                Self::MbGetInstalledRoms(reply(t.error(), || {
                    t.roms()
                        .into_iter()
                        .flat_map(|roms| roms.iter())
                        .map(|rom| decode_rom(&rom))
                        .collect()
                })?)
            }
            ResponseType::MbGetBootedRomId => {
                let t = payload(root.response_as_mb_get_booted_rom_id_response())?;
                Self::MbGetBootedRomId(reply(t.error(), || Ok(t.rom_id().map(str::to_owned)))?)
            }
            ResponseType::MbSwitchRom => {
                let t = payload(root.response_as_mb_switch_rom_response())?;
                Self::MbSwitchRom(reply(t.error(), || {
                    fb::switch_result_from_fb(t.result()).ok_or(ProtocolError::InvalidEnum {
                        field: "result",
                        value: t.result().0,
                    })
                })?)
            }
            ResponseType::MbSetKernel => {
                let t = payload(root.response_as_mb_set_kernel_response())?;
                Self::MbSetKernel(reply(t.error(), || Ok(t.success()))?)
            }
            ResponseType::MbWipeRom => {
                let t = payload(root.response_as_mb_wipe_rom_response())?;
                Self::MbWipeRom(reply(t.error(), || {
                    Ok(WipeResult {
                        succeeded: wire_enum_vec(t.succeeded(), "succeeded", WipeTarget::from_wire)?,
                        failed: wire_enum_vec(t.failed(), "failed", WipeTarget::from_wire)?,
                    })
                })?)
            }
            ResponseType::MbGetPackagesCount => {
                let t = payload(root.response_as_mb_get_packages_count_response())?;
                Self::MbGetPackagesCount(reply(t.error(), || {
                    Ok(PackageCounts {
                        system_packages: t.system_packages(),
                        system_update_packages: t.system_update_packages(),
                        non_system_packages: t.non_system_packages(),
                    })
                })?)
            }
            ResponseType::Reboot => {
                let t = payload(root.response_as_reboot_response())?;
                Self::Reboot(reply(t.error(), || Ok(()))?)
            }
            ResponseType::Shutdown => {
                let t = payload(root.response_as_shutdown_response())?;
                Self::Shutdown(reply(t.error(), || Ok(()))?)
            }
        };
        Ok(response)
    }
}

fn success<T>(reply: &Reply<T>) -> Option<&T> {
    match reply {
        Reply::Success(value) => Some(value),
        Reply::Failure(_) => None,
    }
}

/// The five `*Error` tables share one layout but are distinct generated types.
trait ErrorTable {
    fn remote(&self) -> RemoteError;
}

macro_rules! error_tables {
    ($($table:ident, $args:ident, $encode:ident;)+) => {
        $(
            impl ErrorTable for fb::$table<'_> {
                fn remote(&self) -> RemoteError {
                    RemoteError {
                        errno: self.errno_value(),
                        msg: self.msg().unwrap_or_default().to_owned(),
                    }
                }
            }

            fn $encode<'fbb, T>(
                fbb: &mut FlatBufferBuilder<'fbb>,
                reply: &Reply<T>,
            ) -> Option<WIPOffset<fb::$table<'fbb>>> {
                let Reply::Failure(err) = reply else {
                    return None;
                };
                let msg = fbb.create_string(&err.msg);
                Some(fb::$table::create(
                    fbb,
                    &fb::$args {
                        errno_value: err.errno,
                        msg: Some(msg),
                    },
                ))
            }
        )+
    };
}

error_tables! {
    FileError, FileErrorArgs, file_error;
    PathError, PathErrorArgs, path_error;
    MbError, MbErrorArgs, mb_error;
    SignedExecError, SignedExecErrorArgs, exec_error;
    SystemError, SystemErrorArgs, system_error;
}

/// An `error` sub-table wins over every payload field.
fn reply<T>(
    error: Option<impl ErrorTable>,
    payload: impl FnOnce() -> Result<T, ProtocolError>,
) -> Result<Reply<T>, ProtocolError> {
    match error {
        Some(err) => Ok(Reply::Failure(err.remote())),
        None => payload().map(Reply::Success),
    }
}

fn encode_stat<'fbb>(
    fbb: &mut FlatBufferBuilder<'fbb>,
    st: &StatBuf,
) -> WIPOffset<fb::StructStat<'fbb>> {
    fb::StructStat::create(
        fbb,
        &fb::StructStatArgs {
            st_dev: st.st_dev,
            st_ino: st.st_ino,
            st_mode: st.st_mode,
            st_nlink: st.st_nlink,
            st_uid: st.st_uid,
            st_gid: st.st_gid,
            st_rdev: st.st_rdev,
            st_size: st.st_size,
            st_blksize: st.st_blksize,
            st_blocks: st.st_blocks,
            st_atime: st.st_atime,
            st_mtime: st.st_mtime,
            st_ctime: st.st_ctime,
        },
    )
}

fn decode_stat(st: &fb::StructStat<'_>) -> StatBuf {
    StatBuf {
        st_dev: st.st_dev(),
        st_ino: st.st_ino(),
        st_mode: st.st_mode(),
        st_nlink: st.st_nlink(),
        st_uid: st.st_uid(),
        st_gid: st.st_gid(),
        st_rdev: st.st_rdev(),
        st_size: st.st_size(),
        st_blksize: st.st_blksize(),
        st_blocks: st.st_blocks(),
        st_atime: st.st_atime(),
        st_mtime: st.st_mtime(),
        st_ctime: st.st_ctime(),
    }
}

fn encode_rom<'fbb>(fbb: &mut FlatBufferBuilder<'fbb>, rom: &RomInfo) -> WIPOffset<fb::MbRom<'fbb>> {
    let id = fbb.create_string(&rom.id);
    let system_path = fbb.create_string(&rom.system_path);
    let cache_path = fbb.create_string(&rom.cache_path);
    let data_path = fbb.create_string(&rom.data_path);
    let version = fbb.create_string(&rom.version);
    let build = fbb.create_string(&rom.build);
    fb::MbRom::create(
        fbb,
        &fb::MbRomArgs {
            id: Some(id),
            system_path: Some(system_path),
            cache_path: Some(cache_path),
            data_path: Some(data_path),
            version: Some(version),
            build: Some(build),
        },
    )
}

fn decode_rom(rom: &fb::MbRom<'_>) -> Result<RomInfo, ProtocolError> {
    let opt = |s: Option<&str>| s.unwrap_or_default().to_owned();
    Ok(RomInfo {
        id: required(rom.id(), "id")?,
        system_path: opt(rom.system_path()),
        cache_path: opt(rom.cache_path()),
        data_path: opt(rom.data_path()),
        version: opt(rom.version()),
        build: opt(rom.build()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish(
        mut fbb: FlatBufferBuilder<'_>,
        tag: fb::ResponseType,
        body: Option<UnionOffset>,
    ) -> Vec<u8> {
        let root = fb::Response::create(
            &mut fbb,
            &fb::ResponseArgs {
                response_type: tag,
                response: body,
            },
        );
        fbb.finish(root, None);
        fbb.finished_data().to_vec()
    }

    #[test]
    fn file_stat_keeps_every_field() {
        let st = StatBuf {
            st_dev: u64::MAX,
            st_ino: 42,
            st_mode: 0o100_644,
            st_nlink: 1,
            st_uid: 1000,
            st_gid: 1000,
            st_rdev: 0,
            st_size: 1024,
            st_blksize: 4096,
            st_blocks: 8,
            st_atime: -1,
            st_mtime: i64::MAX,
            st_ctime: 1_700_000_000,
        };
        let resp = Response::FileStat(Reply::Success(st));
        assert_eq!(Response::decode(&resp.encode()).unwrap(), resp);
    }

    #[test]
    fn error_sub_table_wins_over_payload() {
        let resp: Response = Response::PathReadlink(Reply::failure(22, "Invalid argument"));
        let decoded = Response::decode(&resp.encode()).unwrap();
        assert_eq!(decoded, resp);
        let Response::PathReadlink(reply) = decoded else {
            panic!("wrong variant");
        };
        assert_eq!(
            reply.into_result(RequestType::PathReadlink),
            Err(CommandError::Failed {
                request: RequestType::PathReadlink,
                errno: 22,
                msg: "Invalid argument".into(),
            })
        );
    }

    #[test]
    fn error_table_ignores_stale_payload_fields() {
        let mut fbb = FlatBufferBuilder::new();
        let msg = fbb.create_string("Bad file descriptor");
        let error = fb::FileError::create(
            &mut fbb,
            &fb::FileErrorArgs {
                errno_value: 9,
                msg: Some(msg),
            },
        );
        let body = fb::FileOpenResponse::create(
            &mut fbb,
            &fb::FileOpenResponseArgs {
                error: Some(error),
                id: 7,
            },
        );
        let buf = finish(fbb, fb::ResponseType::FileOpenResponse, Some(body.as_union_value()));
        assert_eq!(
            Response::decode(&buf),
            Ok(Response::FileOpen(Reply::failure(9, "Bad file descriptor")))
        );
    }

    #[test]
    fn unsupported_with_empty_table_is_accepted() {
        let mut fbb = FlatBufferBuilder::new();
        let body = fb::Unsupported::create(&mut fbb, &fb::UnsupportedArgs {});
        let buf = finish(fbb, fb::ResponseType::Unsupported, Some(body.as_union_value()));
        assert_eq!(Response::decode(&buf), Ok(Response::Unsupported));
    }

    #[test]
    fn tagged_response_without_payload_is_protocol_error() {
        for tag in [fb::ResponseType::FileOpenResponse, fb::ResponseType::Unsupported] {
            let buf = finish(FlatBufferBuilder::new(), tag, None);
            assert_eq!(Response::decode(&buf), Err(ProtocolError::MissingPayload));
        }
    }

    #[test]
    fn unknown_and_empty_tags_are_rejected() {
        let buf = finish(FlatBufferBuilder::new(), fb::ResponseType::NONE, None);
        assert_eq!(Response::decode(&buf), Err(ProtocolError::EmptyUnion));

        let mut fbb = FlatBufferBuilder::new();
        let body = fb::Invalid::create(&mut fbb, &fb::InvalidArgs {});
        let buf = finish(fbb, fb::ResponseType(250), Some(body.as_union_value()));
        assert_eq!(Response::decode(&buf), Err(ProtocolError::UnknownTag(250)));
    }

    #[test]
    fn missing_required_label_is_protocol_error() {
        let mut fbb = FlatBufferBuilder::new();
        let body = fb::FileSELinuxGetLabelResponse::create(
            &mut fbb,
            &fb::FileSELinuxGetLabelResponseArgs::default(),
        );
        let buf = finish(
            fbb,
            fb::ResponseType::FileSELinuxGetLabelResponse,
            Some(body.as_union_value()),
        );
        assert_eq!(
            Response::decode(&buf),
            Err(ProtocolError::MissingField("label"))
        );
    }

    #[test]
    fn file_read_length_mismatch_is_rejected() {
        let mut fbb = FlatBufferBuilder::new();
        let data = fbb.create_vector(&[1u8, 2, 3]);
        let body = fb::FileReadResponse::create(
            &mut fbb,
            &fb::FileReadResponseArgs {
                error: None,
                bytes_read: 5,
                data: Some(data),
            },
        );
        let buf = finish(fbb, fb::ResponseType::FileReadResponse, Some(body.as_union_value()));
        assert!(matches!(
            Response::decode(&buf),
            Err(ProtocolError::Malformed(_))
        ));
    }

    #[test]
    fn out_of_range_switch_result_is_rejected() {
        let mut fbb = FlatBufferBuilder::new();
        let body = fb::MbSwitchRomResponse::create(
            &mut fbb,
            &fb::MbSwitchRomResponseArgs {
                error: None,
                result: fb::MbSwitchRomResult(42),
            },
        );
        let buf = finish(fbb, fb::ResponseType::MbSwitchRomResponse, Some(body.as_union_value()));
        assert_eq!(
            Response::decode(&buf),
            Err(ProtocolError::InvalidEnum {
                field: "result",
                value: 42
            })
        );
    }

    #[test]
    fn installed_roms_round_trip() {
        let roms = vec![
            RomInfo {
                id: "primary".into(),
                system_path: "/system".into(),
                cache_path: "/cache".into(),
                data_path: "/data".into(),
                version: "7.1.2".into(),
                build: "NJH47F".into(),
            },
            RomInfo {
                id: "dual".into(),
                ..RomInfo::default()
            },
        ];
        let resp = Response::MbGetInstalledRoms(Reply::Success(roms));
        assert_eq!(Response::decode(&resp.encode()).unwrap(), resp);
    }
}
