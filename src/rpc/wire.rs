//! Rust-side views of the v3 wire discriminants.
//!
//! The generated bindings in [`super::fb`] model unions and enums as open
//! newtypes over their integer. These closed enums are what the typed
//! request/response layer and the public API use; unknown values stop at
//! the decoder as protocol errors.
//!
//! Union member order and enum numbering are wire format. Append only.

use core::fmt;
use core::str::FromStr;

use super::fb;

/// Protocol version sent during the handshake.
pub const PROTOCOL_VERSION: i32 = 3;

macro_rules! union_tag {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $value:literal => $wire:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $value,)+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            pub fn from_tag(tag: u8) -> Option<Self> {
                match tag {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub const fn tag(self) -> u8 {
                self as u8
            }

            /// Generated union discriminant for this kind.
            pub const fn to_fb(self) -> fb::$name {
                fb::$name(self as u8)
            }

            pub fn from_fb(tag: fb::$name) -> Option<Self> {
                Self::from_tag(tag.0)
            }

            /// Table name as declared in the schema.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $value:literal => $wire:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i16)]
        pub enum $name {
            $($variant = $value,)+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            pub fn from_wire(value: i16) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub const fn wire(self) -> i16 {
                self as i16
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| format!("unknown {}: {s}", stringify!($name)))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(self.name())
            }
        }
    };
}

// ── Union tags ──────────────────────────────────────────────

union_tag! {
    /// Discriminant of the `Request.request` union.
    RequestType {
        FileChmod = 1 => "FileChmodRequest",
        FileClose = 2 => "FileCloseRequest",
        FileOpen = 3 => "FileOpenRequest",
        FileRead = 4 => "FileReadRequest",
        FileSeek = 5 => "FileSeekRequest",
        FileStat = 6 => "FileStatRequest",
        FileWrite = 7 => "FileWriteRequest",
        FileSELinuxGetLabel = 8 => "FileSELinuxGetLabelRequest",
        FileSELinuxSetLabel = 9 => "FileSELinuxSetLabelRequest",
        PathChmod = 10 => "PathChmodRequest",
        PathCopy = 11 => "PathCopyRequest",
        PathSELinuxGetLabel = 12 => "PathSELinuxGetLabelRequest",
        PathSELinuxSetLabel = 13 => "PathSELinuxSetLabelRequest",
        PathGetDirectorySize = 14 => "PathGetDirectorySizeRequest",
        SignedExec = 15 => "SignedExecRequest",
        MbGetVersion = 16 => "MbGetVersionRequest",
        MbGetInstalledRoms = 17 => "MbGetInstalledRomsRequest",
        MbGetBootedRomId = 18 => "MbGetBootedRomIdRequest",
        MbSwitchRom = 19 => "MbSwitchRomRequest",
        MbSetKernel = 20 => "MbSetKernelRequest",
        Reboot = 21 => "RebootRequest",
        MbWipeRom = 22 => "MbWipeRomRequest",
        MbGetPackagesCount = 23 => "MbGetPackagesCountRequest",
        PathDelete = 24 => "PathDeleteRequest",
        PathMkdir = 25 => "PathMkdirRequest",
        PathReadlink = 26 => "PathReadlinkRequest",
        Shutdown = 27 => "ShutdownRequest",
    }
}

union_tag! {
    /// Discriminant of the `Response.response` union.
    ResponseType {
        Unsupported = 1 => "Unsupported",
        Invalid = 2 => "Invalid",
        FileChmod = 3 => "FileChmodResponse",
        FileClose = 4 => "FileCloseResponse",
        FileOpen = 5 => "FileOpenResponse",
        FileRead = 6 => "FileReadResponse",
        FileSeek = 7 => "FileSeekResponse",
        FileStat = 8 => "FileStatResponse",
        FileWrite = 9 => "FileWriteResponse",
        FileSELinuxGetLabel = 10 => "FileSELinuxGetLabelResponse",
        FileSELinuxSetLabel = 11 => "FileSELinuxSetLabelResponse",
        PathChmod = 12 => "PathChmodResponse",
        PathCopy = 13 => "PathCopyResponse",
        PathSELinuxGetLabel = 14 => "PathSELinuxGetLabelResponse",
        PathSELinuxSetLabel = 15 => "PathSELinuxSetLabelResponse",
        PathGetDirectorySize = 16 => "PathGetDirectorySizeResponse",
        SignedExecOutput = 17 => "SignedExecOutputResponse",
        SignedExec = 18 => "SignedExecResponse",
        MbGetVersion = 19 => "MbGetVersionResponse",
        MbGetInstalledRoms = 20 => "MbGetInstalledRomsResponse",
        MbGetBootedRomId = 21 => "MbGetBootedRomIdResponse",
        MbSwitchRom = 22 => "MbSwitchRomResponse",
        MbSetKernel = 23 => "MbSetKernelResponse",
        Reboot = 24 => "RebootResponse",
        MbWipeRom = 25 => "MbWipeRomResponse",
        MbGetPackagesCount = 26 => "MbGetPackagesCountResponse",
        PathDelete = 27 => "PathDeleteResponse",
        PathMkdir = 28 => "PathMkdirResponse",
        PathReadlink = 29 => "PathReadlinkResponse",
        Shutdown = 30 => "ShutdownResponse",
    }
}

// ── Enums ───────────────────────────────────────────────────

wire_enum! {
    /// `open(2)` flag, sent as a list so the daemon maps it to its own ABI.
    FileOpenFlag {
        Append = 0 => "APPEND",
        Creat = 1 => "CREAT",
        Excl = 2 => "EXCL",
        RdOnly = 3 => "RDONLY",
        RdWr = 4 => "RDWR",
        Trunc = 5 => "TRUNC",
        WrOnly = 6 => "WRONLY",
    }
}

wire_enum! {
    SeekWhence {
        Set = 0 => "SEEK_SET",
        Cur = 1 => "SEEK_CUR",
        End = 2 => "SEEK_END",
    }
}

wire_enum! {
    /// Which syscall the daemon uses to delete a path.
    PathDeleteFlag {
        Remove = 0 => "REMOVE",
        Unlink = 1 => "UNLINK",
        Rmdir = 2 => "RMDIR",
        Recursive = 3 => "RECURSIVE",
    }
}

wire_enum! {
    WipeTarget {
        System = 0 => "SYSTEM",
        Cache = 1 => "CACHE",
        Data = 2 => "DATA",
        DalvikCache = 3 => "DALVIK_CACHE",
        Multiboot = 4 => "MULTIBOOT",
    }
}

wire_enum! {
    /// Outcome reported by the daemon for a ROM switch.
    MbSwitchRomResult {
        Succeeded = 0 => "SUCCEEDED",
        Failed = 1 => "FAILED",
        ChecksumInvalid = 2 => "CHECKSUM_INVALID",
        ChecksumNotFound = 3 => "CHECKSUM_NOT_FOUND",
    }
}

wire_enum! {
    SignedExecStatus {
        ProcessExited = 0 => "PROCESS_EXITED",
        ProcessKilledBySignal = 1 => "PROCESS_KILLED_BY_SIGNAL",
        InvalidSignature = 2 => "INVALID_SIGNATURE",
        OtherError = 3 => "OTHER_ERROR",
    }
}

wire_enum! {
    RebootType {
        Framework = 0 => "FRAMEWORK",
        Init = 1 => "INIT",
        Direct = 2 => "DIRECT",
    }
}

wire_enum! {
    ShutdownType {
        Init = 0 => "INIT",
        Direct = 1 => "DIRECT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_tags_are_dense_and_unique() {
        for (i, kind) in RequestType::ALL.iter().enumerate() {
            assert_eq!(kind.tag() as usize, i + 1);
            assert_eq!(RequestType::from_tag(kind.tag()), Some(*kind));
        }
        for (i, kind) in ResponseType::ALL.iter().enumerate() {
            assert_eq!(kind.tag() as usize, i + 1);
            assert_eq!(ResponseType::from_tag(kind.tag()), Some(*kind));
        }
        assert_eq!(RequestType::from_tag(0), None);
        assert_eq!(ResponseType::from_tag(0), None);
        assert_eq!(ResponseType::from_tag(200), None);
    }

    #[test]
    fn union_tags_match_generated_bindings() {
        assert_eq!(RequestType::ALL.len(), fb::RequestType::ENUM_MAX as usize);
        assert_eq!(ResponseType::ALL.len(), fb::ResponseType::ENUM_MAX as usize);
        for kind in RequestType::ALL {
            assert_eq!(kind.to_fb().variant_name(), Some(kind.name()));
            assert_eq!(RequestType::from_fb(kind.to_fb()), Some(*kind));
        }
        for kind in ResponseType::ALL {
            assert_eq!(kind.to_fb().variant_name(), Some(kind.name()));
        }
        assert_eq!(ResponseType::from_fb(fb::ResponseType::NONE), None);
    }

    #[test]
    fn short_enums_match_generated_bindings() {
        for flag in FileOpenFlag::ALL {
            assert_eq!(fb::FileOpenFlag(flag.wire()).variant_name(), Some(flag.name()));
        }
        for whence in SeekWhence::ALL {
            assert_eq!(fb::FileSeekWhence(whence.wire()).variant_name(), Some(whence.name()));
        }
        for flag in PathDeleteFlag::ALL {
            assert_eq!(fb::PathDeleteFlag(flag.wire()).variant_name(), Some(flag.name()));
        }
        for target in WipeTarget::ALL {
            assert_eq!(fb::MbWipeTarget(target.wire()).variant_name(), Some(target.name()));
        }
        for result in MbSwitchRomResult::ALL {
            assert_eq!(fb::MbSwitchRomResult(result.wire()).variant_name(), Some(result.name()));
        }
        for status in SignedExecStatus::ALL {
            assert_eq!(fb::SignedExecResult(status.wire()).variant_name(), Some(status.name()));
        }
        for kind in RebootType::ALL {
            assert_eq!(fb::RebootType(kind.wire()).variant_name(), Some(kind.name()));
        }
        for kind in ShutdownType::ALL {
            assert_eq!(fb::ShutdownType(kind.wire()).variant_name(), Some(kind.name()));
        }
    }

    #[test]
    fn wire_enum_parses_case_insensitively() {
        assert_eq!("dalvik_cache".parse::<WipeTarget>(), Ok(WipeTarget::DalvikCache));
        assert_eq!("SEEK_END".parse::<SeekWhence>(), Ok(SeekWhence::End));
        assert!("bogus".parse::<RebootType>().is_err());
        assert_eq!(FileOpenFlag::from_wire(7), None);
        assert_eq!(SignedExecStatus::from_wire(1), Some(SignedExecStatus::ProcessKilledBySignal));
    }
}
