//! Multiboot ROM management.

use std::fmt;

use log::{info, warn};
use serde::Serialize;

use super::MbtoolClient;
use crate::boot::BootBlockDevResolver;
use crate::error::Result;
use crate::rpc::request::Request;
use crate::rpc::response::{PackageCounts, Response, RomInfo, WipeResult};
use crate::rpc::transport::Transport;
use crate::rpc::wire::{MbSwitchRomResult, ResponseType, WipeTarget};

/// Outcome of [`MbtoolClient::switch_rom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwitchRomResult {
    Succeeded,
    Failed,
    ChecksumInvalid,
    ChecksumNotFound,
    /// No boot block device was found; nothing was sent.
    UnknownBootPartition,
}

impl From<MbSwitchRomResult> for SwitchRomResult {
    fn from(result: MbSwitchRomResult) -> Self {
        match result {
            MbSwitchRomResult::Succeeded => Self::Succeeded,
            MbSwitchRomResult::Failed => Self::Failed,
            MbSwitchRomResult::ChecksumInvalid => Self::ChecksumInvalid,
            MbSwitchRomResult::ChecksumNotFound => Self::ChecksumNotFound,
        }
    }
}

impl fmt::Display for SwitchRomResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::ChecksumInvalid => "checksum invalid",
            Self::ChecksumNotFound => "checksum not found",
            Self::UnknownBootPartition => "unknown boot partition",
        })
    }
}

/// Outcome of [`MbtoolClient::set_kernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SetKernelResult {
    Succeeded,
    Failed,
    /// No boot block device was found; nothing was sent.
    UnknownBootPartition,
}

impl fmt::Display for SetKernelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::UnknownBootPartition => "unknown boot partition",
        })
    }
}

impl<T: Transport> MbtoolClient<T> {
    pub fn get_version(&mut self) -> Result<String> {
        rpc!(self, Request::MbGetVersion, MbGetVersion)
    }

    pub fn get_installed_roms(&mut self) -> Result<Vec<RomInfo>> {
        rpc!(self, Request::MbGetInstalledRoms, MbGetInstalledRoms)
    }

    /// `None` when the daemon cannot tell which ROM booted.
    pub fn get_booted_rom_id(&mut self) -> Result<Option<String>> {
        rpc!(self, Request::MbGetBootedRomId, MbGetBootedRomId)
    }

    /// Make `rom_id` the ROM that boots next.
    ///
    /// Returns [`SwitchRomResult::UnknownBootPartition`] without contacting
    /// the daemon when `resolver` finds no boot block device.
    pub fn switch_rom(
        &mut self,
        rom_id: &str,
        force_update_checksums: bool,
        resolver: &dyn BootBlockDevResolver,
    ) -> Result<SwitchRomResult> {
        let Some(boot_blockdev) = resolver.boot_block_device() else {
            warn!("RPC: switch to {rom_id} skipped, boot partition unknown");
            return Ok(SwitchRomResult::UnknownBootPartition);
        };
        let request = Request::MbSwitchRom {
            rom_id: rom_id.to_owned(),
            boot_blockdev,
            blockdev_base_dirs: resolver.search_dirs(),
            force_update_checksums,
        };
        let result = SwitchRomResult::from(rpc!(self, request, MbSwitchRom)?);
        info!("RPC: switch to {rom_id}: {result}");
        Ok(result)
    }

    /// Flash the kernel of `rom_id` to the boot partition.
    ///
    /// Returns [`SetKernelResult::UnknownBootPartition`] without contacting
    /// the daemon when `resolver` finds no boot block device.
    pub fn set_kernel(
        &mut self,
        rom_id: &str,
        resolver: &dyn BootBlockDevResolver,
    ) -> Result<SetKernelResult> {
        let Some(boot_blockdev) = resolver.boot_block_device() else {
            warn!("RPC: set kernel for {rom_id} skipped, boot partition unknown");
            return Ok(SetKernelResult::UnknownBootPartition);
        };
        let request = Request::MbSetKernel {
            rom_id: rom_id.to_owned(),
            boot_blockdev,
        };
        let result = if rpc!(self, request, MbSetKernel)? {
            SetKernelResult::Succeeded
        } else {
            SetKernelResult::Failed
        };
        info!("RPC: set kernel for {rom_id}: {result}");
        Ok(result)
    }

    pub fn wipe_rom(&mut self, rom_id: &str, targets: &[WipeTarget]) -> Result<WipeResult> {
        let request = Request::MbWipeRom {
            rom_id: rom_id.to_owned(),
            targets: targets.to_vec(),
        };
        rpc!(self, request, MbWipeRom)
    }

    pub fn get_packages_counts(&mut self, rom_id: &str) -> Result<PackageCounts> {
        let request = Request::MbGetPackagesCount {
            rom_id: rom_id.to_owned(),
        };
        rpc!(self, request, MbGetPackagesCount)
    }
}
