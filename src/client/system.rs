//! Reboot and shutdown.
//!
//! All variants share one response shape. On success the device is going
//! down, so the connection may drop right after the reply.

use log::info;

use super::MbtoolClient;
use crate::error::Result;
use crate::rpc::request::Request;
use crate::rpc::response::Response;
use crate::rpc::transport::Transport;
use crate::rpc::wire::{RebootType, ResponseType, ShutdownType};

impl<T: Transport> MbtoolClient<T> {
    /// Ask the Android framework to reboot; `confirm` shows the system
    /// confirmation dialog first.
    pub fn reboot_via_framework(&mut self, confirm: bool) -> Result<()> {
        self.reboot(RebootType::Framework, None, confirm)
    }

    /// Reboot through init, optionally into `arg` (e.g. `recovery`).
    pub fn reboot_via_init(&mut self, arg: Option<&str>) -> Result<()> {
        self.reboot(RebootType::Init, arg, false)
    }

    /// Reboot directly from the daemon, bypassing init.
    pub fn reboot_via_mbtool(&mut self, arg: Option<&str>) -> Result<()> {
        self.reboot(RebootType::Direct, arg, false)
    }

    pub fn shutdown_via_init(&mut self) -> Result<()> {
        self.shutdown(ShutdownType::Init)
    }

    pub fn shutdown_via_mbtool(&mut self) -> Result<()> {
        self.shutdown(ShutdownType::Direct)
    }

    fn reboot(&mut self, kind: RebootType, arg: Option<&str>, confirm: bool) -> Result<()> {
        info!("RPC: reboot ({kind}, arg={arg:?})");
        let request = Request::Reboot {
            kind,
            arg: arg.map(str::to_owned),
            confirm,
        };
        rpc!(self, request, Reboot)
    }

    fn shutdown(&mut self, kind: ShutdownType) -> Result<()> {
        info!("RPC: shutdown ({kind})");
        rpc!(self, Request::Shutdown { kind }, Shutdown)
    }
}
