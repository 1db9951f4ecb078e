//! FlatBuffers generated types for the mbtool v3 protocol.
//!
//! Wraps the `flatc --rust` output from `schemas/mbtool_v3.fbs`.
//! Regeneration happens in `build.rs` when `flatc` is on PATH;
//! otherwise the checked-in `generated/mbtool_v3_generated.rs` is
//! used directly.

// Generated accessors call `unsafe fn` from `unsafe fn` (pre-2024 pattern).
#[allow(warnings, unsafe_op_in_unsafe_fn, clippy::all, clippy::pedantic)]
#[path = "generated/mbtool_v3_generated.rs"]
mod mbtool_v3_generated;

pub use mbtool_v3_generated::mbtool::daemon::v3::*;

use super::wire;

pub fn switch_result_from_fb(result: MbSwitchRomResult) -> Option<wire::MbSwitchRomResult> {
    wire::MbSwitchRomResult::from_wire(result.0)
}

pub fn exec_status_from_fb(result: SignedExecResult) -> Option<wire::SignedExecStatus> {
    wire::SignedExecStatus::from_wire(result.0)
}
