//! Client library for the mbtool daemon v3 IPC protocol.
//!
//! The daemon runs privileged and listens on a local UNIX socket. This
//! crate frames, encodes and type-checks every request/response pair and
//! exposes one blocking method per remote operation on [`MbtoolClient`].
//!
//! ```no_run
//! use mbtool_client::{ClientConfig, MbtoolClient};
//!
//! let mut client = MbtoolClient::connect(&ClientConfig::default())?;
//! for rom in client.get_installed_roms()? {
//!     println!("{} {}", rom.id, rom.version);
//! }
//! # Ok::<(), mbtool_client::Error>(())
//! ```

#![deny(unused_must_use)]

pub mod boot;
pub mod client;
pub mod config;
pub mod error;
pub mod rpc;

pub use boot::{BootBlockDevResolver, FixedResolver, ProbingResolver};
pub use client::{MbtoolClient, OpenFile, SetKernelResult, SwitchRomResult};
pub use config::ClientConfig;
pub use error::{CommandError, ConfigError, Error, HandshakeError, ProtocolError, Result};
pub use rpc::request::Request;
pub use rpc::response::{
    PackageCounts, RemoteError, Reply, Response, RomInfo, SignedExecResult, StatBuf, WipeResult,
};
pub use rpc::wire::{
    FileOpenFlag, MbSwitchRomResult, PathDeleteFlag, RebootType, RequestType, ResponseType,
    SeekWhence, ShutdownType, SignedExecStatus, WipeTarget,
};
