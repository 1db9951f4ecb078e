//! Transport-agnostic RPC subsystem for the mbtool v3 protocol.
//!
//! Blocking request/response layer built on FlatBuffers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        RPC Stack                            │
//! │                                                             │
//! │  ┌───────────┐   ┌──────────┐   ┌────────────────────────┐  │
//! │  │ Transport │──▶│  Codec   │──▶│ Response (union decode)│  │
//! │  │ (trait)   │   │ (framing)│   │  → client::call        │  │
//! │  └───────────┘   └──────────┘   └────────────────────────┘  │
//! │       ▲                                    │                │
//! │       │              ┌─────────────────────┘                │
//! │       │              ▼                                      │
//! │  ┌───────────┐   ┌──────────┐                               │
//! │  │ Transport │◀──│ Request  │   (one in flight per socket)  │
//! │  │ (write)   │   │ (encode) │                               │
//! │  └───────────┘   └──────────┘                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod builder;
pub mod codec;
pub mod fb;
pub mod handshake;
pub mod request;
pub mod response;
pub mod transport;
pub mod wire;
