//! Board-agnostic core of the dots LED matrix firmware
//!
//! Three or four matrix driver chips share one I2C bus. Each chip keeps
//! its registers in selectable pages, so every access is a page select
//! followed by a transaction, and two tasks interleaving those steps
//! would corrupt each other. This crate serialises all of it:
//!
//! - Register codec and the LED number to register table
//! - Per-chip device locks carrying the page cache
//! - Paged register primitives and composite matrix operations
//! - Bus session (open, probe, close)
//! - Gatekeeper worker consuming a bounded command queue
//! - Client API with notify/blocking calling conventions
//!
//! ```text
//! client ──Command──▶ queue ──▶ gatekeeper ──▶ locks ──▶ registers ──▶ bus
//!   ▲                                │
//!   └────────── mailbox (0x81 / 0x6A) ┘
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod client;
pub mod codec;
pub mod command;
pub mod config;
pub mod error;
pub mod gatekeeper;
pub mod locks;
pub mod matrix;
pub mod page;
pub mod session;
pub mod settings;

#[cfg(test)]
mod sim;

pub use client::{CallMode, CommandError, DeliveryError, DotsClient, Enqueue};
pub use codec::{ChipId, LedRegisters, MatrixLocation, Page};
pub use command::{Command, LedPayload, Mailbox, Request, NOTIFY_ERR, NOTIFY_OK};
pub use config::{BusConfig, GatekeeperConfig, MAX_CHIPS};
pub use error::{Error, Violation};
pub use gatekeeper::{Gatekeeper, GatekeeperState};
pub use locks::{DeviceGuard, DeviceLocks, LockError, LockStats};
pub use matrix::Rgb;
pub use page::PageError;
pub use session::{BusSession, OpenError};
