//! Inter-task communication channels
//!
//! The gatekeeper queue and one completion mailbox per caller task.
//! A mailbox is never shared between tasks.

use dots_core::{Command, Mailbox};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::config::QUEUE_DEPTH;

/// Matrix commands waiting for the gatekeeper
pub type DotsQueue =
    Channel<CriticalSectionRawMutex, Command<'static, CriticalSectionRawMutex>, QUEUE_DEPTH>;

/// Commands for the gatekeeper task
pub static DOTS_QUEUE: DotsQueue = Channel::new();

/// Completion values for the display task
pub static DISPLAY_MAILBOX: Mailbox<CriticalSectionRawMutex> = Signal::new();
