//! Commands queued to the gatekeeper
//!
//! A [`Command`] owns its parameters. Sending it moves them into the
//! queue, and the gatekeeper drops them once the request has run, so no
//! caller can observe a payload after handing it over.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

use crate::matrix::Rgb;
use crate::settings::{
    LogicLevel, Operation, PwmFrequency, ResistorSetting, ShortDetection, SwxSetting,
};

/// Completion value for a request that succeeded
pub const NOTIFY_OK: u32 = 0x81;

/// Completion value for a request that failed
pub const NOTIFY_ERR: u32 = 0x6A;

/// Single-slot completion mailbox owned by one calling task
///
/// A new value overwrites one that has not been read yet.
pub type Mailbox<M> = Signal<M, u32>;

/// Parameters for a per-LED request
///
/// Deliberately neither `Clone` nor `Copy`: it has exactly one owner.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPayload {
    /// 1-based LED number, already validated
    pub led: u16,
    pub rgb: Rgb,
}

/// Operation the gatekeeper should run
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    SetOperatingMode(Operation),
    SetOpenShortDetection(ShortDetection),
    SetLogicLevel(LogicLevel),
    SetSwxSetting(SwxSetting),
    SetGlobalCurrent(u8),
    SetPullup(ResistorSetting),
    SetPulldown(ResistorSetting),
    SetPwmFrequency(PwmFrequency),
    Reset,
    SetColor(LedPayload),
    SetScaling(LedPayload),
    /// Close the bus session and keep the bus idle
    #[cfg(any(test, feature = "testing"))]
    ReleaseBus,
    /// Reopen the bus session and probe the chips
    #[cfg(any(test, feature = "testing"))]
    ReacquireBus,
    /// Reply with [`NOTIFY_OK`] without touching the bus
    #[cfg(any(test, feature = "testing"))]
    NotifyOk,
    /// Reply with [`NOTIFY_ERR`] without touching the bus
    #[cfg(any(test, feature = "testing"))]
    NotifyErr,
}

/// A request plus where to report its outcome
pub struct Command<'a, M: RawMutex> {
    pub request: Request,
    pub notify: Option<&'a Mailbox<M>>,
}

impl<'a, M: RawMutex> Command<'a, M> {
    /// Command whose outcome nobody waits for
    pub fn silent(request: Request) -> Self {
        Self {
            request,
            notify: None,
        }
    }

    /// Command that reports its outcome to `mailbox`
    pub fn notifying(request: Request, mailbox: &'a Mailbox<M>) -> Self {
        Self {
            request,
            notify: Some(mailbox),
        }
    }
}

/// Sentinel for a request outcome
pub fn sentinel<T, E>(result: &Result<T, E>) -> u32 {
    match result {
        Ok(_) => NOTIFY_OK,
        Err(_) => NOTIFY_ERR,
    }
}
