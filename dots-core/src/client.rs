//! Client API for the gatekeeper queue
//!
//! Application tasks never touch the bus. They build a request, hand it
//! to the gatekeeper through the queue and, if asked to, wait for the
//! outcome on their own mailbox.
//!
//! | `notify` | `blocking` | behaviour                                  |
//! |----------|------------|--------------------------------------------|
//! | false    | any        | return once queued, nothing is reported    |
//! | true     | false      | return once queued, outcome lands later    |
//! | true     | true       | wait for the outcome and return it         |
//!
//! A task must not leave a notify-only request outstanding while making
//! another notifying call: the mailbox keeps one value, and a second
//! outcome overwrites the first.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Sender, TrySendError};

use crate::codec::led_registers;
use crate::command::{Command, LedPayload, Mailbox, Request, NOTIFY_ERR, NOTIFY_OK};
use crate::matrix::Rgb;
use crate::settings::{
    LogicLevel, Operation, PwmFrequency, ResistorSetting, ShortDetection, SwxSetting,
};

/// Why a request never reached the gatekeeper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeliveryError {
    /// Argument outside the operation's valid set
    InvalidArgument,
    /// The queue had no room and the client does not wait
    QueueFull,
}

/// Failure seen by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The request was not queued
    NotDelivered(DeliveryError),
    /// The gatekeeper ran the request and the hardware failed
    Hardware,
}

impl From<DeliveryError> for CommandError {
    fn from(e: DeliveryError) -> Self {
        CommandError::NotDelivered(e)
    }
}

/// Calling convention for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CallMode {
    /// Have the gatekeeper report the outcome to this client's mailbox
    pub notify: bool,
    /// Wait for that report (only meaningful with `notify`)
    pub blocking: bool,
}

impl CallMode {
    /// Wait for the outcome
    pub const BLOCKING: Self = Self {
        notify: true,
        blocking: true,
    };

    /// Queue and return; the outcome arrives in the mailbox later
    pub const NOTIFY: Self = Self {
        notify: true,
        blocking: false,
    };

    /// Queue and forget
    pub const SILENT: Self = Self {
        notify: false,
        blocking: false,
    };
}

/// What to do when the queue is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Enqueue {
    /// Wait for room
    #[default]
    Wait,
    /// Fail with [`DeliveryError::QueueFull`]
    Immediate,
}

/// Handle one task uses to talk to the gatekeeper
pub struct DotsClient<'q, 'm, M: RawMutex, const N: usize> {
    queue: Sender<'q, M, Command<'m, M>, N>,
    mailbox: &'m Mailbox<M>,
    enqueue: Enqueue,
}

impl<'q, 'm, M: RawMutex, const N: usize> DotsClient<'q, 'm, M, N> {
    /// Client reporting to `mailbox`, which must belong to the calling task
    pub fn new(queue: Sender<'q, M, Command<'m, M>, N>, mailbox: &'m Mailbox<M>) -> Self {
        Self {
            queue,
            mailbox,
            enqueue: Enqueue::Wait,
        }
    }

    pub fn with_enqueue(mut self, enqueue: Enqueue) -> Self {
        self.enqueue = enqueue;
        self
    }

    /// Queue a request using `mode`
    pub async fn submit(&self, request: Request, mode: CallMode) -> Result<(), CommandError> {
        let command = Command {
            request,
            notify: mode.notify.then_some(self.mailbox),
        };

        match self.enqueue {
            Enqueue::Wait => self.queue.send(command).await,
            Enqueue::Immediate => {
                if let Err(TrySendError::Full(_rejected)) = self.queue.try_send(command) {
                    // Ownership never moved; the rejected command drops here
                    return Err(DeliveryError::QueueFull.into());
                }
            }
        }

        if mode.notify && mode.blocking {
            self.wait_for_completion().await
        } else {
            Ok(())
        }
    }

    /// Wait for the next non-zero value in the mailbox and decode it
    pub async fn wait_for_completion(&self) -> Result<(), CommandError> {
        loop {
            match self.mailbox.wait().await {
                0 => continue,
                NOTIFY_OK => return Ok(()),
                NOTIFY_ERR => return Err(CommandError::Hardware),
                _other => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("unknown completion value {=u32:#x}", _other);
                    return Err(CommandError::Hardware);
                }
            }
        }
    }

    pub async fn set_operating_mode<T: TryInto<Operation>>(
        &self,
        mode: T,
        call: CallMode,
    ) -> Result<(), CommandError> {
        let mode = validate(mode)?;
        self.submit(Request::SetOperatingMode(mode), call).await
    }

    pub async fn set_open_short_detection<T: TryInto<ShortDetection>>(
        &self,
        detection: T,
        call: CallMode,
    ) -> Result<(), CommandError> {
        let detection = validate(detection)?;
        self.submit(Request::SetOpenShortDetection(detection), call)
            .await
    }

    pub async fn set_logic_level<T: TryInto<LogicLevel>>(
        &self,
        level: T,
        call: CallMode,
    ) -> Result<(), CommandError> {
        let level = validate(level)?;
        self.submit(Request::SetLogicLevel(level), call).await
    }

    pub async fn set_swx_setting<T: TryInto<SwxSetting>>(
        &self,
        setting: T,
        call: CallMode,
    ) -> Result<(), CommandError> {
        let setting = validate(setting)?;
        self.submit(Request::SetSwxSetting(setting), call).await
    }

    /// Global current, 0 (off) to 255 (max); every value is valid
    pub async fn set_global_current(&self, current: u8, call: CallMode) -> Result<(), CommandError> {
        self.submit(Request::SetGlobalCurrent(current), call).await
    }

    pub async fn set_pullup<T: TryInto<ResistorSetting>>(
        &self,
        setting: T,
        call: CallMode,
    ) -> Result<(), CommandError> {
        let setting = validate(setting)?;
        self.submit(Request::SetPullup(setting), call).await
    }

    pub async fn set_pulldown<T: TryInto<ResistorSetting>>(
        &self,
        setting: T,
        call: CallMode,
    ) -> Result<(), CommandError> {
        let setting = validate(setting)?;
        self.submit(Request::SetPulldown(setting), call).await
    }

    pub async fn set_pwm_frequency<T: TryInto<PwmFrequency>>(
        &self,
        frequency: T,
        call: CallMode,
    ) -> Result<(), CommandError> {
        let frequency = validate(frequency)?;
        self.submit(Request::SetPwmFrequency(frequency), call).await
    }

    /// Reset every chip to its power-on defaults
    pub async fn reset(&self, call: CallMode) -> Result<(), CommandError> {
        self.submit(Request::Reset, call).await
    }

    /// Set the color of a 1-based LED
    pub async fn set_color(&self, led: u16, rgb: Rgb, call: CallMode) -> Result<(), CommandError> {
        let payload = led_payload(led, rgb)?;
        self.submit(Request::SetColor(payload), call).await
    }

    /// Set the brightness scaling of a 1-based LED
    pub async fn set_scaling(&self, led: u16, rgb: Rgb, call: CallMode) -> Result<(), CommandError> {
        let payload = led_payload(led, rgb)?;
        self.submit(Request::SetScaling(payload), call).await
    }

    /// Reset, set the global current and leave shutdown, waiting on each
    pub async fn bring_up(&self, global_current: u8) -> Result<(), CommandError> {
        self.reset(CallMode::BLOCKING).await?;
        self.set_global_current(global_current, CallMode::BLOCKING)
            .await?;
        self.set_operating_mode(Operation::Normal, CallMode::BLOCKING)
            .await
    }

    /// Have the gatekeeper close the bus session
    #[cfg(any(test, feature = "testing"))]
    pub async fn release_bus(&self, call: CallMode) -> Result<(), CommandError> {
        self.submit(Request::ReleaseBus, call).await
    }

    /// Have the gatekeeper reopen the bus session
    #[cfg(any(test, feature = "testing"))]
    pub async fn reacquire_bus(&self, call: CallMode) -> Result<(), CommandError> {
        self.submit(Request::ReacquireBus, call).await
    }

    /// Ask for a success reply without bus traffic
    #[cfg(any(test, feature = "testing"))]
    pub async fn notify_ok(&self, call: CallMode) -> Result<(), CommandError> {
        self.submit(Request::NotifyOk, call).await
    }

    /// Ask for a failure reply without bus traffic
    #[cfg(any(test, feature = "testing"))]
    pub async fn notify_err(&self, call: CallMode) -> Result<(), CommandError> {
        self.submit(Request::NotifyErr, call).await
    }
}

fn validate<S, T: TryInto<S>>(value: T) -> Result<S, CommandError> {
    value
        .try_into()
        .map_err(|_| DeliveryError::InvalidArgument.into())
}

fn led_payload(led: u16, rgb: Rgb) -> Result<LedPayload, CommandError> {
    led_registers(led).map_err(|_| DeliveryError::InvalidArgument)?;
    Ok(LedPayload { led, rgb })
}
