//! RP2040-specific HAL for the dots LED matrix firmware
//!
//! This crate provides RP2040 implementations of the shared `dots-hal`
//! traits:
//!
//! - I2C bus with per-transaction and probe deadlines (implements `dots_hal::I2cBus`)
//! - Cloneable timer-backed delay for lock and retry waits

#![no_std]

pub mod delay;
pub mod i2c;

pub use delay::TimerDelay;
pub use i2c::{BusTimeouts, Rp2040I2c, TimedI2c};

// Re-export shared traits from dots-hal for convenience
pub use dots_hal::{I2cBus, I2cBusError, I2cConfig};
