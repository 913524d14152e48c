//! I2C bus driver for RP2040
//!
//! Wraps an async embedded-hal I2C master (normally the embassy-rp
//! peripheral in async mode) and bounds every transaction with a deadline.

use dots_hal::{I2cBus, I2cBusError, I2cConfig};
use embassy_rp::i2c::{Async, Config as RpI2cConfig, I2c};
use embassy_time::{with_timeout, Duration};
use embedded_hal::i2c::{Error as _, ErrorKind};

/// The RP2040 I2C peripheral in async mode, wrapped with deadlines
pub type Rp2040I2c<'d, T> = TimedI2c<I2c<'d, T, Async>>;

/// Deadlines applied to bus traffic
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTimeouts {
    /// Limit for a single write or write-read
    pub transaction: Duration,
    /// Limit for a presence probe
    pub probe: Duration,
}

impl Default for BusTimeouts {
    fn default() -> Self {
        Self {
            transaction: Duration::from_millis(100),
            probe: Duration::from_millis(1000),
        }
    }
}

/// Convert the shared bus config into an embassy-rp config
pub fn rp_config(config: &I2cConfig) -> RpI2cConfig {
    let mut rp = RpI2cConfig::default();
    rp.frequency = config.frequency;
    rp
}

/// Async I2C master with deadlines
pub struct TimedI2c<I> {
    i2c: I,
    timeouts: BusTimeouts,
}

impl<I> TimedI2c<I> {
    /// Wrap an I2C master
    pub fn new(i2c: I, timeouts: BusTimeouts) -> Self {
        Self { i2c, timeouts }
    }
}

impl<I: embedded_hal_async::i2c::I2c> I2cBus for TimedI2c<I> {
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        match with_timeout(self.timeouts.transaction, self.i2c.write(address, data)).await {
            Ok(result) => result.map_err(bus_error),
            Err(_) => Err(I2cBusError::Timeout),
        }
    }

    async fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        let transfer = self.i2c.write_read(address, write_data, read_buf);
        match with_timeout(self.timeouts.transaction, transfer).await {
            Ok(result) => result.map_err(bus_error),
            Err(_) => Err(I2cBusError::Timeout),
        }
    }

    async fn probe(&mut self, address: u8) -> Result<(), I2cBusError> {
        // A one byte read is enough to see the address ACK
        let mut scratch = [0u8; 1];
        match with_timeout(self.timeouts.probe, self.i2c.read(address, &mut scratch)).await {
            Ok(result) => result.map_err(bus_error),
            Err(_) => Err(I2cBusError::Timeout),
        }
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(e: E) -> I2cBusError {
    match e.kind() {
        ErrorKind::Bus => I2cBusError::Bus,
        ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
        ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
        ErrorKind::Overrun => I2cBusError::Overrun,
        _ => I2cBusError::Other,
    }
}
