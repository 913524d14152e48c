//! I2C bus abstractions
//!
//! Provides the async I2C master trait used by the matrix core. Every
//! method is expected to complete within a bounded time; implementations
//! report an expired deadline as [`I2cBusError::Timeout`].

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error (misplaced start/stop)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Transaction did not finish before its deadline
    Timeout,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl I2cBusError {
    /// Returns true if the transaction ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, I2cBusError::Timeout)
    }
}

/// Async I2C bus master
///
/// Addresses are 7-bit. Implementations own any per-transaction timeout.
#[allow(async_fn_in_trait)]
pub trait I2cBus {
    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, register address first
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    async fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError>;

    /// Check that a device acknowledges its address
    async fn probe(&mut self, address: u8) -> Result<(), I2cBusError>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Highest clock the matrix drivers are run at
    pub const MAX_FREQUENCY: u32 = 400_000;

    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Returns true if the clock is non-zero and within [`Self::MAX_FREQUENCY`]
    pub fn is_supported(&self) -> bool {
        self.frequency > 0 && self.frequency <= Self::MAX_FREQUENCY
    }
}
