//! Bus and gatekeeper configuration
//!
//! All values are fixed when the firmware is built; nothing here is
//! reconfigured at runtime.

use dots_hal::I2cConfig;
use heapless::Vec;

use crate::error::Error;

/// Largest number of driver chips on one bus
pub const MAX_CHIPS: usize = 4;

/// Smallest number of driver chips on one bus
pub const MIN_CHIPS: usize = 3;

/// Upper five bits shared by every chip address
pub const BASE_ADDRESS: u8 = 0b0110000;

/// 7-bit address of the chip whose ADDR pins encode `suffix`
pub const fn chip_address(suffix: u8) -> u8 {
    BASE_ADDRESS | (suffix & 0b11)
}

/// Default wait for a device lock held by another caller
pub const DEFAULT_LOCK_TIMEOUT_MS: u32 = 100;

/// Default pause between presence probes
pub const DEFAULT_PROBE_RETRY_MS: u32 = 500;

/// Bus session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusConfig {
    /// Bus timing
    pub i2c: I2cConfig,
    /// Chip addresses in bus order
    pub addresses: Vec<u8, MAX_CHIPS>,
    /// How long a device lock take may wait
    pub lock_timeout_ms: u32,
}

impl BusConfig {
    /// Build a config from a list of 7-bit addresses
    pub fn new(i2c: I2cConfig, addresses: &[u8]) -> Result<Self, Error> {
        let addresses = Vec::from_slice(addresses).map_err(|_| Error::ResourceExhausted)?;
        Ok(Self {
            i2c,
            addresses,
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        })
    }

    /// Three-chip board: ADDR suffixes 0b00, 0b11, 0b10
    pub fn three_chip() -> Self {
        let mut addresses = Vec::new();
        for suffix in [0b00, 0b11, 0b10] {
            let _ = addresses.push(chip_address(suffix));
        }
        Self {
            i2c: I2cConfig::FAST,
            addresses,
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }

    /// Four-chip board: the three-chip layout plus suffix 0b01
    pub fn four_chip() -> Self {
        let mut config = Self::three_chip();
        let _ = config.addresses.push(chip_address(0b01));
        config
    }

    /// Number of chips on the bus
    pub fn chip_count(&self) -> usize {
        self.addresses.len()
    }

    /// Check limits before any device is registered
    pub fn validate(&self) -> Result<(), Error> {
        if !self.i2c.is_supported() {
            return Err(Error::InvalidArgument);
        }
        if self.addresses.len() < MIN_CHIPS {
            return Err(Error::InvalidArgument);
        }
        for (i, addr) in self.addresses.iter().enumerate() {
            if *addr > 0x7F || self.addresses[..i].contains(addr) {
                return Err(Error::InvalidArgument);
            }
        }
        Ok(())
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::three_chip()
    }
}

/// Gatekeeper configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatekeeperConfig {
    /// Session the gatekeeper opens
    pub bus: BusConfig,
    /// Pause between failed open or probe attempts
    pub probe_retry_ms: u32,
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            bus: BusConfig::default(),
            probe_retry_ms: DEFAULT_PROBE_RETRY_MS,
        }
    }
}
