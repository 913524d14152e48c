//! Board configuration
//!
//! Values are generated from board.toml by build.rs and fixed at build
//! time.

use dots_core::{BusConfig, GatekeeperConfig};
use dots_hal_rp2040::{BusTimeouts, I2cConfig};
use embassy_time::Duration;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Bus timing for the matrix I2C
pub fn i2c_config() -> I2cConfig {
    I2cConfig {
        frequency: I2C_FREQUENCY_HZ,
    }
}

/// Deadlines the HAL adapter applies to bus traffic
pub fn bus_timeouts() -> BusTimeouts {
    BusTimeouts {
        transaction: Duration::from_millis(TRANSACTION_TIMEOUT_MS),
        probe: Duration::from_millis(PROBE_TIMEOUT_MS),
    }
}

/// Gatekeeper settings from the board file
pub fn gatekeeper_config() -> GatekeeperConfig {
    let bus = match BusConfig::new(i2c_config(), CHIP_ADDRESSES) {
        Ok(mut bus) => {
            bus.lock_timeout_ms = LOCK_TIMEOUT_MS;
            bus
        }
        Err(e) => {
            // build.rs limits the list to four addresses
            defmt::error!("board address list rejected: {}, using defaults", e);
            BusConfig::default()
        }
    };

    GatekeeperConfig {
        bus,
        probe_retry_ms: PROBE_RETRY_MS,
    }
}
