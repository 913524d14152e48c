//! Dots - LED matrix firmware
//!
//! Main firmware binary for RP2040 boards driving three or four
//! IS31FL3741-style matrix chips over one I2C bus.
//!
//! Pin assignment: I2C0 on GPIO5 (SCL) and GPIO4 (SDA).

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use dots_hal_rp2040::i2c::rp_config;
use dots_hal_rp2040::TimedI2c;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dots firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let gatekeeper_config = config::gatekeeper_config();
    info!(
        "Matrix bus: {} chips at {} Hz, queue depth {}",
        gatekeeper_config.bus.chip_count(),
        gatekeeper_config.bus.i2c.frequency,
        config::QUEUE_DEPTH
    );

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_5,
        p.PIN_4,
        Irqs,
        rp_config(&gatekeeper_config.bus.i2c),
    );
    let bus = TimedI2c::new(i2c, config::bus_timeouts());
    info!("I2C initialized for the matrix bus");

    spawner
        .spawn(tasks::gatekeeper_task(bus, gatekeeper_config))
        .unwrap();
    spawner.spawn(tasks::display_task()).unwrap();

    info!("All tasks spawned");
}
