//! Matrix bus gatekeeper task

use defmt::*;
use dots_core::{Gatekeeper, GatekeeperConfig};
use dots_hal_rp2040::{Rp2040I2c, TimerDelay};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::channels::DOTS_QUEUE;
use crate::config::QUEUE_DEPTH;

/// The I2C the matrix chips hang off
pub type MatrixBus = Rp2040I2c<'static, I2C0>;

type MatrixGatekeeper = Gatekeeper<
    'static,
    'static,
    CriticalSectionRawMutex,
    MatrixBus,
    TimerDelay,
    QUEUE_DEPTH,
>;

/// Gatekeeper task - sole owner of the matrix bus
#[embassy_executor::task]
pub async fn gatekeeper_task(bus: MatrixBus, config: GatekeeperConfig) {
    info!("Gatekeeper task started");

    let gatekeeper: MatrixGatekeeper = Gatekeeper::new(DOTS_QUEUE.receiver(), config, TimerDelay);
    gatekeeper.run(bus).await;
}
