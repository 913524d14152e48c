//! Timer-backed delay
//!
//! `embedded_hal_async::delay::DelayNs` on top of the embassy time driver.
//! The type is a zero-sized `Copy` token so the matrix core can hand a
//! fresh delay to every lock wait.

use embassy_time::Timer;
use embedded_hal_async::delay::DelayNs;

/// Delay driven by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

impl DelayNs for TimerDelay {
    async fn delay_ns(&mut self, ns: u32) {
        Timer::after_nanos(ns as u64).await
    }

    async fn delay_us(&mut self, us: u32) {
        Timer::after_micros(us as u64).await
    }

    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(ms as u64).await
    }
}
