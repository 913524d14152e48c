//! Display task
//!
//! Brings the matrices up, runs the startup pattern once and then idles.

use defmt::*;
use dots_core::codec::LED_COUNT;
use dots_core::{CallMode, DotsClient, Rgb};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Timer};

use crate::channels::{DISPLAY_MAILBOX, DOTS_QUEUE};
use crate::config::{GLOBAL_CURRENT, QUEUE_DEPTH};

type Client = DotsClient<'static, 'static, CriticalSectionRawMutex, QUEUE_DEPTH>;

/// Pause between LEDs in the startup pattern
const STEP_DELAY: Duration = Duration::from_millis(5);

const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Display task - drives the matrices through the gatekeeper
#[embassy_executor::task]
pub async fn display_task() {
    info!("Display task started");

    let client: Client = DotsClient::new(DOTS_QUEUE.sender(), &DISPLAY_MAILBOX);

    if let Err(e) = client.bring_up(GLOBAL_CURRENT).await {
        error!("Matrix bring-up failed: {}", e);
        return;
    }
    info!("Matrices up, global current {}", GLOBAL_CURRENT);

    startup_pattern(&client).await;
    info!("Startup pattern done");
}

/// Light every LED in turn, then clear them all
async fn startup_pattern(client: &Client) {
    for led in 1..=LED_COUNT as u16 {
        if let Err(e) = client.set_scaling(led, WHITE, CallMode::SILENT).await {
            warn!("LED {} scaling not queued: {}", led, e);
        }
        if let Err(e) = client.set_color(led, WHITE, CallMode::SILENT).await {
            warn!("LED {} color not queued: {}", led, e);
        }
        Timer::after(STEP_DELAY).await;
    }

    // The last clear waits, so the queue has drained when this returns
    for led in 1..=LED_COUNT as u16 {
        let mode = if led as usize == LED_COUNT {
            CallMode::BLOCKING
        } else {
            CallMode::SILENT
        };
        if let Err(e) = client.set_color(led, Rgb::OFF, mode).await {
            warn!("LED {} clear failed: {}", led, e);
        }
    }
}
