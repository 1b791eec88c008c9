//! Control loop task
//!
//! Runs the core tick on a fixed cadence. All bus I/O, sampling, fault
//! evaluation and indicator updates happen inside `ControlLoop::tick`;
//! this task only supplies the cadence.

use defmt::*;
use embassy_stm32::gpio::{Input, Output, OutputOpenDrain};
use embassy_time::{Delay, Duration, Ticker};

use opistho_core::control::ControlLoop;
use opistho_drivers::{Dht11, Hcsr04};

use crate::adapters::{BxcanBus, IndicatorPin, SnapshotPublisher, SystemClock};

/// Tick cadence in milliseconds
///
/// Short enough that inbound commands and the 100 ms fast-blink
/// half-period are never visibly late.
pub const TICK_INTERVAL_MS: u64 = 10;

/// The concrete control loop running on this board
pub type EcuLoop = ControlLoop<
    SystemClock,
    BxcanBus<'static>,
    Dht11<OutputOpenDrain<'static>, Delay>,
    Hcsr04<Output<'static>, Input<'static>, Delay>,
    IndicatorPin,
    SnapshotPublisher,
>;

/// Control task, one tick every `TICK_INTERVAL_MS`
#[embassy_executor::task]
pub async fn control_task(mut ecu: EcuLoop) {
    info!("Control task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    loop {
        ecu.tick();
        ticker.next().await;
    }
}
