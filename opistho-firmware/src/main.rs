//! Opistho - Reverse-Assist ECU Firmware
//!
//! CAN-connected vehicle node for STM32F4 boards with bxCAN. Samples an
//! ambient transducer and an ultrasonic ranger, broadcasts a status frame
//! on the vehicle bus every control tick, reacts to inbound commands, and
//! drives the reverse-assist indicator.
//!
//! Named after the Greek "opisthen" meaning "behind, rearward" -
//! the direction this ECU watches.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::can::filter::Mask32;
use embassy_stm32::can::{
    Can, Fifo, Rx0InterruptHandler, Rx1InterruptHandler, SceInterruptHandler,
    TxInterruptHandler,
};
use embassy_stm32::gpio::{Input, Level, Output, OutputOpenDrain, Pull, Speed};
use embassy_stm32::peripherals::CAN1;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use opistho_core::control::ControlLoop;
use opistho_drivers::{Dht11, Hcsr04};

use crate::adapters::{BxcanBus, IndicatorPin, SnapshotPublisher, SystemClock};

mod adapters;
mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    CAN1_RX0 => Rx0InterruptHandler<CAN1>;
    CAN1_RX1 => Rx1InterruptHandler<CAN1>;
    CAN1_SCE => SceInterruptHandler<CAN1>;
    CAN1_TX => TxInterruptHandler<CAN1>;
});

/// Vehicle bus bitrate
const CAN_BITRATE: u32 = 500_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Opistho ECU starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // CAN bring-up: accept-all filters, the core discards what it does
    // not recognize
    let mut can = Can::new(p.CAN1, p.PB8, p.PB9, Irqs);
    can.modify_filters()
        .enable_bank(0, Fifo::Fifo0, Mask32::accept_all());
    can.set_bitrate(CAN_BITRATE);
    can.enable().await;
    info!("CAN online at {} bit/s", CAN_BITRATE);

    // HC-SR04 ranging pins
    let trigger = Output::new(p.PA0, Level::Low, Speed::Low);
    let echo = Input::new(p.PA1, Pull::None);

    // DHT11 data line (open drain with external pull-up)
    let dht_pin = OutputOpenDrain::new(p.PA2, Level::High, Speed::Low);

    // Reverse-assist indicator
    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    let ecu = ControlLoop::new(
        SystemClock,
        BxcanBus::new(can),
        Dht11::new(dht_pin, Delay),
        Hcsr04::new(trigger, echo, Delay),
        IndicatorPin::new(led),
        SnapshotPublisher,
    );

    unwrap!(spawner.spawn(tasks::control_task(ecu)));
    unwrap!(spawner.spawn(tasks::display_task()));
    info!("Control loop running");
}
