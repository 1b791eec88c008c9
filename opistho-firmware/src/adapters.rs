//! Bindings from the core capability traits to STM32 peripherals

use embassy_stm32::can::frame::Frame;
use embassy_stm32::can::Can;
use embassy_stm32::gpio::Output;
use embassy_time::{Duration, Instant};
use embedded_can::{Frame as _, Id, StandardId};

use opistho_core::state::StateSnapshot;
use opistho_core::traits::{
    BusError, CanBus, Clock, LedOutput, StatusDisplay, SEND_TIMEOUT_MS,
};
use opistho_protocol::CanFrame;

use crate::channels::SNAPSHOT;

/// Millisecond clock over the Embassy time driver
///
/// Truncating to `u32` reintroduces the wraparound the core's timing
/// arithmetic is written for.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Bus link over the bxCAN controller
pub struct BxcanBus<'d> {
    can: Can<'d>,
}

impl<'d> BxcanBus<'d> {
    pub fn new(can: Can<'d>) -> Self {
        Self { can }
    }
}

impl CanBus for BxcanBus<'_> {
    fn try_receive(&mut self) -> Option<CanFrame> {
        let envelope = self.can.try_read().ok()?;
        let frame = envelope.frame;
        // Extended identifiers are not part of this node's protocol
        let Id::Standard(id) = frame.id() else {
            return None;
        };
        CanFrame::new(id.as_raw(), frame.data()).ok()
    }

    fn send(&mut self, frame: &CanFrame) -> Result<(), BusError> {
        let id = StandardId::new(frame.id()).ok_or(BusError::Controller)?;
        let tx = Frame::new_data(id, frame.data()).map_err(|_| BusError::Controller)?;

        // Bounded wait against the transmit mailboxes; the control loop
        // tolerates the dropped frame on timeout
        let deadline = Instant::now() + Duration::from_millis(SEND_TIMEOUT_MS as u64);
        loop {
            if self.can.try_write(&tx).is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BusError::Timeout);
            }
        }
    }
}

/// Indicator line over a push-pull GPIO output
pub struct IndicatorPin {
    pin: Output<'static>,
}

impl IndicatorPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl LedOutput for IndicatorPin {
    fn set_level(&mut self, high: bool) {
        if high {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

/// Display port that hands the snapshot to the display task
pub struct SnapshotPublisher;

impl StatusDisplay for SnapshotPublisher {
    fn show(&mut self, snapshot: &StateSnapshot) {
        SNAPSHOT.signal(*snapshot);
    }
}
