//! Bus link trait
//!
//! The CAN controller owns both mailboxes; the control loop only drains
//! the inbound queue with a zero-wait poll and hands off outbound frames
//! with a bounded wait. Neither direction may stall the tick.

use opistho_protocol::CanFrame;

/// Upper bound on the outbound send wait, in milliseconds
///
/// A send that cannot be queued within this bound is dropped; the next
/// tick broadcasts fresh data anyway.
pub const SEND_TIMEOUT_MS: u32 = 20;

/// Errors surfaced by the bus link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Transmit mailbox stayed full past `SEND_TIMEOUT_MS`
    Timeout,
    /// Controller-level failure (bus-off, malformed frame)
    Controller,
}

/// Non-blocking link to the shared CAN bus
pub trait CanBus {
    /// Poll the inbound mailbox without waiting
    ///
    /// Returns `None` when no frame is queued; an empty mailbox is the
    /// normal case, not an error.
    fn try_receive(&mut self) -> Option<CanFrame>;

    /// Queue a frame for transmission, waiting at most `SEND_TIMEOUT_MS`
    fn send(&mut self, frame: &CanFrame) -> Result<(), BusError>;
}

impl<T: CanBus + ?Sized> CanBus for &mut T {
    fn try_receive(&mut self) -> Option<CanFrame> {
        T::try_receive(self)
    }

    fn send(&mut self, frame: &CanFrame) -> Result<(), BusError> {
        T::send(self, frame)
    }
}
