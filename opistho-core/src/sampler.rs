//! Wraparound-safe sample timers
//!
//! Each periodic activity (ambient sampling, proximity sampling) gates on
//! its own elapsed-interval check. The arithmetic is unsigned wrapping
//! subtraction so cadence stays correct across the millisecond clock's
//! rollover.

/// Fixed sampling interval for both sensors, in milliseconds
pub const SAMPLE_INTERVAL_MS: u32 = 500;

/// Elapsed-interval gate for one periodic activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleTimer {
    interval_ms: u32,
    last_ms: u32,
}

impl SampleTimer {
    /// Create a timer with a fixed interval
    ///
    /// The first firing happens one full interval after time zero.
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    /// Check whether the interval has elapsed
    ///
    /// Returns true and re-arms from `now_ms` when due. Re-arming from the
    /// poll time (rather than `last + interval`) means a late poll slips
    /// the schedule instead of firing in bursts to catch up.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_ms) >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}
