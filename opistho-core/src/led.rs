//! Reverse-assist LED state machine
//!
//! The indicator maps proximity and the enable flag to an output level or
//! a blink cadence. The active tier is re-evaluated from current inputs
//! every tick (no hysteresis); only the toggle timer persists across
//! ticks within a blink tier.

/// Fast blink half-period in milliseconds (obstacle very close)
pub const BLINK_FAST_MS: u32 = 100;

/// Normal blink half-period in milliseconds (obstacle in caution band)
pub const BLINK_NORMAL_MS: u32 = 250;

/// Upper edge of the fast-blink band, in centimeters
pub const FAST_DISTANCE_CM: u16 = 15;

/// Upper edge of the normal-blink band, in centimeters
pub const NEAR_DISTANCE_CM: u16 = 30;

/// Indicator tier derived from the enable flag and distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkTier {
    /// Sensors disabled or no echo: output low, no toggling
    Off,
    /// Safe distance: output high, no toggling
    Solid,
    /// Caution band (15 < d <= 30 cm): 250 ms half-period
    Normal,
    /// Danger band (d <= 15 cm): 100 ms half-period
    Fast,
}

impl BlinkTier {
    /// Derive the tier for the current inputs
    pub fn for_inputs(sensors_enabled: bool, distance_cm: u16) -> Self {
        if !sensors_enabled || distance_cm == 0 {
            BlinkTier::Off
        } else if distance_cm <= FAST_DISTANCE_CM {
            BlinkTier::Fast
        } else if distance_cm <= NEAR_DISTANCE_CM {
            BlinkTier::Normal
        } else {
            BlinkTier::Solid
        }
    }
}

/// Reverse-assist LED controller
///
/// Holds the toggle timer and current level. Entering `Off` or `Solid`
/// does not reset either, so a re-entered blink tier resumes phase rather
/// than restarting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseLed {
    last_toggle_ms: u32,
    level: bool,
}

impl ReverseLed {
    pub const fn new() -> Self {
        Self {
            last_toggle_ms: 0,
            level: false,
        }
    }

    /// Advance the state machine and return the level to drive
    pub fn update(&mut self, sensors_enabled: bool, distance_cm: u16, now_ms: u32) -> bool {
        match BlinkTier::for_inputs(sensors_enabled, distance_cm) {
            BlinkTier::Off => false,
            BlinkTier::Solid => true,
            BlinkTier::Normal => self.toggle_after(BLINK_NORMAL_MS, now_ms),
            BlinkTier::Fast => self.toggle_after(BLINK_FAST_MS, now_ms),
        }
    }

    fn toggle_after(&mut self, half_period_ms: u32, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_toggle_ms) >= half_period_ms {
            self.level = !self.level;
            self.last_toggle_ms = now_ms;
        }
        self.level
    }
}

impl Default for ReverseLed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bands() {
        assert_eq!(BlinkTier::for_inputs(false, 10), BlinkTier::Off);
        assert_eq!(BlinkTier::for_inputs(true, 0), BlinkTier::Off);
        assert_eq!(BlinkTier::for_inputs(true, 1), BlinkTier::Fast);
        assert_eq!(BlinkTier::for_inputs(true, 15), BlinkTier::Fast);
        assert_eq!(BlinkTier::for_inputs(true, 16), BlinkTier::Normal);
        assert_eq!(BlinkTier::for_inputs(true, 30), BlinkTier::Normal);
        assert_eq!(BlinkTier::for_inputs(true, 31), BlinkTier::Solid);
    }

    #[test]
    fn test_disabled_is_low() {
        let mut led = ReverseLed::new();
        for t in (0..2000).step_by(10) {
            assert!(!led.update(false, 10, t));
        }
    }

    #[test]
    fn test_safe_distance_is_high() {
        let mut led = ReverseLed::new();
        for t in (0..2000).step_by(10) {
            assert!(led.update(true, 80, t));
        }
    }

    #[test]
    fn test_fast_tier_half_period() {
        let mut led = ReverseLed::new();

        // First toggle fires immediately (timer armed at 0, now >= 100
        // after the first 100 ms)
        assert!(!led.update(true, 10, 10));
        assert!(!led.update(true, 10, 99));
        assert!(led.update(true, 10, 100));
        assert!(led.update(true, 10, 199));
        assert!(!led.update(true, 10, 200));
        assert!(led.update(true, 10, 300));
    }

    #[test]
    fn test_normal_tier_half_period() {
        let mut led = ReverseLed::new();

        assert!(!led.update(true, 25, 249));
        assert!(led.update(true, 25, 250));
        assert!(!led.update(true, 25, 500));
        assert!(led.update(true, 25, 750));
    }

    #[test]
    fn test_blink_phase_resumes_after_solid() {
        let mut led = ReverseLed::new();

        // Blink up to a high level at t=100
        assert!(led.update(true, 10, 100));

        // Obstacle recedes: solid output, timer untouched
        assert!(led.update(true, 50, 150));

        // Back in the fast band at t=210: 110 ms since the last toggle,
        // so the level flips immediately rather than restarting a full
        // half-period
        assert!(!led.update(true, 10, 210));
    }

    #[test]
    fn test_toggle_across_wraparound() {
        let mut led = ReverseLed::new();
        led.last_toggle_ms = u32::MAX - 50;
        led.level = true;

        // 50 ms before rollover plus 50 ms after: exactly one half-period
        assert!(led.update(true, 10, u32::MAX - 1));
        assert!(!led.update(true, 10, 49));
    }

    #[test]
    fn test_no_echo_forces_low_mid_blink() {
        let mut led = ReverseLed::new();
        assert!(led.update(true, 10, 100));

        // Echo lost: output drops regardless of blink phase
        assert!(!led.update(true, 0, 110));
    }
}
