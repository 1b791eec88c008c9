//! ECU state
//!
//! A single `EcuState` instance lives for the process lifetime and is
//! mutated only from inside the control loop. Everything derived from it
//! (fault mask, status frame, display snapshot) is recomputed per tick.

use opistho_protocol::{Command, StatusReport};

/// One committed ambient conversion
///
/// Temperature and humidity always come from the same read; partial
/// updates are never committed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AmbientReading {
    /// Temperature in degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
}

/// Complete mutable state of the ECU
#[derive(Debug, Clone, PartialEq)]
pub struct EcuState {
    /// Reverse-assist sensors enabled (commanded over the bus)
    pub sensors_enabled: bool,
    /// Forced-fault override (commanded over the bus)
    pub forced_fault: bool,
    /// Last valid ambient reading; `None` until the first successful
    /// sample, which keeps the ambient-invalid fault bit set at boot
    pub ambient: Option<AmbientReading>,
    /// Last proximity reading in centimeters, `0` meaning no echo.
    /// Not cleared while the sensors are disabled, so a stale value can
    /// persist across an enable/disable/enable cycle.
    pub distance_cm: u16,
    /// Fault mask recomputed every tick
    pub fault_flags: u8,
}

impl EcuState {
    /// Safe power-on defaults: reverse assist off, no readings yet
    pub const fn new() -> Self {
        Self {
            sensors_enabled: false,
            forced_fault: false,
            ambient: None,
            distance_cm: 0,
            fault_flags: 0,
        }
    }

    /// Apply one inbound command
    ///
    /// Commands are applied in arrival order; when the same field is
    /// commanded twice in one drain the last writer wins.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetSensorsEnabled(v) => self.sensors_enabled = v,
            Command::SetForcedFault(v) => self.forced_fault = v,
        }
    }

    /// Build the outbound status report
    ///
    /// Temperature truncates to whole signed Celsius, humidity to whole
    /// unsigned percent; a never-valid ambient reading encodes as zero.
    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            temperature_c: self.ambient.map(|a| a.temperature_c as i8).unwrap_or(0),
            humidity_pct: self.ambient.map(|a| a.humidity_pct as u8).unwrap_or(0),
            fault_flags: self.fault_flags,
            sensors_enabled: self.sensors_enabled,
            forced_fault: self.forced_fault,
        }
    }

    /// Read-only snapshot handed to the display collaborator
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            sensors_enabled: self.sensors_enabled,
            forced_fault: self.forced_fault,
            ambient: self.ambient,
            distance_cm: self.distance_cm,
            fault_flags: self.fault_flags,
        }
    }
}

impl Default for EcuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only copy of the state published to the display once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateSnapshot {
    pub sensors_enabled: bool,
    pub forced_fault: bool,
    pub ambient: Option<AmbientReading>,
    pub distance_cm: u16,
    pub fault_flags: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let state = EcuState::new();
        assert!(!state.sensors_enabled);
        assert!(!state.forced_fault);
        assert!(state.ambient.is_none());
        assert_eq!(state.distance_cm, 0);
    }

    #[test]
    fn test_apply_last_write_wins() {
        let mut state = EcuState::new();
        state.apply(Command::SetSensorsEnabled(true));
        state.apply(Command::SetSensorsEnabled(false));
        assert!(!state.sensors_enabled);
    }

    #[test]
    fn test_status_report_truncates_readings() {
        let mut state = EcuState::new();
        state.ambient = Some(AmbientReading {
            temperature_c: 23.7,
            humidity_pct: 61.9,
        });

        let report = state.status_report();
        assert_eq!(report.temperature_c, 23);
        assert_eq!(report.humidity_pct, 61);
    }

    #[test]
    fn test_status_report_invalid_ambient_is_zero() {
        let report = EcuState::new().status_report();
        assert_eq!(report.temperature_c, 0);
        assert_eq!(report.humidity_pct, 0);
    }
}
