//! Fault mask evaluation
//!
//! The mask is a pure function of the current state, recomputed in full
//! every tick. There is no latching or debounce: a transient bad reading
//! is reflected and cleared within one cycle.

use crate::state::EcuState;

/// Bit 0: ambient (temperature) reading currently invalid
pub const FAULT_AMBIENT_INVALID: u8 = 1 << 0;

/// Bit 1: sensors enabled but the ranger reported no echo
pub const FAULT_NO_ECHO: u8 = 1 << 1;

/// Bit 2: overheat
pub const FAULT_OVERTEMP: u8 = 1 << 2;

/// Bit 3: proximity advisory, obstacle within the caution band
///
/// Folded into the fault mask even though it is semantically an advisory;
/// receivers treat the mask as a single status word.
pub const FAULT_PROXIMITY: u8 = 1 << 3;

/// Bit 7: forced-fault override asserted over the bus
pub const FAULT_FORCED: u8 = 1 << 7;

/// Overheat threshold in degrees Celsius
pub const OVERTEMP_LIMIT_C: f32 = 90.0;

/// Proximity advisory threshold in centimeters
pub const PROXIMITY_LIMIT_CM: u16 = 30;

/// Compute the fault mask for the current state
///
/// Bits 4 to 6 are unused and always zero. The no-echo and proximity
/// bits are only meaningful while the sensors are enabled; note that a
/// no-echo reading (distance 0) also satisfies the proximity comparison,
/// so both bits rise together.
pub fn evaluate(state: &EcuState) -> u8 {
    let mut flags = 0;

    if state.ambient.is_none() {
        flags |= FAULT_AMBIENT_INVALID;
    }
    if state.sensors_enabled && state.distance_cm == 0 {
        flags |= FAULT_NO_ECHO;
    }
    if let Some(ambient) = state.ambient {
        if ambient.temperature_c >= OVERTEMP_LIMIT_C {
            flags |= FAULT_OVERTEMP;
        }
    }
    if state.sensors_enabled && state.distance_cm <= PROXIMITY_LIMIT_CM {
        flags |= FAULT_PROXIMITY;
    }
    if state.forced_fault {
        flags |= FAULT_FORCED;
    }

    flags
}
