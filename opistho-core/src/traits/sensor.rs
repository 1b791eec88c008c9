//! Sensor capability traits

use crate::state::AmbientReading;

/// Upper bound on the proximity echo wait, in milliseconds
///
/// A missing echo must not stall the control loop; past this bound the
/// reading is reported as the no-echo sentinel.
pub const ECHO_TIMEOUT_MS: u32 = 40;

/// Errors that can occur reading the ambient sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not answer the start signal
    NoResponse,
    /// Transfer completed but the checksum did not match
    ChecksumMismatch,
    /// Value decoded outside the sensor's plausible range
    OutOfRange,
}

/// Combined temperature and humidity transducer
pub trait AmbientSensor {
    /// Read temperature and humidity in one transfer
    ///
    /// Both values come from the same conversion; a failed read yields an
    /// error rather than a partial reading.
    fn read(&mut self) -> Result<AmbientReading, SensorError>;
}

/// Ultrasonic (or equivalent) distance ranger
pub trait ProximitySensor {
    /// Measure the distance to the nearest obstacle in centimeters
    ///
    /// Returns `0` when no echo arrives within `ECHO_TIMEOUT_MS`; the
    /// sentinel feeds the fault mask instead of raising an error.
    fn read_distance_cm(&mut self) -> u16;
}

impl<T: AmbientSensor + ?Sized> AmbientSensor for &mut T {
    fn read(&mut self) -> Result<AmbientReading, SensorError> {
        T::read(self)
    }
}

impl<T: ProximitySensor + ?Sized> ProximitySensor for &mut T {
    fn read_distance_cm(&mut self) -> u16 {
        T::read_distance_cm(self)
    }
}
