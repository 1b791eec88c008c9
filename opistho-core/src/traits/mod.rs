//! Capability traits for hardware abstraction
//!
//! The control loop is generic over these traits so it can run against
//! real peripherals in firmware and in-memory doubles in tests.

mod bus;
mod clock;
mod display;
mod indicator;
mod sensor;

pub use bus::{BusError, CanBus, SEND_TIMEOUT_MS};
pub use clock::Clock;
pub use display::StatusDisplay;
pub use indicator::LedOutput;
pub use sensor::{AmbientSensor, ProximitySensor, SensorError, ECHO_TIMEOUT_MS};
