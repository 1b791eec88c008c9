//! HC-SR04 ultrasonic ranger
//!
//! A 10 µs trigger pulse starts a measurement; the sensor raises the echo
//! line for the round-trip time of the ultrasonic burst. Distance in
//! centimeters is the pulse width in microseconds divided by 58.
//!
//! The echo wait is bounded so a missing or out-of-range obstacle cannot
//! stall the caller; a timeout reads as the no-echo sentinel `0`, which
//! is a valid reading at the control-loop level, not an error.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use opistho_core::traits::{ProximitySensor, ECHO_TIMEOUT_MS};

/// Echo wait bound in microseconds, matching the core's timing contract
pub const ECHO_TIMEOUT_US: u32 = ECHO_TIMEOUT_MS * 1000;

/// Microseconds of round-trip per centimeter of distance
pub const US_PER_CM: u32 = 58;

/// HC-SR04 driver over separate trigger and echo pins
pub struct Hcsr04<TRIG, ECHO, D> {
    trigger: TRIG,
    echo: ECHO,
    delay: D,
}

impl<TRIG, ECHO, D> Hcsr04<TRIG, ECHO, D>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    D: DelayNs,
{
    pub fn new(trigger: TRIG, echo: ECHO, delay: D) -> Self {
        Self {
            trigger,
            echo,
            delay,
        }
    }

    fn measure_cm(&mut self) -> Option<u16> {
        // 10 us trigger pulse
        self.trigger.set_low().ok()?;
        self.delay.delay_us(5);
        self.trigger.set_high().ok()?;
        self.delay.delay_us(10);
        self.trigger.set_low().ok()?;

        // Wait for the echo pulse to start
        let mut waited_us = 0;
        while !self.echo.is_high().ok()? {
            if waited_us >= ECHO_TIMEOUT_US {
                return None;
            }
            self.delay.delay_us(1);
            waited_us += 1;
        }

        // Measure the pulse width
        let mut pulse_us = 0;
        while self.echo.is_high().ok()? {
            if pulse_us >= ECHO_TIMEOUT_US {
                return None;
            }
            self.delay.delay_us(1);
            pulse_us += 1;
        }

        Some((pulse_us / US_PER_CM) as u16)
    }
}

impl<TRIG, ECHO, D> ProximitySensor for Hcsr04<TRIG, ECHO, D>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    D: DelayNs,
{
    fn read_distance_cm(&mut self) -> u16 {
        // No echo within the bound (or a pin fault) is the sentinel, not
        // an error
        self.measure_cm().unwrap_or(0)
    }
}
