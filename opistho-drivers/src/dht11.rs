//! DHT11 temperature/humidity transducer
//!
//! Single-wire protocol: the host pulls the line low for 18 ms to request
//! a conversion, the sensor answers with an 80 µs low / 80 µs high
//! preamble followed by 40 data bits. Each bit starts with a ~50 µs low
//! phase; the length of the following high phase encodes the bit
//! (~26 µs = 0, ~70 µs = 1).
//!
//! The data line needs an open-drain (or switchable) pin with a pull-up,
//! abstracted here as a pin implementing both `InputPin` and `OutputPin`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use opistho_core::state::AmbientReading;
use opistho_core::traits::{AmbientSensor, SensorError};

/// Start-signal low time in milliseconds
const START_LOW_MS: u32 = 18;

/// Bits in one transfer: humidity (16) + temperature (16) + checksum (8)
const FRAME_BITS: usize = 40;

/// High phases longer than this are ones, in microseconds
const BIT_THRESHOLD_US: u32 = 40;

/// Longest level we wait for before declaring the sensor absent
const LEVEL_TIMEOUT_US: u32 = 120;

/// DHT11 driver over a single open-drain data pin
pub struct Dht11<PIN, D> {
    pin: PIN,
    delay: D,
}

impl<PIN, D> Dht11<PIN, D>
where
    PIN: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(pin: PIN, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Run one conversion and return the raw 5-byte frame
    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        // Host start signal: >18 ms low, then release and give the sensor
        // time to take over the line
        self.pin.set_low().map_err(|_| SensorError::NoResponse)?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high().map_err(|_| SensorError::NoResponse)?;
        self.delay.delay_us(40);

        // Sensor preamble: 80 us low, 80 us high
        self.wait_for_level(false, LEVEL_TIMEOUT_US)?;
        self.wait_for_level(true, LEVEL_TIMEOUT_US)?;
        self.wait_for_level(false, LEVEL_TIMEOUT_US)?;

        let mut frame = [0u8; 5];
        for bit in 0..FRAME_BITS {
            // 50 us low separator, then the level-coded high phase
            self.wait_for_level(true, LEVEL_TIMEOUT_US)?;
            let high_us = self.wait_for_level(false, LEVEL_TIMEOUT_US)?;

            if high_us > BIT_THRESHOLD_US {
                frame[bit / 8] |= 1 << (7 - (bit % 8));
            }
        }

        Ok(frame)
    }

    /// Busy-wait until the line reaches `level`, polling in 1 µs steps
    ///
    /// Returns the time waited in microseconds.
    fn wait_for_level(&mut self, level: bool, timeout_us: u32) -> Result<u32, SensorError> {
        let mut waited_us = 0;
        loop {
            let at_level = if level {
                self.pin.is_high()
            } else {
                self.pin.is_low()
            }
            .map_err(|_| SensorError::NoResponse)?;

            if at_level {
                return Ok(waited_us);
            }
            if waited_us >= timeout_us {
                return Err(SensorError::NoResponse);
            }

            self.delay.delay_us(1);
            waited_us += 1;
        }
    }
}

impl<PIN, D> AmbientSensor for Dht11<PIN, D>
where
    PIN: InputPin + OutputPin,
    D: DelayNs,
{
    fn read(&mut self) -> Result<AmbientReading, SensorError> {
        let frame = self.read_frame()?;
        decode_frame(frame)
    }
}

/// Validate the checksum and decode a raw transfer
///
/// Frame layout: `[hum_int, hum_dec, temp_int, temp_dec, checksum]` where
/// the checksum is the wrapping sum of the first four bytes. The DHT11
/// reports decimals in tenths; bit 7 of the temperature decimal byte
/// flags a negative temperature on some part revisions.
pub fn decode_frame(frame: [u8; 5]) -> Result<AmbientReading, SensorError> {
    let sum = frame[0]
        .wrapping_add(frame[1])
        .wrapping_add(frame[2])
        .wrapping_add(frame[3]);
    if sum != frame[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let humidity_pct = frame[0] as f32 + frame[1] as f32 / 10.0;
    let magnitude = frame[2] as f32 + (frame[3] & 0x7F) as f32 / 10.0;
    let temperature_c = if frame[3] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    if !(0.0..=100.0).contains(&humidity_pct) {
        return Err(SensorError::OutOfRange);
    }

    Ok(AmbientReading {
        temperature_c,
        humidity_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_typical_reading() {
        // 45.0 %RH, 23.4 C
        let reading = decode_frame([45, 0, 23, 4, 72]).unwrap();
        assert_eq!(reading.humidity_pct, 45.0);
        assert_eq!(reading.temperature_c, 23.4);
    }

    #[test]
    fn test_decode_negative_temperature() {
        // Bit 7 of the temperature decimal flags a negative value
        let frame = [30, 0, 2, 0x85, 30u8.wrapping_add(2).wrapping_add(0x85)];
        let reading = decode_frame(frame).unwrap();
        assert_eq!(reading.temperature_c, -2.5);
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        assert_eq!(
            decode_frame([45, 0, 23, 4, 73]),
            Err(SensorError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_decode_rejects_impossible_humidity() {
        let frame = [200, 0, 20, 0, 220];
        assert_eq!(decode_frame(frame), Err(SensorError::OutOfRange));
    }
}
