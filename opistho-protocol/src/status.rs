//! Outbound status frames
//!
//! One status frame is broadcast per control tick on identifier 0x100.
//! The layout is fixed at 8 bytes; bytes 6 and 7 are reserved and must be
//! zero.

use crate::frame::{CanFrame, FrameError};

/// Identifier the status frame is sent on
pub const STATUS_FRAME_ID: u16 = 0x100;

/// Fixed status frame length
pub const STATUS_FRAME_LEN: usize = 8;

/// Constant marker in byte 0, lets receivers validate frame identity
/// beyond the CAN id
pub const STATUS_MARKER: u8 = 50;

/// Decoded contents of a status frame
///
/// Temperature is truncated to whole signed Celsius, humidity to whole
/// unsigned percent; readings that have never been valid encode as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    pub temperature_c: i8,
    pub humidity_pct: u8,
    pub fault_flags: u8,
    pub sensors_enabled: bool,
    pub forced_fault: bool,
}

impl StatusReport {
    /// Encode this report into a status frame
    pub fn to_frame(&self) -> CanFrame {
        CanFrame {
            id: STATUS_FRAME_ID,
            dlc: STATUS_FRAME_LEN as u8,
            data: [
                STATUS_MARKER,
                self.temperature_c as u8,
                self.humidity_pct,
                self.fault_flags,
                self.sensors_enabled as u8,
                self.forced_fault as u8,
                0,
                0,
            ],
        }
    }

    /// Decode a status frame (receiver side)
    ///
    /// Validates identifier, length, and the marker byte.
    pub fn from_frame(frame: &CanFrame) -> Result<Self, FrameError> {
        if frame.id() != STATUS_FRAME_ID {
            return Err(FrameError::InvalidId);
        }

        let data = frame.data();
        if data.len() != STATUS_FRAME_LEN {
            return Err(FrameError::WrongLength);
        }
        if data[0] != STATUS_MARKER {
            return Err(FrameError::BadMarker);
        }

        Ok(Self {
            temperature_c: data[1] as i8,
            humidity_pct: data[2],
            fault_flags: data[3],
            sensors_enabled: data[4] != 0,
            forced_fault: data[5] != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_status_layout() {
        let report = StatusReport {
            temperature_c: -5,
            humidity_pct: 62,
            fault_flags: 0b1000_0100,
            sensors_enabled: true,
            forced_fault: true,
        };

        let frame = report.to_frame();
        assert_eq!(frame.id(), STATUS_FRAME_ID);
        assert_eq!(frame.dlc() as usize, STATUS_FRAME_LEN);
        assert_eq!(
            frame.data(),
            &[STATUS_MARKER, (-5i8) as u8, 62, 0b1000_0100, 1, 1, 0, 0]
        );
    }

    #[test]
    fn test_status_roundtrip() {
        let report = StatusReport {
            temperature_c: 23,
            humidity_pct: 45,
            fault_flags: 0x09,
            sensors_enabled: true,
            forced_fault: false,
        };

        let decoded = StatusReport::from_frame(&report.to_frame()).unwrap();
        assert_eq!(decoded, report);
    }

    #[test]
    fn test_bad_marker_rejected() {
        let mut frame = StatusReport {
            temperature_c: 0,
            humidity_pct: 0,
            fault_flags: 0,
            sensors_enabled: false,
            forced_fault: false,
        }
        .to_frame();
        frame.data[0] = 0;

        assert_eq!(
            StatusReport::from_frame(&frame),
            Err(FrameError::BadMarker)
        );
    }

    #[test]
    fn test_short_frame_rejected() {
        let frame = CanFrame::new(STATUS_FRAME_ID, &[STATUS_MARKER, 0, 0]).unwrap();
        assert_eq!(
            StatusReport::from_frame(&frame),
            Err(FrameError::WrongLength)
        );
    }

    proptest! {
        /// Byte 0 is the marker and bytes 6..7 are zero for every state
        #[test]
        fn prop_marker_and_reserved_bytes(
            temperature_c in i8::MIN..=i8::MAX,
            humidity_pct in u8::MIN..=u8::MAX,
            fault_flags in u8::MIN..=u8::MAX,
            sensors_enabled: bool,
            forced_fault: bool,
        ) {
            let frame = StatusReport {
                temperature_c,
                humidity_pct,
                fault_flags,
                sensors_enabled,
                forced_fault,
            }
            .to_frame();

            prop_assert_eq!(frame.data()[0], STATUS_MARKER);
            prop_assert_eq!(frame.data()[6], 0);
            prop_assert_eq!(frame.data()[7], 0);
            prop_assert_eq!(
                StatusReport::from_frame(&frame).unwrap(),
                StatusReport { temperature_c, humidity_pct, fault_flags, sensors_enabled, forced_fault }
            );
        }
    }
}
