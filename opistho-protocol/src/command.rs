//! Inbound command frames
//!
//! Commands arrive on identifier 0x200 with at least two data bytes.
//! Anything that does not parse is not an error at this layer: the ECU's
//! policy is to silently discard unrecognized traffic on the shared bus.

use crate::frame::CanFrame;

/// Identifier commands are received on
pub const COMMAND_FRAME_ID: u16 = 0x200;

/// Command byte: set the sensors-enabled (reverse mode) flag
pub const CMD_SET_SENSORS_ENABLED: u8 = 0x01;

/// Command byte: set the forced-fault override
pub const CMD_SET_FORCED_FAULT: u8 = 0x02;

/// A parsed inbound command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Enable or disable the reverse-assist sensors
    SetSensorsEnabled(bool),
    /// Assert or clear the forced-fault override
    SetForcedFault(bool),
}

impl Command {
    /// Parse a command from a received frame
    ///
    /// Returns `None` for frames that are not commands: wrong identifier,
    /// fewer than two data bytes, or an unknown command byte. Extra data
    /// bytes beyond the first two are ignored.
    pub fn from_frame(frame: &CanFrame) -> Option<Self> {
        if frame.id() != COMMAND_FRAME_ID {
            return None;
        }

        let data = frame.data();
        if data.len() < 2 {
            return None;
        }

        let value = data[1] != 0;
        match data[0] {
            CMD_SET_SENSORS_ENABLED => Some(Command::SetSensorsEnabled(value)),
            CMD_SET_FORCED_FAULT => Some(Command::SetForcedFault(value)),
            _ => None,
        }
    }

    /// Encode this command into a frame (for testing or simulation)
    pub fn to_frame(&self) -> CanFrame {
        let (code, value) = match self {
            Command::SetSensorsEnabled(v) => (CMD_SET_SENSORS_ENABLED, *v),
            Command::SetForcedFault(v) => (CMD_SET_FORCED_FAULT, *v),
        };

        CanFrame {
            id: COMMAND_FRAME_ID,
            dlc: 2,
            data: [code, value as u8, 0, 0, 0, 0, 0, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sensors_enabled() {
        let frame = CanFrame::new(COMMAND_FRAME_ID, &[0x01, 0x01]).unwrap();
        assert_eq!(
            Command::from_frame(&frame),
            Some(Command::SetSensorsEnabled(true))
        );
    }

    #[test]
    fn test_parse_forced_fault_clear() {
        let frame = CanFrame::new(COMMAND_FRAME_ID, &[0x02, 0x00]).unwrap();
        assert_eq!(
            Command::from_frame(&frame),
            Some(Command::SetForcedFault(false))
        );
    }

    #[test]
    fn test_nonzero_value_is_true() {
        let frame = CanFrame::new(COMMAND_FRAME_ID, &[0x01, 0xFF]).unwrap();
        assert_eq!(
            Command::from_frame(&frame),
            Some(Command::SetSensorsEnabled(true))
        );
    }

    #[test]
    fn test_wrong_id_ignored() {
        let frame = CanFrame::new(0x201, &[0x01, 0x01]).unwrap();
        assert_eq!(Command::from_frame(&frame), None);
    }

    #[test]
    fn test_short_frame_ignored() {
        let frame = CanFrame::new(COMMAND_FRAME_ID, &[0x01]).unwrap();
        assert_eq!(Command::from_frame(&frame), None);
    }

    #[test]
    fn test_unknown_code_ignored() {
        let frame = CanFrame::new(COMMAND_FRAME_ID, &[0x03, 0x01]).unwrap();
        assert_eq!(Command::from_frame(&frame), None);
    }

    #[test]
    fn test_extra_bytes_ignored() {
        let frame = CanFrame::new(COMMAND_FRAME_ID, &[0x02, 0x01, 0xAA, 0xBB]).unwrap();
        assert_eq!(
            Command::from_frame(&frame),
            Some(Command::SetForcedFault(true))
        );
    }

    #[test]
    fn test_command_roundtrip() {
        for cmd in [
            Command::SetSensorsEnabled(true),
            Command::SetSensorsEnabled(false),
            Command::SetForcedFault(true),
            Command::SetForcedFault(false),
        ] {
            let frame = cmd.to_frame();
            assert_eq!(Command::from_frame(&frame), Some(cmd));
        }
    }
}
