//! Raw CAN data frame representation
//!
//! A minimal classic-CAN (11-bit identifier) data frame. Transport details
//! (arbitration, filters, mailboxes) belong to the bus driver; this type
//! only carries identifier and payload between the driver boundary and the
//! command/status layers.

/// Maximum data bytes in a classic CAN frame
pub const MAX_FRAME_DATA: usize = 8;

/// Highest valid 11-bit identifier
pub const MAX_STANDARD_ID: u16 = 0x7FF;

/// Errors that can occur constructing or interpreting frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Data exceeds the 8-byte CAN limit
    DataTooLarge,
    /// Identifier does not fit in 11 bits
    InvalidId,
    /// Frame length does not match the expected fixed layout
    WrongLength,
    /// Status marker byte mismatch
    BadMarker,
}

/// A classic CAN data frame (11-bit identifier, 0-8 data bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CanFrame {
    pub(crate) id: u16,
    pub(crate) dlc: u8,
    pub(crate) data: [u8; MAX_FRAME_DATA],
}

impl CanFrame {
    /// Create a new frame with the given identifier and data
    pub fn new(id: u16, data: &[u8]) -> Result<Self, FrameError> {
        if id > MAX_STANDARD_ID {
            return Err(FrameError::InvalidId);
        }
        if data.len() > MAX_FRAME_DATA {
            return Err(FrameError::DataTooLarge);
        }

        let mut buf = [0u8; MAX_FRAME_DATA];
        buf[..data.len()].copy_from_slice(data);

        Ok(Self {
            id,
            dlc: data.len() as u8,
            data: buf,
        })
    }

    /// Frame identifier
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Data length code
    pub fn dlc(&self) -> u8 {
        self.dlc
    }

    /// Data bytes (dlc-limited view)
    pub fn data(&self) -> &[u8] {
        &self.data[..self.dlc as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_new_pads_data() {
        let frame = CanFrame::new(0x123, &[1, 2, 3]).unwrap();
        assert_eq!(frame.id(), 0x123);
        assert_eq!(frame.dlc(), 3);
        assert_eq!(frame.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_frame_rejects_wide_id() {
        assert_eq!(CanFrame::new(0x800, &[]), Err(FrameError::InvalidId));
    }

    #[test]
    fn test_frame_rejects_long_data() {
        let data = [0u8; MAX_FRAME_DATA + 1];
        assert_eq!(CanFrame::new(0x100, &data), Err(FrameError::DataTooLarge));
    }

    #[test]
    fn test_empty_frame() {
        let frame = CanFrame::new(0x000, &[]).unwrap();
        assert_eq!(frame.dlc(), 0);
        assert!(frame.data().is_empty());
    }
}
