//! CAN bus protocol for the Opistho reverse-assist ECU
//!
//! This crate defines the two fixed-identifier frame layouts the ECU speaks
//! on the shared vehicle bus:
//!
//! # Inbound commands (id 0x200)
//!
//! ```text
//! ┌──────┬───────┬─────────┐
//! │ CMD  │ VALUE │ ignored │
//! │ 1B   │ 1B    │ 0–6B    │
//! └──────┴───────┴─────────┘
//! ```
//!
//! Byte 0 selects the field (`0x01` = sensors enabled, `0x02` = forced
//! fault), byte 1 is a boolean (zero/nonzero). Frames with any other
//! identifier, fewer than two data bytes, or an unknown command byte are
//! silently ignored.
//!
//! # Outbound status (id 0x100, dlc 8)
//!
//! ```text
//! ┌────────┬──────┬─────┬────────┬─────────┬────────┬──────────┐
//! │ MARKER │ TEMP │ HUM │ FAULTS │ ENABLED │ FORCED │ RESERVED │
//! │ 1B=50  │ 1B   │ 1B  │ 1B     │ 1B      │ 1B     │ 2B=0     │
//! └────────┴──────┴─────┴────────┴─────────┴────────┴──────────┘
//! ```
//!
//! Byte 0 is a constant marker so receivers can validate frame identity
//! beyond the CAN id. The status frame is broadcast every control tick
//! regardless of whether anything changed.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod status;

pub use command::{Command, COMMAND_FRAME_ID};
pub use frame::{CanFrame, FrameError, MAX_FRAME_DATA};
pub use status::{StatusReport, STATUS_FRAME_ID, STATUS_FRAME_LEN, STATUS_MARKER};
