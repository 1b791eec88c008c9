//! Board-agnostic core logic for the Opistho reverse-assist ECU
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (clock, bus, sensors, indicator, display)
//! - ECU state and the per-tick snapshot handed to the display
//! - Fault mask evaluation
//! - Reverse-assist LED state machine
//! - Wraparound-safe sample timers
//! - The cooperative control loop tying everything together
//! - Display view model (screen content, not layout)

#![no_std]
#![deny(unsafe_code)]

pub mod control;
pub mod faults;
pub mod led;
pub mod sampler;
pub mod state;
pub mod traits;
pub mod view;
