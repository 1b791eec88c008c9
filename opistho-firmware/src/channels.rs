//! Inter-task communication
//!
//! The control task publishes one snapshot per tick; the display task
//! consumes the latest one. Intermediate snapshots are overwritten, never
//! queued.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use opistho_core::state::StateSnapshot;

/// Latest state snapshot from the control loop
pub static SNAPSHOT: Signal<CriticalSectionRawMutex, StateSnapshot> = Signal::new();
