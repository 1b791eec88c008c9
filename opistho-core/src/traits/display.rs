//! Status display port
//!
//! The display collaborator is external to the core: it receives one
//! read-only snapshot per tick and owns all rendering and layout.

use crate::state::StateSnapshot;

/// Consumer of per-tick state snapshots
pub trait StatusDisplay {
    /// Publish the current snapshot
    ///
    /// Called exactly once per tick, after faults and the LED state have
    /// been updated. Implementations must not block the loop; hand the
    /// snapshot off and return.
    fn show(&mut self, snapshot: &StateSnapshot);
}

impl<T: StatusDisplay + ?Sized> StatusDisplay for &mut T {
    fn show(&mut self, snapshot: &StateSnapshot) {
        T::show(self, snapshot)
    }
}
