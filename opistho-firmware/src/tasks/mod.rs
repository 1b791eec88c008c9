//! Embassy tasks

mod control;
mod display;

pub use control::control_task;
pub use display::display_task;
