//! Embassy async tasks
//!
//! The gatekeeper owns the matrix bus; every other task goes through
//! the command queue.

pub mod display;
pub mod gatekeeper;

pub use display::display_task;
pub use gatekeeper::{gatekeeper_task, MatrixBus};
