//! Peripheral drivers and task plumbing.

pub mod delay;
pub mod edge;
pub mod gpio;
pub mod task_pin;
