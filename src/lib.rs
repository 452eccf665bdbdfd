//! SignalFlow firmware library.
//!
//! Two applications share these modules:
//!
//! - the button → decision → LED pipeline ([`pipeline`]), three
//!   equal-priority tasks joined by single-slot queues;
//! - the water-level relay ([`level`]), an ultrasonic sensor with
//!   hysteresis and a manual override button.
//!
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module, so the whole library builds and tests on the host.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod level;
pub mod pins;
pub mod pipeline;
pub mod scheduler;

pub mod adapters;
pub mod drivers;
pub mod sensors;

mod platform;
