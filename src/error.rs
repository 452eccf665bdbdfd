//! Unified error types for the SignalFlow firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! startup path and the binaries' top-level handling uniform.  All variants
//! are `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A startup resource could not be obtained (queue storage, peripherals).
    Init(&'static str),
    /// Configuration failed validation or could not be parsed.
    Config(&'static str),
    /// The named task could not be created.
    Spawn(&'static str),
    /// A GPIO driver call returned a non-OK ESP-IDF status.
    Gpio { gpio: i32, code: i32 },
    /// A sensor could not be read or returned out-of-range data.
    Sensor(SensorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Spawn(task) => write!(f, "spawn: task '{task}' could not be created"),
            Self::Gpio { gpio, code } => write!(f, "gpio: GPIO{gpio} failed (rc={code})"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// No echo edge arrived within the configured timeout.
    EchoTimeout,
    /// The echo or trigger pin reported an error.
    PinFault,
    /// Reading is outside the physically plausible range.
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EchoTimeout => write!(f, "echo timeout"),
            Self::PinFault => write!(f, "pin fault"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Queue errors
// ---------------------------------------------------------------------------

/// Errors from the non-blocking queue operations.
///
/// The blocking `send`/`receive` operations wait instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The single slot already holds an unconsumed value.
    Full,
    /// No value is pending.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "queue full"),
            Self::Empty => write!(f, "queue empty"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
