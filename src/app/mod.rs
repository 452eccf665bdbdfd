//! Application core: pure domain logic, zero I/O.
//!
//! The signal type, the inversion policy, the events the pipeline emits, and
//! the port traits every hardware adapter implements.  Nothing in here knows
//! about ESP-IDF, keeping this layer fully testable without real peripherals.

pub mod events;
pub mod policy;
pub mod ports;
pub mod signal;
