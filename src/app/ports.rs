//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ pipeline tasks / level controller (domain)
//! ```
//!
//! Driven adapters (GPIO pins, clocks, sensors, event sinks) implement these
//! traits.  The pipeline tasks consume them via generics, so the domain core
//! never touches hardware directly and runs unchanged against mocks.

use crate::error::SensorError;

use super::events::PipelineEvent;

// ───────────────────────────────────────────────────────────────
// Digital input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One boolean hardware line configured as an input.
pub trait SignalInput {
    /// Current electrical level (`true` = high).  Never blocks.
    fn read(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Digital output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// One boolean hardware line driving an actuator.
pub trait SignalOutput {
    /// Drive the line (`true` = engaged).  Idempotent.
    fn write(&mut self, engaged: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The pipeline tasks emit structured [`PipelineEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &PipelineEvent);
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic microsecond clock used for edge timing.
pub trait Clock {
    fn now_us(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Distance sensor port (water-level relay)
// ───────────────────────────────────────────────────────────────

pub trait DistanceSensor {
    /// Take one measurement in centimetres.
    fn measure_cm(&mut self) -> Result<f32, SensorError>;
}
