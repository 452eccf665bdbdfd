//! Outbound pipeline events.
//!
//! The pipeline tasks emit these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them (serial log, test recorder, ...).

use super::policy::Decision;
use super::signal::Signal;

/// Structured observability events emitted by the pipeline tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    /// A task entered its loop.
    TaskStarted(&'static str),

    /// The sampling task queued a button level.
    Sampled(Signal),

    /// The decision task turned a button level into an actuator command.
    Decided(Decision),

    /// The actuation task drove the output to the commanded level.
    Actuated(Signal),
}
