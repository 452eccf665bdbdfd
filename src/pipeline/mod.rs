//! Button → decision → LED pipeline.
//!
//! Three equal-priority tasks joined by two single-slot queues.  The
//! [`PipelineContext`](context::PipelineContext) owns the queues; the
//! [`bootstrap`] wires tasks to ports and hands them to a
//! [`TaskScheduler`](crate::scheduler::TaskScheduler).

pub mod bootstrap;
pub mod context;
pub mod queue;
pub mod tasks;

pub use bootstrap::{PipelinePorts, launch, spawn_pipeline};
pub use context::PipelineContext;
pub use queue::SignalQueue;
