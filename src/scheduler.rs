//! Task scheduler port.
//!
//! The pipeline bootstrap only knows how to *describe* a task (name,
//! priority, stack) and hand over a factory for its body.  Who actually runs
//! it is decided by the [`TaskScheduler`] implementation:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    pipeline::bootstrap                       │
//! │      spawn(read-button) · spawn(process-button) · ...        │
//! └───────────────────────────────┬──────────────────────────────┘
//!                                 │ TaskScheduler
//!               ┌─────────────────┴─────────────────┐
//!               ▼                                   ▼
//!   ThreadScheduler (FreeRTOS task            cooperative executor
//!   per pipeline stage, block_on body)        (host tests)
//! ```
//!
//! The factory is `Send` and runs on the task's own thread, so the task
//! future itself never has to cross threads.

use core::future::Future;

use crate::config::PipelineConfig;
use crate::error::Result;

/// How a task is to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    /// Task name, shown in logs and FreeRTOS task lists.
    pub name: &'static str,
    /// Fixed FreeRTOS priority.
    pub priority: u8,
    /// Stack budget in KiB.
    pub stack_kb: u32,
}

impl TaskSpec {
    /// Description of a pipeline stage; all stages share priority and stack budget.
    pub fn pipeline(name: &'static str, config: &PipelineConfig) -> Self {
        Self {
            name,
            priority: config.task_priority,
            stack_kb: config.task_stack_kb,
        }
    }
}

/// Runtime that owns every task for the lifetime of the process.
pub trait TaskScheduler {
    /// Create one task.  `task` is invoked exactly once, in the new task's
    /// context, to build the body it then runs to completion (forever).
    fn spawn<F, Fut>(&mut self, spec: &TaskSpec, task: F) -> Result<()>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + 'static;

    /// Hand control to the scheduler permanently.
    fn run(self) -> !;
}
