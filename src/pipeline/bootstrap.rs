//! Pipeline bootstrap: queue claim, task creation, scheduler hand-over.
//!
//! Startup order:
//!
//! 1. validate the configuration
//! 2. claim the queue storage (fail fast: nothing is spawned on failure)
//! 3. create `read-button`, `process-button`, `control-led` with one shared
//!    priority and stack budget
//! 4. hand control to the scheduler, never to return
//!
//! Any failure in 1–3 is logged once here and returned to the entry point.

use core::convert::Infallible;

use embedded_hal_async::delay::DelayNs;
use log::{error, info};
use static_cell::StaticCell;

use crate::app::ports::{EventSink, SignalInput, SignalOutput};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::scheduler::{TaskScheduler, TaskSpec};

use super::context::PipelineContext;
use super::queue::SIGNAL_QUEUE_DEPTH;
use super::tasks::{self, CONTROL_LED_TASK, PROCESS_BUTTON_TASK, READ_BUTTON_TASK};

/// Hardware and observability collaborators moved into the tasks.
pub struct PipelinePorts<I, O, D, S> {
    /// Button line, owned by `read-button`.
    pub input: I,
    /// LED line, owned by `control-led`.
    pub output: O,
    /// Sampling delay, owned by `read-button`.
    pub delay: D,
    /// Cloned once per task.
    pub sink: S,
}

/// Claim the queues and create the three tasks.  Does not start scheduling.
pub fn spawn_pipeline<I, O, D, S, T>(
    storage: &'static StaticCell<PipelineContext>,
    ports: PipelinePorts<I, O, D, S>,
    config: &PipelineConfig,
    scheduler: &mut T,
) -> Result<&'static PipelineContext>
where
    I: SignalInput + Send + 'static,
    O: SignalOutput + Send + 'static,
    D: DelayNs + Send + 'static,
    S: EventSink + Clone + Send + 'static,
    T: TaskScheduler,
{
    config.validate()?;
    let ctx = PipelineContext::claim(storage)?;
    info!("Signal queues created (depth {})", SIGNAL_QUEUE_DEPTH);

    let PipelinePorts {
        input,
        output,
        delay,
        sink,
    } = ports;
    let period_ms = config.sample_period_ms;

    let read_sink = sink.clone();
    scheduler.spawn(&TaskSpec::pipeline(READ_BUTTON_TASK, config), move || {
        tasks::read_button(ctx, input, delay, period_ms, read_sink)
    })?;

    let process_sink = sink.clone();
    scheduler.spawn(&TaskSpec::pipeline(PROCESS_BUTTON_TASK, config), move || {
        tasks::process_button(ctx, process_sink)
    })?;

    scheduler.spawn(&TaskSpec::pipeline(CONTROL_LED_TASK, config), move || {
        tasks::control_led(ctx, output, sink)
    })?;

    info!(
        "Pipeline tasks created (priority {}, stack {} KiB each)",
        config.task_priority, config.task_stack_kb
    );
    Ok(ctx)
}

/// Build the pipeline and run the scheduler forever.
///
/// Returns only if startup failed; the error has already been logged.
pub fn launch<I, O, D, S, T>(
    storage: &'static StaticCell<PipelineContext>,
    ports: PipelinePorts<I, O, D, S>,
    config: &PipelineConfig,
    mut scheduler: T,
) -> Result<Infallible>
where
    I: SignalInput + Send + 'static,
    O: SignalOutput + Send + 'static,
    D: DelayNs + Send + 'static,
    S: EventSink + Clone + Send + 'static,
    T: TaskScheduler,
{
    if let Err(e) = spawn_pipeline(storage, ports, config, &mut scheduler) {
        error!("Pipeline startup aborted: {}", e);
        return Err(e);
    }

    info!("Starting scheduler");
    scheduler.run()
}
