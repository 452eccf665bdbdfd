//! The three pipeline task bodies.
//!
//! Each body is an `async fn` that loops forever.  The only suspension
//! points are the queue operations and the sampling delay, so whichever
//! scheduler runs them never sees a task spin.
//!
//! ```text
//!  button ─▶ read-button ─▶ [button q] ─▶ process-button ─▶ [actuator q] ─▶ control-led ─▶ LED
//!              (100 ms)                    (invert)                          (write)
//! ```

use embedded_hal_async::delay::DelayNs;

use crate::app::events::PipelineEvent;
use crate::app::policy;
use crate::app::ports::{EventSink, SignalInput, SignalOutput};
use crate::app::signal::Signal;

use super::context::PipelineContext;

pub const READ_BUTTON_TASK: &str = "read-button";
pub const PROCESS_BUTTON_TASK: &str = "process-button";
pub const CONTROL_LED_TASK: &str = "control-led";

/// Sample the button every `period_ms` and queue its raw level.
pub async fn read_button<I, D, S>(
    ctx: &PipelineContext,
    mut input: I,
    mut delay: D,
    period_ms: u32,
    mut sink: S,
) where
    I: SignalInput,
    D: DelayNs,
    S: EventSink,
{
    sink.emit(&PipelineEvent::TaskStarted(READ_BUTTON_TASK));
    loop {
        let level = Signal::from_level(input.read());
        ctx.button_queue().send(level).await;
        sink.emit(&PipelineEvent::Sampled(level));

        delay.delay_ms(period_ms).await;
    }
}

/// Turn queued button levels into actuator commands.
pub async fn process_button<S: EventSink>(ctx: &PipelineContext, mut sink: S) {
    sink.emit(&PipelineEvent::TaskStarted(PROCESS_BUTTON_TASK));
    loop {
        let input = ctx.button_queue().receive().await;
        let decision = policy::decide(input);
        ctx.actuator_queue().send(decision.command).await;
        sink.emit(&PipelineEvent::Decided(decision));
    }
}

/// Apply queued actuator commands to the LED.
pub async fn control_led<O, S>(ctx: &PipelineContext, mut output: O, mut sink: S)
where
    O: SignalOutput,
    S: EventSink,
{
    sink.emit(&PipelineEvent::TaskStarted(CONTROL_LED_TASK));
    loop {
        let command = ctx.actuator_queue().receive().await;
        output.write(command.is_high());
        sink.emit(&PipelineEvent::Actuated(command));
    }
}
