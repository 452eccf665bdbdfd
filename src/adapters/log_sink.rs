//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing pipeline events to the ESP-IDF
//! logger (UART / USB-CDC in production).  On host, records go to
//! whichever `log` backend the test installed, if any.
//!
//! Every event is logged at `info`, including the per-sample and per-write
//! lines, so the console shows each stage of a press with the default
//! ESP-IDF log level.

use log::info;

use crate::app::events::PipelineEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PipelineEvent`] to the serial console.
///
/// Stateless, so each task gets its own copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &PipelineEvent) {
        match event {
            PipelineEvent::TaskStarted(name) => {
                info!("Task '{}' running", name);
            }
            PipelineEvent::Sampled(level) => {
                info!("Button state queued: {}", level);
            }
            PipelineEvent::Decided(decision) => {
                info!(
                    "Button {}. Commanding LED to {}.",
                    decision.input_label(),
                    decision.action_label()
                );
            }
            PipelineEvent::Actuated(command) => {
                info!(
                    "LED updated: {}",
                    if command.is_high() { "on" } else { "off" }
                );
            }
        }
    }
}
