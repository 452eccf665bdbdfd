//! SignalFlow Firmware — Main Entry Point
//!
//! Button → decision → LED pipeline.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  PinInput (button)   PinOutput (LED)   ReactorDelay            │
//! │  LogEventSink        ThreadScheduler (FreeRTOS, APP core)      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │   read-button ─▶ [q] ─▶ process-button ─▶ [q] ─▶       │    │
//! │  │                                       control-led      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;
use static_cell::StaticCell;

use signalflow::adapters::hardware::{PinInput, PinOutput};
use signalflow::adapters::log_sink::LogEventSink;
use signalflow::config::PipelineConfig;
use signalflow::drivers::delay::ReactorDelay;
use signalflow::drivers::gpio::GpioPin;
use signalflow::drivers::task_pin::{Core, ThreadScheduler};
use signalflow::pins;
use signalflow::pipeline::{self, PipelineContext, PipelinePorts};

static PIPELINE: StaticCell<PipelineContext> = StaticCell::new();

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  SignalFlow v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = PipelineConfig::from_build_env();
    info!(
        "Config: sample every {} ms, task priority {}, stack {} KiB",
        config.sample_period_ms, config.task_priority, config.task_stack_kb
    );

    // ── 3. Hardware ───────────────────────────────────────────
    let ports = PipelinePorts {
        input: PinInput::new(GpioPin::input_pullup(pins::BUTTON_GPIO)?),
        output: PinOutput::new(GpioPin::output(pins::LED_GPIO)?),
        delay: ReactorDelay,
        sink: LogEventSink::new(),
    };

    // ── 4. Tasks + scheduler (never returns on success) ───────
    match pipeline::launch(&PIPELINE, ports, &config, ThreadScheduler::new(Core::App)) {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}
