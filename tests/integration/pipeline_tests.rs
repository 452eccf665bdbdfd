//! End-to-end pipeline behaviour on a cooperative executor.

use signalflow::app::events::PipelineEvent;
use signalflow::app::signal::Signal;
use signalflow::config::PipelineConfig;
use signalflow::pipeline::tasks::{self, CONTROL_LED_TASK, PROCESS_BUTTON_TASK, READ_BUTTON_TASK};
use signalflow::pipeline::{PipelineContext, spawn_pipeline};
use signalflow::scheduler::{TaskScheduler, TaskSpec};
use static_cell::StaticCell;

use crate::mock_hw::{ExecutorScheduler, Recorder, RecordingSink, ScriptedInput, SimDelay};

#[test]
fn pressed_released_pressed_drives_led_on_off_on() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let rec = Recorder::scripted(&[false, true, false]);
    let mut scheduler = ExecutorScheduler::new();

    spawn_pipeline(&STORAGE, rec.ports(), &PipelineConfig::default(), &mut scheduler).unwrap();
    assert!(scheduler.run_until(100_000, || rec.writes().len() >= 3));

    assert_eq!(rec.writes()[..3], [true, false, true]);
}

#[test]
fn each_output_lands_before_the_next_sample() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let rec = Recorder::scripted(&[false, true, false, false, true]);
    let mut scheduler = ExecutorScheduler::new();

    spawn_pipeline(&STORAGE, rec.ports(), &PipelineConfig::default(), &mut scheduler).unwrap();
    assert!(scheduler.run_until(100_000, || rec.read_count() >= 6));

    let state = rec.state();
    for (i, (_, writes_before)) in state.reads.iter().enumerate() {
        assert!(
            *writes_before >= i,
            "sample {i} taken with only {writes_before} output(s) applied"
        );
    }
    assert_eq!(state.writes[..5], [true, false, true, true, false]);
}

#[test]
fn events_trace_every_stage() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let rec = Recorder::scripted(&[false]);
    let mut scheduler = ExecutorScheduler::new();

    spawn_pipeline(&STORAGE, rec.ports(), &PipelineConfig::default(), &mut scheduler).unwrap();
    assert!(scheduler.run_until(100_000, || !rec.writes().is_empty()));

    let events = rec.events();
    for name in [READ_BUTTON_TASK, PROCESS_BUTTON_TASK, CONTROL_LED_TASK] {
        assert!(events.contains(&PipelineEvent::TaskStarted(name)), "{name} never started");
    }
    assert!(events.contains(&PipelineEvent::Sampled(Signal::Low)));
    assert!(events.iter().any(|e| matches!(
        e,
        PipelineEvent::Decided(d) if d.pressed() && d.command == Signal::High
    )));
    assert!(events.contains(&PipelineEvent::Actuated(Signal::High)));
}

#[test]
fn full_queue_holds_the_pending_sample() {
    let ctx: &'static PipelineContext = Box::leak(Box::new(PipelineContext::new()));
    let rec = Recorder::scripted(&[true, false]);
    let mut scheduler = ExecutorScheduler::new();
    let spec = TaskSpec::pipeline(READ_BUTTON_TASK, &PipelineConfig::default());

    // Sampler only: nothing drains the button queue.
    let (input, sink) = (ScriptedInput(rec.clone()), RecordingSink(rec.clone()));
    scheduler
        .spawn(&spec, move || tasks::read_button(ctx, input, SimDelay, 1, sink))
        .unwrap();
    scheduler.run_ticks(1_000);

    // Second sample taken, but its send is parked behind the first.
    assert_eq!(rec.read_count(), 2);
    assert!(ctx.button_queue().is_full());
    assert_eq!(ctx.button_queue().try_receive(), Ok(Signal::High));

    scheduler.run_ticks(1_000);
    assert_eq!(rec.read_count(), 3);
    assert_eq!(ctx.button_queue().try_receive(), Ok(Signal::Low));
}

#[test]
fn pipeline_keeps_running() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let rec = Recorder::scripted(&[]);
    let config = PipelineConfig {
        sample_period_ms: 5,
        ..PipelineConfig::default()
    };
    let mut scheduler = ExecutorScheduler::new();

    spawn_pipeline(&STORAGE, rec.ports(), &config, &mut scheduler).unwrap();
    assert!(scheduler.run_until(1_000_000, || rec.read_count() >= 200));

    let writes = rec.writes();
    assert!(writes.len() >= 199);
    // Idle button (released) keeps the LED off.
    assert!(writes.iter().all(|&on| !on));
}
