//! Startup ordering and fail-fast behaviour of the pipeline bootstrap.

use signalflow::config::PipelineConfig;
use signalflow::error::Error;
use signalflow::pipeline::tasks::{CONTROL_LED_TASK, PROCESS_BUTTON_TASK, READ_BUTTON_TASK};
use signalflow::pipeline::{PipelineContext, launch, spawn_pipeline};
use static_cell::StaticCell;

use crate::mock_hw::{ExecutorScheduler, Recorder};

#[test]
fn creates_three_tasks_with_one_priority() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let config = PipelineConfig {
        task_priority: 5,
        task_stack_kb: 8,
        ..PipelineConfig::default()
    };
    let mut scheduler = ExecutorScheduler::new();

    let ctx = spawn_pipeline(&STORAGE, Recorder::scripted(&[]).ports(), &config, &mut scheduler).unwrap();

    assert_eq!(
        scheduler.names(),
        [READ_BUTTON_TASK, PROCESS_BUTTON_TASK, CONTROL_LED_TASK]
    );
    assert!(scheduler.spawned.iter().all(|s| s.priority == 5 && s.stack_kb == 8));
    assert!(ctx.button_queue().is_empty());
    assert!(ctx.actuator_queue().is_empty());
}

#[test]
fn second_startup_fails_before_spawning() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let config = PipelineConfig::default();

    let mut first = ExecutorScheduler::new();
    spawn_pipeline(&STORAGE, Recorder::scripted(&[]).ports(), &config, &mut first).unwrap();

    let mut second = ExecutorScheduler::new();
    let err = spawn_pipeline(&STORAGE, Recorder::scripted(&[]).ports(), &config, &mut second).unwrap_err();
    assert_eq!(err, Error::Init("signal queue storage already claimed"));
    assert!(second.spawned.is_empty());
}

#[test]
fn invalid_config_spawns_nothing_and_leaves_storage_free() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let bad = PipelineConfig {
        sample_period_ms: 0,
        ..PipelineConfig::default()
    };
    let mut scheduler = ExecutorScheduler::new();

    let err = spawn_pipeline(&STORAGE, Recorder::scripted(&[]).ports(), &bad, &mut scheduler).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(scheduler.spawned.is_empty());

    assert!(PipelineContext::claim(&STORAGE).is_ok());
}

#[test]
fn task_creation_failure_aborts_startup() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let mut scheduler = ExecutorScheduler::failing_on(PROCESS_BUTTON_TASK);

    let err = spawn_pipeline(
        &STORAGE,
        Recorder::scripted(&[]).ports(),
        &PipelineConfig::default(),
        &mut scheduler,
    )
    .unwrap_err();

    assert_eq!(err, Error::Spawn(PROCESS_BUTTON_TASK));
    assert_eq!(scheduler.names(), [READ_BUTTON_TASK]);
}

#[test]
fn launch_returns_the_startup_error() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    PipelineContext::claim(&STORAGE).unwrap();

    let result = launch(
        &STORAGE,
        Recorder::scripted(&[]).ports(),
        &PipelineConfig::default(),
        ExecutorScheduler::new(),
    );
    assert_eq!(result.err(), Some(Error::Init("signal queue storage already claimed")));
}
