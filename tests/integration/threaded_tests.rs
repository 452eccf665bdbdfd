//! The production scheduler and timer on the host: one OS thread per task,
//! sampling paced by `ReactorDelay`.

use std::time::{Duration, Instant};

use signalflow::config::PipelineConfig;
use signalflow::drivers::delay::ReactorDelay;
use signalflow::drivers::task_pin::{Core, ThreadScheduler};
use signalflow::pipeline::{PipelineContext, PipelinePorts, spawn_pipeline};
use static_cell::StaticCell;

use crate::mock_hw::{Recorder, RecordingOutput, RecordingSink, ScriptedInput};

#[test]
fn threads_with_reactor_delay_invert_each_sample() {
    static STORAGE: StaticCell<PipelineContext> = StaticCell::new();
    let rec = Recorder::scripted(&[false, true, false]);
    let ports = PipelinePorts {
        input: ScriptedInput(rec.clone()),
        output: RecordingOutput(rec.clone()),
        delay: ReactorDelay,
        sink: RecordingSink(rec.clone()),
    };
    let config = PipelineConfig {
        sample_period_ms: 10,
        task_stack_kb: 64,
        ..PipelineConfig::default()
    };
    let mut scheduler = ThreadScheduler::new(Core::App);

    spawn_pipeline(&STORAGE, ports, &config, &mut scheduler).unwrap();
    assert_eq!(scheduler.spawned(), 3);

    let deadline = Instant::now() + Duration::from_secs(5);
    while rec.writes().len() < 3 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }

    let writes = rec.writes();
    assert!(writes.len() >= 3, "only {} LED write(s) in 5 s", writes.len());
    assert_eq!(writes[..3], [true, false, true]);
}
