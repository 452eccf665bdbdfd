//! Mock hardware and a cooperative scheduler for integration tests.
//!
//! Every mock shares one [`Recorder`], so a test can see the whole history in
//! order: which levels were sampled, how many LED writes had already
//! happened at each sample, and every event the tasks emitted.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use edge_executor::LocalExecutor;
use futures_lite::future::{block_on, yield_now};
use signalflow::app::events::PipelineEvent;
use signalflow::app::ports::{DistanceSensor, EventSink, SignalInput, SignalOutput};
use signalflow::error::{Error, Result, SensorError};
use signalflow::pipeline::PipelinePorts;
use signalflow::scheduler::{TaskScheduler, TaskSpec};

// ── Shared recording ──────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecorderState {
    /// Levels still to be returned by the input, front first.
    pub script: VecDeque<bool>,
    /// Level returned once the script runs out.
    pub idle_level: bool,
    /// `(level, writes_so_far)` for every input read.
    pub reads: Vec<(bool, usize)>,
    /// Every level written to the output.
    pub writes: Vec<bool>,
    pub events: Vec<PipelineEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<RecorderState>>);

#[allow(dead_code)]
impl Recorder {
    /// Input that returns `script`, then stays released (HIGH).
    pub fn scripted(script: &[bool]) -> Self {
        let rec = Self::default();
        {
            let mut state = rec.state();
            state.script = script.iter().copied().collect();
            state.idle_level = true;
        }
        rec
    }

    pub fn state(&self) -> MutexGuard<'_, RecorderState> {
        self.0.lock().unwrap()
    }

    pub fn read_count(&self) -> usize {
        self.state().reads.len()
    }

    pub fn writes(&self) -> Vec<bool> {
        self.state().writes.clone()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.state().events.clone()
    }

    /// Ports wired to this recorder, with a simulated sampling delay.
    pub fn ports(&self) -> PipelinePorts<ScriptedInput, RecordingOutput, SimDelay, RecordingSink> {
        PipelinePorts {
            input: ScriptedInput(self.clone()),
            output: RecordingOutput(self.clone()),
            delay: SimDelay,
            sink: RecordingSink(self.clone()),
        }
    }
}

pub struct ScriptedInput(pub Recorder);

impl SignalInput for ScriptedInput {
    fn read(&mut self) -> bool {
        let mut state = self.0.state();
        let level = state.script.pop_front().unwrap_or(state.idle_level);
        let writes = state.writes.len();
        state.reads.push((level, writes));
        level
    }
}

pub struct RecordingOutput(pub Recorder);

impl SignalOutput for RecordingOutput {
    fn write(&mut self, engaged: bool) {
        self.0.state().writes.push(engaged);
    }
}

#[derive(Clone)]
pub struct RecordingSink(pub Recorder);

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &PipelineEvent) {
        self.0.state().events.push(*event);
    }
}

// ── Simulated time ────────────────────────────────────────────

/// Each simulated millisecond is one yield back to the executor.
pub struct SimDelay;

impl embedded_hal_async::delay::DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        for _ in 0..(ns / 1_000_000).max(1) {
            yield_now().await;
        }
    }

    async fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms.max(1) {
            yield_now().await;
        }
    }
}

// ── Scheduler ─────────────────────────────────────────────────

/// Runs every task on one cooperative executor, driven by the test.
pub struct ExecutorScheduler {
    executor: LocalExecutor<'static>,
    pub spawned: Vec<TaskSpec>,
    fail_on: Option<&'static str>,
}

#[allow(dead_code)]
impl ExecutorScheduler {
    pub fn new() -> Self {
        Self {
            executor: LocalExecutor::new(),
            spawned: Vec::new(),
            fail_on: None,
        }
    }

    /// Refuse to create the task called `name`.
    pub fn failing_on(name: &'static str) -> Self {
        Self {
            fail_on: Some(name),
            ..Self::new()
        }
    }

    /// Poll runnable tasks up to `max` times; returns how many ran.
    pub fn run_ticks(&self, max: usize) -> usize {
        let mut ran = 0;
        while ran < max && self.executor.try_tick() {
            ran += 1;
        }
        ran
    }

    /// Poll until `done` holds, giving up after `max` task polls.
    pub fn run_until(&self, max: usize, mut done: impl FnMut() -> bool) -> bool {
        for _ in 0..max {
            if done() {
                return true;
            }
            if !self.executor.try_tick() {
                return done();
            }
        }
        done()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.spawned.iter().map(|s| s.name).collect()
    }
}

impl Default for ExecutorScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskScheduler for ExecutorScheduler {
    fn spawn<F, Fut>(&mut self, spec: &TaskSpec, task: F) -> Result<()>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        if self.fail_on == Some(spec.name) {
            return Err(Error::Spawn(spec.name));
        }
        self.executor.spawn(task()).detach();
        self.spawned.push(spec.clone());
        Ok(())
    }

    fn run(self) -> ! {
        match block_on(self.executor.run(std::future::pending::<Infallible>())) {}
    }
}

// ── Distance sensor ───────────────────────────────────────────

/// Returns scripted readings, then timeouts.
pub struct ScriptedSensor(pub VecDeque<core::result::Result<f32, SensorError>>);

impl DistanceSensor for ScriptedSensor {
    fn measure_cm(&mut self) -> core::result::Result<f32, SensorError> {
        self.0.pop_front().unwrap_or(Err(SensorError::EchoTimeout))
    }
}
