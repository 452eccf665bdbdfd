//! System configuration parameters
//!
//! All tunable parameters for the pipeline and the water-level relay.
//! Defaults can be overridden at build time with a JSON document in the
//! `SIGNALFLOW_CONFIG` environment variable.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest FreeRTOS priority usable by application tasks
/// (`configMAX_PRIORITIES` is 25 on ESP-IDF).
pub const MAX_TASK_PRIORITY: u8 = 24;

/// Largest stack budget accepted for one pipeline task (KiB).
pub const MAX_TASK_STACK_KB: u32 = 64;

/// Button → LED pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Delay between two button samples (milliseconds)
    pub sample_period_ms: u32,
    /// FreeRTOS priority shared by all three pipeline tasks
    pub task_priority: u8,
    /// Stack budget of each pipeline task (KiB)
    pub task_stack_kb: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: 100, // 10 Hz
            task_priority: 2,
            task_stack_kb: 4,
        }
    }
}

impl PipelineConfig {
    /// Reject values that would stall or starve the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.sample_period_ms == 0 {
            return Err(Error::Config("sample_period_ms must be > 0"));
        }
        if self.task_priority == 0 || self.task_priority > MAX_TASK_PRIORITY {
            return Err(Error::Config("task_priority must be in 1..=24"));
        }
        if self.task_stack_kb == 0 || self.task_stack_kb > MAX_TASK_STACK_KB {
            return Err(Error::Config("task_stack_kb must be in 1..=64"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("pipeline JSON malformed"))?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration baked in at build time, or defaults.
    pub fn from_build_env() -> Self {
        load_or_default(option_env!("SIGNALFLOW_CONFIG"), Self::from_json)
    }
}

/// Water-level relay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Reading below which the pump relay switches on (cm)
    pub min_level_cm: f32,
    /// Reading above which the pump relay switches off (cm)
    pub max_level_cm: f32,
    /// Readings beyond this are treated as sensor faults (cm)
    pub max_range_cm: f32,
    /// Delay between two polling cycles (milliseconds)
    pub poll_interval_ms: u32,
    /// Pause after a manual toggle (milliseconds)
    pub debounce_ms: u32,
    /// Maximum wait for each echo edge (microseconds)
    pub echo_timeout_us: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            min_level_cm: 10.0,
            max_level_cm: 20.0,
            max_range_cm: 400.0,
            poll_interval_ms: 1000,
            debounce_ms: 200,
            echo_timeout_us: 10_000,
        }
    }
}

impl LevelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_level_cm <= 0.0 {
            return Err(Error::Config("min_level_cm must be > 0"));
        }
        if self.min_level_cm >= self.max_level_cm {
            return Err(Error::Config("min_level_cm must be below max_level_cm"));
        }
        if self.max_level_cm >= self.max_range_cm {
            return Err(Error::Config("max_level_cm must be below max_range_cm"));
        }
        if self.poll_interval_ms == 0 || self.echo_timeout_us == 0 {
            return Err(Error::Config("poll and echo timings must be > 0"));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("level JSON malformed"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_build_env() -> Self {
        load_or_default(option_env!("SIGNALFLOW_LEVEL_CONFIG"), Self::from_json)
    }
}

fn load_or_default<T: Default>(raw: Option<&str>, parse: impl FnOnce(&str) -> Result<T>) -> T {
    match raw.map(parse) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            warn!("Build-time config rejected ({}), using defaults", e);
            T::default()
        }
        None => T::default(),
    }
}
