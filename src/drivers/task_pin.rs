//! Core-pinned task spawning for the ESP32 dual-core.
//!
//! Wraps `esp_pthread_set_cfg()` so that `std::thread::spawn` creates a
//! FreeRTOS task pinned to a specific CPU core with explicit priority
//! and stack size. On non-ESP targets, falls back to plain thread spawn.
//!
//! # ESP-IDF Threading Model
//!
//! ESP-IDF implements `std::thread` via pthreads, which are thin wrappers
//! around FreeRTOS tasks. `esp_pthread_set_cfg()` sets thread-local
//! configuration that applies to the *next* `pthread_create()` call from
//! the calling thread. This means the config→spawn pair must not be
//! interleaved with other thread creation on the same thread.
//!
//! [`ThreadScheduler`] builds on this: every pipeline task becomes one
//! FreeRTOS task driving its future with `block_on`, and FreeRTOS
//! time-slices tasks of equal priority.

use core::future::Future;
use std::thread::JoinHandle;

use futures_lite::future::block_on;
use log::info;

use crate::error::{Error, Result};
use crate::scheduler::{TaskScheduler, TaskSpec};

/// CPU core identifiers for the ESP32 Xtensa dual-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 0 (PRO_CPU) — protocol stacks.
    Pro = 0,
    /// Core 1 (APP_CPU) — application logic.
    App = 1,
}

/// Spawn a thread pinned to a specific core with explicit priority and stack.
///
/// On ESP-IDF, uses `esp_pthread_set_cfg()` to configure core affinity,
/// priority, and stack size before `std::thread::spawn`.
#[cfg(target_os = "espidf")]
pub fn spawn_on_core(
    core: Core,
    priority: u8,
    stack_kb: u32,
    name: &'static str,
    f: impl FnOnce() + Send + 'static,
) -> Result<JoinHandle<()>> {
    use esp_idf_svc::sys;

    let stack_bytes = stack_kb.checked_mul(1024).ok_or(Error::Spawn(name))?;
    let c_name = std::ffi::CString::new(name).map_err(|_| Error::Spawn(name))?;
    // SAFETY: the config is copied by esp_pthread_set_cfg; `c_name` outlives
    // the pthread_create call below, which copies the task name.
    unsafe {
        let mut cfg = sys::esp_create_default_pthread_config();
        cfg.pin_to_core = core as i32;
        cfg.prio = priority as _;
        cfg.stack_size = stack_bytes as _;
        cfg.thread_name = c_name.as_ptr();
        let ret = sys::esp_pthread_set_cfg(&cfg);
        if ret != sys::ESP_OK as i32 {
            log::error!("esp_pthread_set_cfg failed for '{}': {}", name, ret);
            return Err(Error::Spawn(name));
        }
    }

    info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        name, core, priority, stack_kb
    );

    let handle = std::thread::Builder::new()
        .name(name.into())
        .spawn(f)
        .map_err(|_| Error::Spawn(name))?;
    drop(c_name);
    Ok(handle)
}

/// Simulation fallback — ignores core affinity and priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_on_core(
    _core: Core,
    _priority: u8,
    stack_kb: u32,
    name: &'static str,
    f: impl FnOnce() + Send + 'static,
) -> Result<JoinHandle<()>> {
    let stack_bytes = (stack_kb as usize).checked_mul(1024).ok_or(Error::Spawn(name))?;
    info!(
        "Spawning '{}' (sim, no core pinning, stack={}KB)",
        name, stack_kb
    );

    std::thread::Builder::new()
        .name(name.into())
        .stack_size(stack_bytes)
        .spawn(f)
        .map_err(|_| Error::Spawn(name))
}

/// Runs every task as its own pinned FreeRTOS task.
#[derive(Debug)]
pub struct ThreadScheduler {
    core: Core,
    spawned: usize,
}

impl ThreadScheduler {
    pub fn new(core: Core) -> Self {
        Self { core, spawned: 0 }
    }

    /// Tasks created so far.
    pub fn spawned(&self) -> usize {
        self.spawned
    }
}

impl TaskScheduler for ThreadScheduler {
    fn spawn<F, Fut>(&mut self, spec: &TaskSpec, task: F) -> Result<()>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        // Detached: pipeline tasks never finish, so the handle is not kept.
        spawn_on_core(self.core, spec.priority, spec.stack_kb, spec.name, move || {
            block_on(task());
        })?;
        self.spawned += 1;
        Ok(())
    }

    fn run(self) -> ! {
        info!("Scheduler running {} task(s) on {:?}", self.spawned, self.core);
        loop {
            std::thread::park();
        }
    }
}
