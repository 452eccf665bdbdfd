//! ESP-IDF runtime providers for third-party crates.
//!
//! - **critical section**: `embassy-sync` guards the signal queues with a
//!   `critical-section` mutex, and exactly one implementation must be linked
//!   in.  On the device that is a process-wide pthread mutex, re-entrant per
//!   task through a thread-local nesting depth.
//! - **time driver**: `async-io-mini` timers (the sampling delay) sit on
//!   `embassy-time`, which links against `_embassy_time_now` and
//!   `_embassy_time_schedule_wake`.  Now is `esp_timer_get_time()` (1 MHz
//!   ticks); wake-ups are served by one `time-wake` thread.
//!
//! Host builds get both from the `std` features of the dev-dependencies.

#[cfg(target_os = "espidf")]
mod critical {
    use core::cell::{Cell, RefCell};
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static SECTION: Mutex<()> = Mutex::new(());

    std::thread_local! {
        static DEPTH: Cell<u32> = const { Cell::new(0) };
        static GUARD: RefCell<Option<MutexGuard<'static, ()>>> = const { RefCell::new(None) };
    }

    struct EspCriticalSection;
    critical_section::set_impl!(EspCriticalSection);

    // SAFETY: acquire/release are balanced by `critical-section`; the guard
    // is held by the task that entered the outermost section.
    unsafe impl critical_section::Impl for EspCriticalSection {
        unsafe fn acquire() {
            DEPTH.with(|depth| {
                if depth.get() == 0 {
                    // Poisoning is ignored: each queue slot is a single byte.
                    let guard = SECTION.lock().unwrap_or_else(PoisonError::into_inner);
                    GUARD.with(|slot| *slot.borrow_mut() = Some(guard));
                }
                depth.set(depth.get() + 1);
            });
        }

        unsafe fn release(_restore: ()) {
            DEPTH.with(|depth| {
                let d = depth.get().saturating_sub(1);
                depth.set(d);
                if d == 0 {
                    GUARD.with(|slot| slot.borrow_mut().take());
                }
            });
        }
    }
}

#[cfg(target_os = "espidf")]
mod time_driver {
    use core::task::Waker;
    use core::time::Duration;
    use std::sync::OnceLock;
    use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};

    const WAKE_THREAD_STACK: usize = 4 * 1024;

    #[unsafe(no_mangle)]
    pub fn _embassy_time_now() -> u64 {
        // SAFETY: esp_timer is started by the IDF before app_main.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    #[unsafe(no_mangle)]
    pub fn _embassy_time_schedule_wake(at: u64, waker: &Waker) {
        match wake_queue() {
            Some(tx) if tx.send((at, waker.clone())).is_ok() => {}
            // No wake thread: wake now, the timer re-registers on its next poll.
            _ => waker.wake_by_ref(),
        }
    }

    fn wake_queue() -> Option<&'static Sender<(u64, Waker)>> {
        static QUEUE: OnceLock<Option<Sender<(u64, Waker)>>> = OnceLock::new();
        QUEUE
            .get_or_init(|| {
                let (tx, rx) = mpsc::channel();
                std::thread::Builder::new()
                    .name("time-wake".into())
                    .stack_size(WAKE_THREAD_STACK)
                    .spawn(move || serve_wakes(&rx))
                    .map_err(|e| log::error!("time-wake thread not started: {}", e))
                    .ok()
                    .map(|_| tx)
            })
            .as_ref()
    }

    fn serve_wakes(rx: &Receiver<(u64, Waker)>) {
        let mut pending: Vec<(u64, Waker)> = Vec::new();
        loop {
            let now = _embassy_time_now();
            pending.retain(|(at, waker)| {
                if *at <= now {
                    waker.wake_by_ref();
                    false
                } else {
                    true
                }
            });

            let next = match pending.iter().map(|(at, _)| *at).min() {
                Some(at) => rx.recv_timeout(Duration::from_micros(at - now)),
                None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match next {
                Ok(entry) => pending.push(entry),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }
    }
}
