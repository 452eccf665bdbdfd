//! Delay providers.
//!
//! - [`ReactorDelay`]: async `DelayNs` backed by `async-io-mini` timers,
//!   used by the sampling task so waiting never spins.
//! - [`ThreadDelay`]: blocking `DelayNs` for the polling loop of the level
//!   relay and for the microsecond trigger pulse of the ultrasonic sensor.
//!   On ESP-IDF a sleep of at least one tick yields to FreeRTOS.

use core::time::Duration;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReactorDelay;

impl embedded_hal_async::delay::DelayNs for ReactorDelay {
    async fn delay_ns(&mut self, ns: u32) {
        async_io_mini::Timer::after(Duration::from_nanos(u64::from(ns))).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        async_io_mini::Timer::after(Duration::from_millis(u64::from(ms))).await;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadDelay;

impl embedded_hal::delay::DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
