//! Bounded busy-wait for a pin level.
//!
//! Used to time echo pulses: the wait is short (tens of milliseconds at
//! most) and bounded by `timeout_us`, so it never stalls a task forever.

use embedded_hal::digital::InputPin;

use crate::app::ports::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeWait {
    /// The pin reached the level after `elapsed_us`.
    Detected { elapsed_us: u64 },
    /// The timeout elapsed first.
    TimedOut,
}

/// Spin until `pin` reads `level` or `timeout_us` passes.
pub fn wait_for_level<P, C>(
    pin: &mut P,
    level: bool,
    timeout_us: u64,
    clock: &C,
) -> Result<EdgeWait, P::Error>
where
    P: InputPin,
    C: Clock,
{
    let start = clock.now_us();
    loop {
        let elapsed_us = clock.now_us().saturating_sub(start);
        if pin.is_high()? == level {
            return Ok(EdgeWait::Detected { elapsed_us });
        }
        if elapsed_us >= timeout_us {
            return Ok(EdgeWait::TimedOut);
        }
    }
}
