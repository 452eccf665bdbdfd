//! Hardware adapter — bridges HAL pins to domain port traits.
//!
//! [`PinInput`] and [`PinOutput`] wrap any `embedded-hal` digital pin and
//! expose it as [`SignalInput`] / [`SignalOutput`].  Pin errors never reach
//! the pipeline: a failed read repeats the last good level, a failed write
//! is logged and dropped, and the next command retries naturally.

use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{SignalInput, SignalOutput};

/// Input line; starts out reporting HIGH (pull-up idle).
pub struct PinInput<P> {
    pin: P,
    last: bool,
}

impl<P: InputPin> PinInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, last: true }
    }
}

impl<P: InputPin> SignalInput for PinInput<P> {
    fn read(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => self.last = level,
            Err(e) => warn!("input read failed ({:?}), holding {}", e, self.last),
        }
        self.last
    }
}

/// Output line driving an LED or relay.
pub struct PinOutput<P> {
    pin: P,
}

impl<P: OutputPin> PinOutput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin> SignalOutput for PinOutput<P> {
    fn write(&mut self, engaged: bool) {
        let result = if engaged {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if let Err(e) = result {
            warn!("output write failed ({:?})", e);
        }
    }
}
