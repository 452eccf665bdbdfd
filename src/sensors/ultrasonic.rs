//! HC-SR04 style ultrasonic distance sensor.
//!
//! A 10 µs HIGH pulse on the trigger line starts a measurement; the sensor
//! answers with a HIGH pulse on the echo line whose width is the round-trip
//! time of the sound burst.  Both the wait for the echo to start and the
//! pulse itself are bounded by `echo_timeout_us`.
//!
//! Distance above the water surface in centimetres:
//!
//! ```text
//! cm = (pulse_us / 2) / 29.1
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use crate::app::ports::{Clock, DistanceSensor};
use crate::drivers::edge::{EdgeWait, wait_for_level};
use crate::error::SensorError;

/// Microseconds for sound to travel one centimetre and back, halved.
const US_PER_CM: f32 = 29.1;

const TRIGGER_SETTLE_US: u32 = 2;
const TRIGGER_PULSE_US: u32 = 10;

/// Convert a round-trip echo width to a one-way distance.
pub fn pulse_to_cm(pulse_us: u64) -> f32 {
    (pulse_us as f32 / 2.0) / US_PER_CM
}

pub struct Ultrasonic<T, E, C, D> {
    trigger: T,
    echo: E,
    clock: C,
    delay: D,
    echo_timeout_us: u64,
    max_range_cm: f32,
}

impl<T, E, C, D> Ultrasonic<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: Clock,
    D: DelayNs,
{
    pub fn new(
        trigger: T,
        echo: E,
        clock: C,
        delay: D,
        echo_timeout_us: u64,
        max_range_cm: f32,
    ) -> Self {
        Self {
            trigger,
            echo,
            clock,
            delay,
            echo_timeout_us,
            max_range_cm,
        }
    }

    fn pulse_trigger(&mut self) -> Result<(), SensorError> {
        self.trigger.set_low().map_err(|_| SensorError::PinFault)?;
        self.delay.delay_us(TRIGGER_SETTLE_US);
        self.trigger.set_high().map_err(|_| SensorError::PinFault)?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low().map_err(|_| SensorError::PinFault)
    }

    fn wait_echo(&mut self, level: bool) -> Result<u64, SensorError> {
        match wait_for_level(&mut self.echo, level, self.echo_timeout_us, &self.clock) {
            Ok(EdgeWait::Detected { elapsed_us }) => Ok(elapsed_us),
            Ok(EdgeWait::TimedOut) => Err(SensorError::EchoTimeout),
            Err(_) => Err(SensorError::PinFault),
        }
    }
}

impl<T, E, C, D> DistanceSensor for Ultrasonic<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: Clock,
    D: DelayNs,
{
    fn measure_cm(&mut self) -> Result<f32, SensorError> {
        self.pulse_trigger()?;
        self.wait_echo(true)?;
        let pulse_us = self.wait_echo(false)?;

        let cm = pulse_to_cm(pulse_us);
        debug!("ultrasonic: pulse={}us distance={:.1}cm", pulse_us, cm);
        if cm > self.max_range_cm {
            return Err(SensorError::OutOfRange);
        }
        Ok(cm)
    }
}
