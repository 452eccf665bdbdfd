//! SignalFlow water-level relay.
//!
//! Polls an ultrasonic sensor once per `poll_interval_ms` and drives the
//! pump relay with hysteresis; the override button toggles the relay by
//! hand.  Single task, blocking delays.
#![deny(unused_must_use)]

use anyhow::Result;
use embedded_hal::delay::DelayNs;
use log::info;

use signalflow::adapters::hardware::{PinInput, PinOutput};
use signalflow::adapters::time::MonotonicClock;
use signalflow::app::ports::{DistanceSensor, SignalInput};
use signalflow::config::LevelConfig;
use signalflow::drivers::delay::ThreadDelay;
use signalflow::drivers::gpio::GpioPin;
use signalflow::level::LevelService;
use signalflow::pins;
use signalflow::sensors::ultrasonic::Ultrasonic;

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("SignalFlow level relay v{}", env!("CARGO_PKG_VERSION"));

    let config = LevelConfig::from_build_env();
    config.validate()?;
    info!(
        "Config: pump on below {:.1} cm, off above {:.1} cm, poll every {} ms",
        config.min_level_cm, config.max_level_cm, config.poll_interval_ms
    );

    let mut relay = PinOutput::new(GpioPin::output(pins::RELAY_GPIO)?);
    let mut button = PinInput::new(GpioPin::input_pullup(pins::OVERRIDE_BUTTON_GPIO)?);
    let mut sensor = Ultrasonic::new(
        GpioPin::output(pins::TRIG_GPIO)?,
        GpioPin::input(pins::ECHO_GPIO)?,
        MonotonicClock::new(),
        ThreadDelay,
        u64::from(config.echo_timeout_us),
        config.max_range_cm,
    );
    let mut delay = ThreadDelay;
    let mut service = LevelService::new(&config);

    loop {
        let reading = sensor.measure_cm();
        let outcome = service.tick(reading, button.read(), &mut relay);
        if outcome.toggled {
            delay.delay_ms(config.debounce_ms);
        }
        delay.delay_ms(config.poll_interval_ms);
    }
}
