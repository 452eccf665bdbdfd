//! Digital GPIO driver.
//!
//! Configures and accesses single GPIO lines with raw ESP-IDF sys calls and
//! exposes them through the `embedded-hal` digital traits, so the adapters in
//! [`crate::adapters::hardware`] stay generic over any HAL pin.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: `gpio_config` / `gpio_get_level` / `gpio_set_level`.
//! On host/test: levels live in an in-memory bitmap that tests can drive
//! with [`sim_set_level`] and observe with [`sim_level`].

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU64, Ordering};

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
use log::info;

use crate::error::Error;

/// Failure reported by a pin operation (raw `esp_err_t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioError {
    pub gpio: i32,
    pub code: i32,
}

impl core::fmt::Display for GpioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "GPIO{} failed (rc={})", self.gpio, self.code)
    }
}

impl std::error::Error for GpioError {}

impl embedded_hal::digital::Error for GpioError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio {
            gpio: e.gpio,
            code: e.code,
        }
    }
}

/// Pin direction chosen at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Input with the internal pull-up enabled (idle level HIGH).
    InputPullUp,
    /// Input without pulls.
    Input,
    /// Push-pull output, driven LOW after configuration.
    Output,
}

/// One configured GPIO line.
#[derive(Debug)]
pub struct GpioPin {
    gpio: i32,
    mode: Mode,
}

impl GpioPin {
    /// Configure `gpio` as an input with pull-up (active-low buttons).
    pub fn input_pullup(gpio: i32) -> Result<Self, GpioError> {
        configure(gpio, Mode::InputPullUp)?;
        Ok(Self {
            gpio,
            mode: Mode::InputPullUp,
        })
    }

    /// Configure `gpio` as a plain input (echo lines driven by the sensor).
    pub fn input(gpio: i32) -> Result<Self, GpioError> {
        configure(gpio, Mode::Input)?;
        Ok(Self {
            gpio,
            mode: Mode::Input,
        })
    }

    /// Configure `gpio` as a push-pull output, initially LOW.
    pub fn output(gpio: i32) -> Result<Self, GpioError> {
        configure(gpio, Mode::Output)?;
        Ok(Self {
            gpio,
            mode: Mode::Output,
        })
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl ErrorType for GpioPin {
    type Error = GpioError;
}

impl InputPin for GpioPin {
    fn is_high(&mut self) -> Result<bool, GpioError> {
        Ok(read_level(self.gpio))
    }

    fn is_low(&mut self) -> Result<bool, GpioError> {
        Ok(!read_level(self.gpio))
    }
}

impl OutputPin for GpioPin {
    fn set_low(&mut self) -> Result<(), GpioError> {
        write_level(self.gpio, false)
    }

    fn set_high(&mut self) -> Result<(), GpioError> {
        write_level(self.gpio, true)
    }
}

// ── ESP-IDF ───────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn configure(gpio: i32, mode: Mode) -> Result<(), GpioError> {
    let (io_mode, pull_up) = match mode {
        Mode::InputPullUp => (gpio_mode_t_GPIO_MODE_INPUT, gpio_pullup_t_GPIO_PULLUP_ENABLE),
        Mode::Input => (gpio_mode_t_GPIO_MODE_INPUT, gpio_pullup_t_GPIO_PULLUP_DISABLE),
        Mode::Output => (gpio_mode_t_GPIO_MODE_OUTPUT, gpio_pullup_t_GPIO_PULLUP_DISABLE),
    };
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << gpio,
        mode: io_mode,
        pull_up_en: pull_up,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: gpio_config only touches the pin selected by pin_bit_mask;
    // each pin is configured once, before its owning task exists.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(GpioError { gpio, code: ret });
    }
    if mode == Mode::Output {
        write_level(gpio, false)?;
    }
    info!("gpio: GPIO{} configured as {:?}", gpio, mode);
    Ok(())
}

#[cfg(target_os = "espidf")]
fn read_level(gpio: i32) -> bool {
    // SAFETY: read-only register access on a configured input pin.
    (unsafe { gpio_get_level(gpio) }) != 0
}

#[cfg(target_os = "espidf")]
fn write_level(gpio: i32, high: bool) -> Result<(), GpioError> {
    // SAFETY: the pin is a configured output owned by exactly one task.
    let ret = unsafe { gpio_set_level(gpio, u32::from(high)) };
    if ret != ESP_OK as i32 {
        return Err(GpioError { gpio, code: ret });
    }
    Ok(())
}

// ── Host simulation ───────────────────────────────────────────

/// Bit `n` holds the simulated level of GPIO `n`.
#[cfg(not(target_os = "espidf"))]
static SIM_LEVELS: AtomicU64 = AtomicU64::new(0);

#[cfg(not(target_os = "espidf"))]
const SIM_GPIO_COUNT: i32 = 64;

#[cfg(not(target_os = "espidf"))]
fn configure(gpio: i32, mode: Mode) -> Result<(), GpioError> {
    if !(0..SIM_GPIO_COUNT).contains(&gpio) {
        // ESP_ERR_INVALID_ARG
        return Err(GpioError { gpio, code: 0x102 });
    }
    sim_set_level(gpio, mode == Mode::InputPullUp);
    info!("gpio(sim): GPIO{} configured as {:?}", gpio, mode);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn read_level(gpio: i32) -> bool {
    sim_level(gpio)
}

#[cfg(not(target_os = "espidf"))]
fn write_level(gpio: i32, high: bool) -> Result<(), GpioError> {
    sim_set_level(gpio, high);
    Ok(())
}

/// Force the simulated level of `gpio` (button presses, echo pulses).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_level(gpio: i32, high: bool) {
    let mask = 1u64 << gpio;
    if high {
        SIM_LEVELS.fetch_or(mask, Ordering::AcqRel);
    } else {
        SIM_LEVELS.fetch_and(!mask, Ordering::AcqRel);
    }
}

/// Current simulated level of `gpio`.
#[cfg(not(target_os = "espidf"))]
pub fn sim_level(gpio: i32) -> bool {
    SIM_LEVELS.load(Ordering::Acquire) & (1u64 << gpio) != 0
}
