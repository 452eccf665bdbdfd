//! GPIO pin assignments for the SignalFlow boards.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Button → LED pipeline
// ---------------------------------------------------------------------------

/// Momentary push-button, active-low with internal pull-up.
pub const BUTTON_GPIO: i32 = 5;
/// Indicator LED, HIGH = on.
pub const LED_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// Water-level relay
// ---------------------------------------------------------------------------

/// Relay module driving the water pump, HIGH = pump on.
pub const RELAY_GPIO: i32 = 16;
/// HC-SR04 trigger (output).
pub const TRIG_GPIO: i32 = 17;
/// HC-SR04 echo (input, 3.3 V divided).
pub const ECHO_GPIO: i32 = 18;
/// Manual pump override button, active-low with internal pull-up.
pub const OVERRIDE_BUTTON_GPIO: i32 = BUTTON_GPIO;
