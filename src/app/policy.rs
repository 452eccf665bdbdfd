//! Inversion policy applied by the decision task.
//!
//! The button is wired active-low (pull-up, pressed = low), so a low input
//! engages the LED and a high input releases it:
//!
//! | input level | meaning  | command |
//! |-------------|----------|---------|
//! | 0 (low)     | pressed  | 1 (on)  |
//! | 1 (high)    | released | 0 (off) |

use super::signal::Signal;

/// Outcome of applying the policy to one sampled level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub input: Signal,
    pub command: Signal,
}

impl Decision {
    /// Whether the sampled level means the button is held down.
    pub fn pressed(&self) -> bool {
        self.input == Signal::Low
    }

    /// Human-readable name of the input state.
    pub fn input_label(&self) -> &'static str {
        if self.pressed() { "pressed" } else { "released" }
    }

    /// Human-readable verb for the commanded actuator change.
    pub fn action_label(&self) -> &'static str {
        if self.command.is_high() { "switch on" } else { "switch off" }
    }
}

/// Map a sampled button level to an actuator command.
pub const fn actuator_command(input: Signal) -> Signal {
    match input {
        Signal::Low => Signal::High,
        Signal::High => Signal::Low,
    }
}

pub fn decide(input: Signal) -> Decision {
    Decision {
        input,
        command: actuator_command(input),
    }
}
