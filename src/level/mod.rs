//! Water-level relay control.
//!
//! A pump relay is driven from two inputs:
//!
//! - an ultrasonic distance reading with hysteresis: below `min_level_cm`
//!   the relay switches on, above `max_level_cm` it switches off, in between
//!   it holds;
//! - a manual override button: every press (falling edge, the line idles
//!   HIGH) toggles the relay whatever the level says.
//!
//! [`LevelService::tick`] runs one polling cycle.  The binary owns timing
//! (poll interval, debounce pause) so everything here is pure and testable.

use log::{info, warn};

use crate::app::ports::SignalOutput;
use crate::config::LevelConfig;
use crate::error::SensorError;

// ── Hysteresis ────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LevelController {
    min_level_cm: f32,
    max_level_cm: f32,
    relay_on: bool,
}

impl LevelController {
    /// Relay starts off.
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            min_level_cm: config.min_level_cm,
            max_level_cm: config.max_level_cm,
            relay_on: false,
        }
    }

    /// Apply one reading.  Returns `true` if the relay state changed.
    pub fn update(&mut self, reading_cm: f32) -> bool {
        let next = if !self.relay_on && reading_cm < self.min_level_cm {
            true
        } else if self.relay_on && reading_cm > self.max_level_cm {
            false
        } else {
            self.relay_on
        };
        let changed = next != self.relay_on;
        self.relay_on = next;
        changed
    }

    pub fn toggle(&mut self) {
        self.relay_on = !self.relay_on;
    }

    pub fn relay_on(&self) -> bool {
        self.relay_on
    }
}

// ── Button edges ──────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct EdgeDetector {
    last_high: bool,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDetector {
    /// Initial state is released (HIGH).
    pub const fn new() -> Self {
        Self { last_high: true }
    }

    /// Feed the current level; `true` on a HIGH → LOW transition.
    pub fn falling(&mut self, high: bool) -> bool {
        let edge = self.last_high && !high;
        self.last_high = high;
        edge
    }
}

// ── Service ───────────────────────────────────────────────────

/// What one polling cycle did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Distance used this cycle, if the sensor produced one.
    pub reading_cm: Option<f32>,
    /// Relay state after the cycle.
    pub relay_on: bool,
    /// The manual button toggled the relay; caller should pause for debounce.
    pub toggled: bool,
}

pub struct LevelService {
    controller: LevelController,
    button: EdgeDetector,
    applied: Option<bool>,
}

impl LevelService {
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            controller: LevelController::new(config),
            button: EdgeDetector::new(),
            applied: None,
        }
    }

    /// One polling cycle: hysteresis on `reading`, then the override button.
    ///
    /// The relay is written on the first cycle and whenever its state changes.
    pub fn tick<R: SignalOutput>(
        &mut self,
        reading: Result<f32, SensorError>,
        button_high: bool,
        relay: &mut R,
    ) -> TickOutcome {
        let reading_cm = match reading {
            Ok(cm) => {
                info!("Water level reading: {:.1} cm", cm);
                if self.controller.update(cm) {
                    info!(
                        "Level {:.1} cm crossed threshold, relay {}",
                        cm,
                        on_off(self.controller.relay_on())
                    );
                }
                Some(cm)
            }
            Err(e) => {
                warn!("Level sensor read failed: {}", e);
                None
            }
        };

        let toggled = self.button.falling(button_high);
        if toggled {
            self.controller.toggle();
            info!(
                "Override button pressed, relay {}",
                on_off(self.controller.relay_on())
            );
        }

        let relay_on = self.controller.relay_on();
        if self.applied != Some(relay_on) {
            relay.write(relay_on);
            self.applied = Some(relay_on);
        }

        TickOutcome {
            reading_cm,
            relay_on,
            toggled,
        }
    }

    pub fn relay_on(&self) -> bool {
        self.controller.relay_on()
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}
