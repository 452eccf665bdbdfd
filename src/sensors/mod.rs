//! Sensor drivers.

pub mod ultrasonic;
