//! Binary signal carried by the pipeline queues.
//!
//! Logically a `bool`; on the wire (inside a queue slot) it travels as a
//! `u8`.  Decoding follows C truthiness: any non-zero byte is high.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Signal {
    Low = 0,
    High = 1,
}

impl Signal {
    pub const fn from_level(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }

    pub const fn from_raw(raw: u8) -> Self {
        Self::from_level(raw != 0)
    }

    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<bool> for Signal {
    fn from(high: bool) -> Self {
        Self::from_level(high)
    }
}

impl From<Signal> for bool {
    fn from(signal: Signal) -> Self {
        signal.is_high()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw())
    }
}
