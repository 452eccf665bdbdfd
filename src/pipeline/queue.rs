//! Single-slot blocking signal queue.
//!
//! Wraps an `embassy-sync` bounded channel of depth 1.  A value sits in the
//! slot until its consumer takes it; a second `send` suspends the producer
//! instead of overwriting the pending value.  Waiting is waker-driven, never
//! a spin.
//!
//! ```text
//!   producer ──send──▶ [ slot ] ──receive──▶ consumer
//!              ▲ waits while full      ▲ waits while empty
//! ```

use core::fmt;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::signal::Signal;
use crate::error::QueueError;

/// Depth of every pipeline queue.
pub const SIGNAL_QUEUE_DEPTH: usize = 1;

/// Capacity-1 queue carrying an integer-coded [`Signal`].
pub struct SignalQueue {
    name: &'static str,
    channel: Channel<CriticalSectionRawMutex, u8, SIGNAL_QUEUE_DEPTH>,
}

impl SignalQueue {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            channel: Channel::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Store `signal`, waiting for as long as the slot is occupied.
    pub async fn send(&self, signal: Signal) {
        self.channel.send(signal.to_raw()).await;
    }

    /// Take the pending signal, waiting for as long as the slot is empty.
    pub async fn receive(&self) -> Signal {
        Signal::from_raw(self.channel.receive().await)
    }

    /// Store `signal` only if the slot is free.
    pub fn try_send(&self, signal: Signal) -> Result<(), QueueError> {
        self.channel
            .try_send(signal.to_raw())
            .map_err(|_| QueueError::Full)
    }

    /// Take the pending signal only if there is one.
    pub fn try_receive(&self) -> Result<Signal, QueueError> {
        self.channel
            .try_receive()
            .map(Signal::from_raw)
            .map_err(|_| QueueError::Empty)
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }
}

impl fmt::Debug for SignalQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalQueue")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}
