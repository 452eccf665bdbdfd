//! Shared pipeline context: the two queues and nothing else.
//!
//! Built once by the bootstrap and handed to every task by `&'static`
//! reference.  Each queue has exactly one producer and one consumer:
//!
//! | queue         | producer        | consumer        |
//! |---------------|-----------------|-----------------|
//! | `button`      | read-button     | process-button  |
//! | `actuator`    | process-button  | control-led     |

use static_cell::StaticCell;

use crate::error::{Error, Result};

use super::queue::SignalQueue;

#[derive(Debug)]
pub struct PipelineContext {
    button: SignalQueue,
    actuator: SignalQueue,
}

impl PipelineContext {
    pub const fn new() -> Self {
        Self {
            button: SignalQueue::new("button"),
            actuator: SignalQueue::new("actuator"),
        }
    }

    /// Place a fresh context into `storage` for the rest of the process.
    ///
    /// The storage holds exactly one context; a second claim means the
    /// queues are already owned by a running pipeline and fails.
    pub fn claim(storage: &'static StaticCell<Self>) -> Result<&'static Self> {
        storage
            .try_init(Self::new())
            .map(|ctx| &*ctx)
            .ok_or(Error::Init("signal queue storage already claimed"))
    }

    /// Raw button levels: sampling → decision.
    pub fn button_queue(&self) -> &SignalQueue {
        &self.button
    }

    /// Actuator commands: decision → actuation.
    pub fn actuator_queue(&self) -> &SignalQueue {
        &self.actuator
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new()
    }
}
