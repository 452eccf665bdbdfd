//! Fuzz target: `SignalQueue` non-blocking operations
//!
//! Each input byte is one operation: even = `try_send(byte >> 1)`, odd =
//! `try_receive`.  Checked against a one-slot model:
//! - Never more than one pending value
//! - A send is accepted iff the slot was empty
//! - Receives return what was accepted, decoded nonzero → High
//!
//! cargo fuzz run fuzz_signal_queue

#![no_main]

use libfuzzer_sys::fuzz_target;
use signalflow::app::signal::Signal;
use signalflow::pipeline::SignalQueue;

fuzz_target!(|data: &[u8]| {
    let queue = SignalQueue::new("fuzz");
    let mut slot: Option<Signal> = None;

    for &op in data {
        if op & 1 == 0 {
            let signal = Signal::from_raw(op >> 1);
            let accepted = queue.try_send(signal).is_ok();
            assert_eq!(accepted, slot.is_none());
            if accepted {
                slot = Some(signal);
            }
        } else {
            assert_eq!(queue.try_receive().ok(), slot.take());
        }
        assert!(queue.len() <= 1);
    }
});
