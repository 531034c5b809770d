//! Owned browser timers.
//!
//! A [`TimerSlot`] holds at most one pending `setTimeout`. Scheduling
//! replaces whatever was pending, and dropping a `gloo` [`Timeout`] clears
//! it, so a timer can never outlive the slot that set it.

use gloo_timers::callback::Timeout;

#[derive(Default)]
pub struct TimerSlot {
    pending: Option<Timeout>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `callback` once after `millis`, cancelling any pending timer.
    pub fn schedule_once<F>(&mut self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(millis, callback));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
