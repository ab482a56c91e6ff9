//! Deterministic timer driver.
//!
//! `VirtualClock` plays the host's role for timers: it records the
//! `Schedule`/`Cancel` actions a controller emits and, when time is advanced,
//! fires due timers back into the controller in due order. Timers due at the
//! same instant fire in the order they were scheduled.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use rand::RngCore;

use crate::action::{Action, Timer};
use crate::controller::PageController;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_ms: u64,
    seq: u64,
    timer: Timer,
}

#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
    seq: u64,
    pending: Vec<Pending>,
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn is_pending(&self, timer: Timer) -> bool {
        self.pending.iter().any(|p| p.timer == timer)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Milliseconds until `timer` fires, if it is pending.
    #[must_use]
    pub fn remaining_ms(&self, timer: Timer) -> Option<u64> {
        self.pending
            .iter()
            .find(|p| p.timer == timer)
            .map(|p| p.due_ms.saturating_sub(self.now_ms))
    }

    /// Apply the timer requests in `actions`. Other actions are ignored.
    pub fn record(&mut self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::Schedule { timer, delay_ms } => {
                    self.cancel(*timer);
                    self.seq += 1;
                    self.pending.push(Pending {
                        due_ms: self.now_ms + u64::from(*delay_ms),
                        seq: self.seq,
                        timer: *timer,
                    });
                }
                Action::Cancel(timer) => self.cancel(*timer),
                _ => {}
            }
        }
    }

    fn cancel(&mut self, timer: Timer) {
        self.pending.retain(|p| p.timer != timer);
    }

    /// Advance time by `ms`, firing every timer that comes due on the way.
    ///
    /// Timers scheduled by a fired timer also fire if they come due within
    /// the window. Returns every action the fired timers produced, in order.
    pub fn run_for<S, R>(&mut self, controller: &mut PageController<S, R>, ms: u64) -> Vec<Action>
    where
        S: KeyValueStore,
        R: RngCore,
    {
        let until = self.now_ms + ms;
        let mut emitted = Vec::new();
        while let Some(next) = self.next_due(until) {
            self.pending.retain(|p| p.seq != next.seq);
            self.now_ms = next.due_ms;
            let actions = controller.on_timer(next.timer);
            self.record(&actions);
            emitted.extend(actions);
        }
        self.now_ms = until;
        emitted
    }

    fn next_due(&self, until: u64) -> Option<Pending> {
        self.pending
            .iter()
            .filter(|p| p.due_ms <= until)
            .min_by_key(|p| (p.due_ms, p.seq))
            .copied()
    }
}
