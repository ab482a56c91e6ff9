//! Demo step auto-advance.
//!
//! The demo section is a row of radio "steps". While running, the next step
//! is activated on every interval tick, wrapping at the end. A click on a
//! step label pauses the cycle; it resumes after a delay, starting from the
//! step the user picked. Only one interval is ever live: a pause withdraws
//! the interval and any earlier pending resume before scheduling a new one.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoCycle {
    step_count: usize,
    current: usize,
    running: bool,
}

impl DemoCycle {
    /// `initial` is clamped into range; a cycle with no steps never runs.
    #[must_use]
    pub fn new(step_count: usize, initial: usize) -> Self {
        let current = if step_count == 0 { 0 } else { initial % step_count };
        Self { step_count, current, running: false }
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start cycling. Returns `false` if already running or there are no steps.
    pub fn start(&mut self) -> bool {
        if self.step_count == 0 || self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Move to the next step and return it, or `None` while paused.
    pub fn advance(&mut self) -> Option<usize> {
        if !self.running || self.step_count == 0 {
            return None;
        }
        self.current = (self.current + 1) % self.step_count;
        Some(self.current)
    }

    /// Stop cycling, optionally adopting the step the user selected.
    pub fn pause_at(&mut self, selected: Option<usize>) {
        self.running = false;
        if let Some(step) = selected.filter(|step| *step < self.step_count) {
            self.current = step;
        }
    }
}
