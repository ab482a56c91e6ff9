//! Simulated deploy.
//!
//! Nothing is deployed. A click shows a loading label, and after a delay a
//! single random draw decides which toast to show before the label is put
//! back. The draw comes from the injected `rand` source so tests can seed it.

#[cfg(test)]
#[path = "deploy_test.rs"]
mod deploy_test;

use std::collections::HashMap;

use rand::Rng;
use rand::distr::Bernoulli;

use crate::toast::ToastKind;

/// Label shown while a deploy is in flight (after the spinner).
pub const BUSY_LABEL: &str = "Deploying...";

/// Class on a deploy control while its deploy is in flight.
pub const BUSY_CLASS: &str = "deploying";

pub const SUCCESS_MESSAGE: &str = "Deployment successful! Your app is now live.";
pub const FAILURE_MESSAGE: &str = "Deployment failed. Please check your configuration.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeployOutcome {
    Succeeded,
    Failed,
}

impl DeployOutcome {
    /// Draw an outcome that succeeds with probability `success_rate`.
    ///
    /// Rates outside `[0, 1]` are clamped; a NaN rate always fails.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, success_rate: f64) -> Self {
        let succeeded = Bernoulli::new(success_rate.clamp(0.0, 1.0)).map_or(false, |dist| rng.sample(dist));
        if succeeded { Self::Succeeded } else { Self::Failed }
    }

    #[must_use]
    pub fn toast_kind(self) -> ToastKind {
        match self {
            Self::Succeeded => ToastKind::Success,
            Self::Failed => ToastKind::Error,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Succeeded => SUCCESS_MESSAGE,
            Self::Failed => FAILURE_MESSAGE,
        }
    }
}

/// Original labels of deploy controls with a deploy in flight, by control index.
#[derive(Debug, Default)]
pub struct DeployTracker {
    in_flight: HashMap<usize, String>,
}

impl DeployTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deploy start. Returns `false` if one is already in flight.
    pub fn begin(&mut self, button: usize, label: &str) -> bool {
        if self.in_flight.contains_key(&button) {
            return false;
        }
        self.in_flight.insert(button, label.to_owned());
        true
    }

    /// Finish a deploy and hand back the label to restore.
    pub fn finish(&mut self, button: usize) -> Option<String> {
        self.in_flight.remove(&button)
    }

    #[must_use]
    pub fn is_deploying(&self, button: usize) -> bool {
        self.in_flight.contains_key(&button)
    }
}
