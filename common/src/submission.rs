//! Submission lifecycle state and attempt bookkeeping

use crate::error::SubmitError;
use crate::types::Recognition;

/// Where the current submission stands.
///
/// There is never more than one submission in flight; a new submit while
/// `InFlight` is ignored. Every state is re-enterable: submit moves
/// `Succeeded`/`Failed` back through `InFlight`, and a new file selection
/// resets to `Idle` from anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(Recognition),
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }
}

/// Tag for one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt(u64);

/// Hands out monotonically increasing attempt ids and remembers which one
/// is allowed to publish its outcome.
///
/// Responses resolve in arbitrary order; an outcome may only be applied
/// while its attempt is still current. Beginning a new attempt or
/// invalidating retires whatever was in flight.
#[derive(Debug, Clone, Default)]
pub struct AttemptCounter {
    latest: u64,
}

impl AttemptCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt; any outstanding attempt becomes stale.
    pub fn begin(&mut self) -> Attempt {
        self.latest += 1;
        Attempt(self.latest)
    }

    /// True while `attempt` is the one whose outcome may be shown.
    pub fn is_current(&self, attempt: Attempt) -> bool {
        attempt.0 == self.latest
    }

    /// Retire the current attempt without starting a new one, e.g. when a
    /// new file selection resets the view while a request is in flight.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Submission side of the view: the lifecycle state, the error region
/// text, and the attempt bookkeeping, reset as one unit when a new file
/// is chosen.
///
/// The renderer reads errors through [`SubmissionView::error_message`]: a
/// validation message set by [`SubmissionView::reject_without_file`] wins,
/// otherwise the text carried by [`SubmissionState::Failed`].
#[derive(Debug, Clone, Default)]
pub struct SubmissionView {
    state: SubmissionState,
    validation: String,
    attempts: AttemptCounter,
}

impl SubmissionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Text for the error region, if any.
    pub fn error_message(&self) -> Option<&str> {
        if !self.validation.is_empty() {
            return Some(&self.validation);
        }
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// A new file was chosen: back to `Idle`, error cleared, prior outcome
    /// discarded, and any in-flight attempt retired.
    pub fn reset_for_selection(&mut self) {
        self.attempts.invalidate();
        self.validation.clear();
        self.state = SubmissionState::Idle;
    }

    /// Submit pressed with no file: show the validation message without
    /// leaving the current state.
    pub fn reject_without_file(&mut self) {
        self.validation = SubmitError::NoImage.to_string();
    }

    /// Move to `InFlight` and hand out the attempt tag, or `None` while a
    /// submission is already in flight.
    pub fn begin(&mut self) -> Option<Attempt> {
        if self.state.is_in_flight() {
            return None;
        }
        self.validation.clear();
        self.state = SubmissionState::InFlight;
        Some(self.attempts.begin())
    }

    /// Publish an outcome if `attempt` is still current; a stale outcome
    /// leaves the view untouched. Returns whether it applied.
    pub fn resolve(
        &mut self,
        attempt: Attempt,
        outcome: Result<Recognition, SubmitError>,
    ) -> bool {
        if !self.attempts.is_current(attempt) {
            return false;
        }
        self.state = match outcome {
            Ok(recognition) => SubmissionState::Succeeded(recognition),
            Err(err) => SubmissionState::Failed(err.to_string()),
        };
        true
    }
}
