//! Request state token for front-ends.
//!
//! A [`RequestSlot`] allows one request in flight at a time and always leaves
//! a terminal state behind, even when the request future is dropped or panics.

use crate::classifier::{ClassifierClient, ClassifyError};
use crate::models::{ClassificationRequest, ClassificationResult, ClassifierKind};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight(ClassifierKind),
    Resolved(ClassificationResult),
    Failed(ClassifyError),
}

impl RequestState {
    /// Interaction (e.g. a submit button) is only disabled while in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, RequestState::InFlight(_))
    }

    pub fn status(&self) -> StatusLine {
        match self {
            RequestState::Idle => StatusLine::info(""),
            RequestState::InFlight(_) => StatusLine::info("Processing..."),
            RequestState::Resolved(_) => StatusLine::success(""),
            RequestState::Failed(err) => StatusLine::error(err.user_message()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusLine {
    pub fn info(message: &str) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.to_string(),
        }
    }

    pub fn success(message: &str) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RequestSlot {
    state: Mutex<RequestState>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RequestState {
        self.lock().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.lock().is_busy()
    }

    /// Status text for the current state; success names the kind that resolved.
    pub fn status(&self, kind: ClassifierKind) -> StatusLine {
        match &*self.lock() {
            RequestState::Resolved(_) => StatusLine::success(kind.success_message()),
            other => other.status(),
        }
    }

    /// Runs one classification through `client`, or fails with `Busy` if one is in flight.
    ///
    /// Validation happens before the slot is taken, so blank input never
    /// disables interaction.
    pub async fn run(
        &self,
        client: &ClassifierClient,
        request: ClassificationRequest,
    ) -> Result<ClassificationResult, ClassifyError> {
        let kind = request.kind();
        if let Err(err) = request.clone().into_payload() {
            let mut state = self.lock();
            if !state.is_busy() {
                *state = RequestState::Failed(err.clone());
            }
            return Err(err);
        }

        let guard = self.begin(kind)?;
        let outcome = client.classify(request).await;
        guard.finish(&outcome);
        outcome
    }

    fn begin(&self, kind: ClassifierKind) -> Result<InFlightGuard<'_>, ClassifyError> {
        let mut state = self.lock();
        if state.is_busy() {
            return Err(ClassifyError::Busy);
        }
        *state = RequestState::InFlight(kind);
        Ok(InFlightGuard {
            slot: self,
            finished: false,
        })
    }

    fn lock(&self) -> MutexGuard<'_, RequestState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

struct InFlightGuard<'a> {
    slot: &'a RequestSlot,
    finished: bool,
}

impl InFlightGuard<'_> {
    fn finish(mut self, outcome: &Result<ClassificationResult, ClassifyError>) {
        *self.slot.lock() = match outcome {
            Ok(result) => RequestState::Resolved(result.clone()),
            Err(err) => RequestState::Failed(err.clone()),
        };
        self.finished = true;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("classification dropped while in flight");
            *self.slot.lock() = RequestState::Failed(ClassifyError::Interrupted);
        }
    }
}
