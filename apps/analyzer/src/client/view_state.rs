//! ViewState — the observable container the presentation layer renders from.
//!
//! Every mutation publishes a fresh `ViewSnapshot` on a `watch` channel.
//! Subscribers always see the latest snapshot; intermediate ones may be skipped.
//! The submission state is only transitioned by the controller (`pub(crate)`).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::validator::accept_upload;
use crate::errors::IntakeError;
use crate::models::{AnalysisResult, ResumeFile};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Slot claimed, preconditions being checked.
    Validating,
    InFlight {
        id: Uuid,
        started_at: DateTime<Utc>,
    },
    Succeeded(AnalysisResult),
    Failed(String),
}

impl SubmissionState {
    /// True while a submission holds the slot.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SubmissionState::Validating | SubmissionState::InFlight { .. }
        )
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSnapshot {
    pub resume: Option<ResumeFile>,
    pub job_description: String,
    pub submission: SubmissionState,
    /// Set when a new file is picked after a failure; the message is hidden
    /// but the submission itself stays `Failed` until the next transition.
    pub error_dismissed: bool,
}

impl ViewSnapshot {
    /// The failure message to display, unless it has been dismissed.
    pub fn error_message(&self) -> Option<&str> {
        if self.error_dismissed {
            return None;
        }
        self.submission.error_message()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.submission.result()
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_busy()
    }

    /// Whether the analyze action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.resume.is_some() && !self.job_description.is_empty()
    }
}

/// Shared handle to the view state. Clones observe and mutate the same state.
#[derive(Clone)]
pub struct ViewState {
    tx: Arc<watch::Sender<ViewSnapshot>>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ViewSnapshot::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.tx.borrow().clone()
    }

    pub fn submission(&self) -> SubmissionState {
        self.tx.borrow().submission.clone()
    }

    pub fn resume(&self) -> Option<ResumeFile> {
        self.tx.borrow().resume.clone()
    }

    pub fn job_description(&self) -> String {
        self.tx.borrow().job_description.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.tx.borrow().error_message().map(str::to_string)
    }

    pub fn result(&self) -> Option<AnalysisResult> {
        self.tx.borrow().result().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().is_loading()
    }

    pub fn can_submit(&self) -> bool {
        self.tx.borrow().can_submit()
    }

    /// Handles a file pick or drop. An accepted file replaces the held one and
    /// dismisses any displayed failure; a rejected pick leaves everything in place.
    pub fn select_files(&self, files: Vec<ResumeFile>) -> Result<(), IntakeError> {
        match accept_upload(files) {
            Ok(file) => {
                debug!("Resume selected: {} ({} bytes)", file.file_name, file.len());
                self.tx.send_modify(|s| {
                    s.resume = Some(file);
                    s.error_dismissed = s.submission.error_message().is_some();
                });
                Ok(())
            }
            Err(e) => {
                warn!("Resume rejected at intake: {e}");
                Err(e)
            }
        }
    }

    pub fn set_job_description(&self, text: impl Into<String>) {
        let text = text.into();
        self.tx.send_modify(|s| s.job_description = text);
    }

    /// Atomically moves to `Validating` unless a submission already holds the slot.
    /// Returns false (and publishes nothing) when the slot is taken.
    pub(crate) fn try_claim(&self) -> bool {
        self.tx.send_if_modified(|s| {
            if s.submission.is_busy() {
                return false;
            }
            s.submission = SubmissionState::Validating;
            s.error_dismissed = false;
            true
        })
    }

    pub(crate) fn transition(&self, next: SubmissionState) {
        self.tx.send_modify(|s| {
            s.submission = next;
            s.error_dismissed = false;
        });
    }
}
