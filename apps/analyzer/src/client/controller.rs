//! SubmissionController — drives one submission through
//! `Validating → InFlight → Succeeded | Failed`.
//!
//! The submission slot is the guard: a submit while another one holds it is
//! dropped, not queued. Exactly one transport call per accepted submission.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::client::response::Decoded;
use crate::client::transport::{AnalysisPayload, HttpTransport, Transport, TransportError};
use crate::client::validator::validate;
use crate::client::view_state::{SubmissionState, ViewState};
use crate::config::Config;
use crate::errors::SubmissionError;
use crate::models::{AnalysisResult, ResumeFile};

/// What a call to `submit` amounted to.
#[derive(Debug)]
pub enum SubmitOutcome {
    Succeeded(AnalysisResult),
    Failed(SubmissionError),
    /// Another submission held the slot; nothing happened.
    Dropped,
}

pub struct SubmissionController {
    transport: Arc<dyn Transport>,
    view: ViewState,
    timeout: Option<Duration>,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn Transport>, view: ViewState) -> Self {
        Self {
            transport,
            view,
            timeout: None,
        }
    }

    /// Builds a controller that posts to the configured endpoint over HTTP.
    pub fn from_config(config: &Config, view: ViewState) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.analysis_endpoint.clone())?;
        Ok(Self::new(Arc::new(transport), view).with_timeout(config.request_timeout))
    }

    /// Bounds the transport call. `None` (the default) waits as long as the transport does.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Submits whatever file and job text the view currently holds.
    pub async fn submit_current(&self) -> SubmitOutcome {
        let snapshot = self.view.snapshot();
        self.submit(snapshot.resume, &snapshot.job_description)
            .await
    }

    pub async fn submit(&self, file: Option<ResumeFile>, job_text: &str) -> SubmitOutcome {
        if !self.view.try_claim() {
            debug!("Submission dropped: another submission is in flight");
            return SubmitOutcome::Dropped;
        }

        let mut claim = Claim::new(&self.view);
        let result = self.run(file, job_text).await;
        claim.release();

        match result {
            Ok(analysis) => {
                self.view
                    .transition(SubmissionState::Succeeded(analysis.clone()));
                SubmitOutcome::Succeeded(analysis)
            }
            Err(e) => {
                self.view.transition(SubmissionState::Failed(e.to_string()));
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn run(
        &self,
        file: Option<ResumeFile>,
        job_text: &str,
    ) -> Result<AnalysisResult, SubmissionError> {
        validate(file.as_ref(), job_text)?;
        let Some(resume) = file else {
            return Err(SubmissionError::MissingFile);
        };

        let id = Uuid::new_v4();
        self.view.transition(SubmissionState::InFlight {
            id,
            started_at: Utc::now(),
        });
        info!(
            "Submission {id} in flight: resume '{}' ({} bytes), job description {} chars",
            resume.file_name,
            resume.len(),
            job_text.len()
        );

        let payload = AnalysisPayload {
            resume,
            job_description: job_text.to_string(),
        };

        let body = self.send(payload).await.map_err(|e| {
            warn!("Submission {id} transport failure: {e}");
            SubmissionError::Transport(e)
        })?;

        match Decoded::from_body(&body).into_result() {
            Ok(analysis) => {
                info!(
                    "Submission {id} succeeded: {}% match",
                    analysis.skill_match.match_percentage
                );
                Ok(analysis)
            }
            Err(e) => {
                warn!("Submission {id} failed: {e}");
                Err(e)
            }
        }
    }

    async fn send(&self, payload: AnalysisPayload) -> Result<serde_json::Value, TransportError> {
        let call = self.transport.send(payload);
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| TransportError::Timeout(limit))?,
            None => call.await,
        }
    }
}

/// Returns the view to `Idle` if a submission future is dropped while holding the slot.
struct Claim<'a> {
    view: &'a ViewState,
    held: bool,
}

impl<'a> Claim<'a> {
    fn new(view: &'a ViewState) -> Self {
        Self { view, held: true }
    }

    fn release(&mut self) {
        self.held = false;
    }
}

impl Drop for Claim<'_> {
    fn drop(&mut self) {
        if self.held {
            debug!("Submission abandoned before completion; returning to idle");
            self.view.transition(SubmissionState::Idle);
        }
    }
}
