//! Transport — the single request/response call the submission controller depends on.
//!
//! The controller only sees the `Transport` trait. `HttpTransport` is the
//! production backend: one multipart POST, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::ResumeFile;

pub const RESUME_PART: &str = "resume";
pub const JOB_DESCRIPTION_PART: &str = "job_description";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Failed to build request: {0}")]
    Request(String),
}

/// The two named parts of an analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisPayload {
    pub resume: ResumeFile,
    pub job_description: String,
}

/// One request, one response. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the payload and returns the response body as JSON.
    /// A 2xx body that is not JSON comes back as `Value::Null`.
    async fn send(&self, payload: AnalysisPayload) -> Result<Value, TransportError>;
}

/// Multipart POST to a fixed analysis endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        Ok(Self::with_client(Client::builder().build()?, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, payload: AnalysisPayload) -> Result<Value, TransportError> {
        let AnalysisPayload {
            resume,
            job_description,
        } = payload;

        debug!(
            "POST {} (resume '{}', {} bytes)",
            self.endpoint,
            resume.file_name,
            resume.len()
        );

        let resume_part = Part::bytes(resume.content.to_vec())
            .file_name(resume.file_name)
            .mime_str(&resume.media_type)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let form = Form::new()
            .part(RESUME_PART, resume_part)
            .text(JOB_DESCRIPTION_PART, job_description);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Analysis service returned {}: {}", status, body);
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            debug!("Analysis response is not JSON ({e}); {} bytes", bytes.len());
            Value::Null
        }))
    }
}
