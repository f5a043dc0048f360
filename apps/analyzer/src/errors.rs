use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::client::transport::TransportError;

/// Local precondition failures. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a resume")]
    MissingFile,

    #[error("Please enter a job description")]
    MissingJobText,
}

/// Rejections applied when a file is picked or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("No file was selected")]
    NoFile,

    #[error("Only one resume may be uploaded at a time ({0} selected)")]
    TooManyFiles(usize),

    #[error("Unsupported file type '{0}': only PDF resumes are accepted")]
    UnsupportedType(String),
}

/// Everything a submission can fail with. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Please upload a resume")]
    MissingFile,

    #[error("Please enter a job description")]
    MissingJobText,

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    ServerReported(String),

    #[error("Invalid response from server")]
    MalformedResponse,
}

impl From<ValidationError> for SubmissionError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingFile => SubmissionError::MissingFile,
            ValidationError::MissingJobText => SubmissionError::MissingJobText,
        }
    }
}

/// Errors raised by the reference analysis service.
///
/// Failures are reported in the body as `{"message", "error"}`. Extraction
/// failures keep a 200 status; only a request missing its form parts is
/// rejected with 422.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Missing form field '{0}'")]
    MissingField(&'static str),

    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("No text could be extracted from the PDF")]
    NoText,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::NoText => (StatusCode::OK, "Extraction failed"),
            ServiceError::Pdf(_) => {
                tracing::error!("Analysis request failed: {self}");
                (StatusCode::OK, "Error processing file")
            }
            ServiceError::MissingField(_) | ServiceError::Multipart(_) => {
                tracing::warn!("Rejected analysis request: {self}");
                (StatusCode::UNPROCESSABLE_ENTITY, "Error processing file")
            }
        };

        let body = Json(json!({
            "message": message,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_carry_into_submission_error() {
        let err: SubmissionError = ValidationError::MissingFile.into();
        assert_eq!(err.to_string(), "Please upload a resume");

        let err: SubmissionError = ValidationError::MissingJobText.into();
        assert_eq!(err.to_string(), "Please enter a job description");
    }

    #[test]
    fn test_server_reported_error_displays_verbatim() {
        let err = SubmissionError::ServerReported("PDF is encrypted".to_string());
        assert_eq!(err.to_string(), "PDF is encrypted");
    }

    #[test]
    fn test_malformed_response_message() {
        assert_eq!(
            SubmissionError::MalformedResponse.to_string(),
            "Invalid response from server"
        );
    }

    #[tokio::test]
    async fn test_service_error_body_shape() {
        let response = ServiceError::NoText.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Extraction failed");
        assert_eq!(body["error"], "No text could be extracted from the PDF");
    }

    #[tokio::test]
    async fn test_missing_field_reports_processing_error() {
        let response = ServiceError::MissingField("resume").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Error processing file");
        assert_eq!(body["error"], "Missing form field 'resume'");
    }
}
