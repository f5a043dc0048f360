use serde_json::Value;
use tracing::warn;

use crate::errors::SubmissionError;
use crate::models::AnalysisResult;

/// A response body classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Success(AnalysisResult),
    ServerError(String),
    Malformed,
}

impl Decoded {
    /// Classifies a response body.
    ///
    /// A non-null `data` wins over `error`. A `data` that does not decode as an
    /// `AnalysisResult` is malformed rather than falling through to `error`.
    /// An empty `error` string counts as absent.
    pub fn from_body(body: &Value) -> Self {
        if let Some(data) = body.get("data").filter(|d| !d.is_null()) {
            return match serde_json::from_value::<AnalysisResult>(data.clone()) {
                Ok(result) => Decoded::Success(result),
                Err(e) => {
                    warn!("Response 'data' does not match the analysis result shape: {e}");
                    Decoded::Malformed
                }
            };
        }

        match body.get("error") {
            Some(Value::String(message)) if !message.is_empty() => {
                Decoded::ServerError(message.clone())
            }
            Some(Value::Null) | Some(Value::String(_)) | None => Decoded::Malformed,
            Some(other) => Decoded::ServerError(other.to_string()),
        }
    }

    pub fn into_result(self) -> Result<AnalysisResult, SubmissionError> {
        match self {
            Decoded::Success(result) => Ok(result),
            Decoded::ServerError(message) => Err(SubmissionError::ServerReported(message)),
            Decoded::Malformed => Err(SubmissionError::MalformedResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_json() -> Value {
        json!({
            "name": "Grace Hopper",
            "skills": "Cobol",
            "education": "PhD Yale",
            "experience": "US Navy",
            "dob": "1906-12-09",
            "skillMatch": {
                "matching": ["Python"],
                "missing": [],
                "additional": [],
                "matchPercentage": 100.0
            }
        })
    }

    #[test]
    fn test_data_decodes_as_success() {
        let decoded = Decoded::from_body(&json!({ "message": "Analysis complete", "data": result_json() }));
        match decoded {
            Decoded::Success(result) => assert_eq!(result.name, "Grace Hopper"),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_error_field_is_server_error() {
        let decoded = Decoded::from_body(&json!({ "message": "Extraction failed", "error": "X" }));
        assert_eq!(decoded, Decoded::ServerError("X".to_string()));
    }

    #[test]
    fn test_data_takes_precedence_over_error() {
        let decoded = Decoded::from_body(&json!({ "data": result_json(), "error": "ignored" }));
        assert!(matches!(decoded, Decoded::Success(_)));
    }

    #[test]
    fn test_empty_object_is_malformed() {
        assert_eq!(Decoded::from_body(&json!({})), Decoded::Malformed);
    }

    #[test]
    fn test_null_data_falls_through_to_error() {
        let decoded = Decoded::from_body(&json!({ "data": null, "error": "boom" }));
        assert_eq!(decoded, Decoded::ServerError("boom".to_string()));
    }

    #[test]
    fn test_undecodable_data_is_malformed() {
        let decoded = Decoded::from_body(&json!({ "data": { "name": "no skill match" } }));
        assert_eq!(decoded, Decoded::Malformed);
    }

    #[test]
    fn test_empty_error_string_is_malformed() {
        assert_eq!(Decoded::from_body(&json!({ "error": "" })), Decoded::Malformed);
    }

    #[test]
    fn test_structured_error_is_rendered_as_json_text() {
        let decoded = Decoded::from_body(&json!({ "error": { "code": 7 } }));
        assert_eq!(decoded, Decoded::ServerError("{\"code\":7}".to_string()));
    }

    #[test]
    fn test_non_object_bodies_are_malformed() {
        assert_eq!(Decoded::from_body(&Value::Null), Decoded::Malformed);
        assert_eq!(Decoded::from_body(&json!("ok")), Decoded::Malformed);
        assert_eq!(Decoded::from_body(&json!([1, 2])), Decoded::Malformed);
    }

    #[test]
    fn test_into_result_maps_taxonomy() {
        assert!(matches!(
            Decoded::Malformed.into_result(),
            Err(SubmissionError::MalformedResponse)
        ));
        assert!(matches!(
            Decoded::ServerError("X".into()).into_result(),
            Err(SubmissionError::ServerReported(m)) if m == "X"
        ));
    }
}
