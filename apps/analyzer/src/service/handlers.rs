//! Axum route handlers for the reference analysis service.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::client::transport::{JOB_DESCRIPTION_PART, RESUME_PART};
use crate::errors::ServiceError;
use crate::models::AnalysisResult;
use crate::service::entities::extract_fields;
use crate::service::skills::{compare_skills, extract_skills};
use crate::service::state::ServiceState;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub message: &'static str,
    pub filename: String,
    pub data: AnalysisResult,
}

/// POST /api/extract
///
/// Multipart parts: `resume` (PDF) and `job_description` (text).
/// Extracts candidate fields from the resume and compares its skills with the JD.
pub async fn handle_extract(
    State(state): State<ServiceState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, ServiceError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_PART => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ServiceError::Multipart(e.to_string()))?;
                resume = Some((file_name, data));
            }
            JOB_DESCRIPTION_PART => {
                job_description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ServiceError::Multipart(e.to_string()))?,
                );
            }
            other => debug!("Ignoring unexpected form field '{other}'"),
        }
    }

    let (filename, content) = resume.ok_or(ServiceError::MissingField(RESUME_PART))?;
    let job_description =
        job_description.ok_or(ServiceError::MissingField(JOB_DESCRIPTION_PART))?;

    info!(
        "Analyzing '{}' ({} bytes) against a {}-char job description",
        filename,
        content.len(),
        job_description.len()
    );

    let extractor = state.extractor.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract_text(&content))
        .await
        .map_err(|e| ServiceError::Pdf(e.to_string()))??;

    if text.trim().is_empty() {
        return Err(ServiceError::NoText);
    }

    let data = analyze(&text, &job_description);
    info!(
        "Analysis of '{}' complete: {}% match",
        filename, data.skill_match.match_percentage
    );

    Ok(Json(ExtractResponse {
        message: "Analysis complete",
        filename,
        data,
    }))
}

/// Builds the full analysis for already-extracted resume text.
pub fn analyze(resume_text: &str, job_description: &str) -> AnalysisResult {
    let fields = extract_fields(resume_text);
    let skill_match = compare_skills(
        &extract_skills(resume_text),
        &extract_skills(job_description),
    );

    AnalysisResult {
        name: fields.name,
        skills: fields.skills,
        education: fields.education,
        experience: fields.experience,
        dob: fields.dob,
        skill_match,
    }
}
