use crate::errors::{IntakeError, ValidationError};
use crate::models::ResumeFile;

/// Checks that a submission has everything it needs.
///
/// The file is checked before the text. Media type is not re-checked here;
/// `accept_upload` has already filtered it at intake.
pub fn validate(file: Option<&ResumeFile>, job_text: &str) -> Result<(), ValidationError> {
    if file.is_none() {
        return Err(ValidationError::MissingFile);
    }
    if job_text.trim().is_empty() {
        return Err(ValidationError::MissingJobText);
    }
    Ok(())
}

/// Intake filter for a file pick or drop: exactly one PDF.
pub fn accept_upload(mut files: Vec<ResumeFile>) -> Result<ResumeFile, IntakeError> {
    match files.len() {
        0 => return Err(IntakeError::NoFile),
        1 => {}
        n => return Err(IntakeError::TooManyFiles(n)),
    }

    let file = files.remove(0);
    if !file.is_pdf() {
        return Err(IntakeError::UnsupportedType(file.media_type));
    }
    Ok(file)
}
