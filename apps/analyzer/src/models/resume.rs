use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// An uploaded resume: opaque bytes plus the name and media type the picker declared.
///
/// Cloning is cheap; the content is reference-counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub media_type: String,
    pub content: Bytes,
}

impl ResumeFile {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            content: content.into(),
        }
    }

    /// Reads a resume from disk, inferring the media type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read resume file '{}'", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();

        Ok(Self::new(file_name, media_type_for(path), content))
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

fn media_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MEDIA_TYPE,
        _ => FALLBACK_MEDIA_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_from_path_infers_pdf_media_type() {
        let mut file = tempfile::Builder::new().suffix(".PDF").tempfile().unwrap();
        file.write_all(b"%PDF-1.4 fake").unwrap();

        let resume = ResumeFile::from_path(file.path()).await.unwrap();
        assert!(resume.is_pdf());
        assert_eq!(resume.content.as_ref(), b"%PDF-1.4 fake");
        assert!(resume.file_name.ends_with(".PDF"));
    }

    #[tokio::test]
    async fn test_from_path_other_extension_is_octet_stream() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"not a pdf").unwrap();

        let resume = ResumeFile::from_path(file.path()).await.unwrap();
        assert!(!resume.is_pdf());
        assert_eq!(resume.media_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResumeFile::from_path(dir.path().join("absent.pdf"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("absent.pdf"));
    }
}
