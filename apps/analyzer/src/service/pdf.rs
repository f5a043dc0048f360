use crate::errors::ServiceError;

/// Pulls plain text out of an uploaded document.
///
/// Carried in `ServiceState` as `Arc<dyn TextExtractor>`. Implementations are
/// synchronous; the handler runs them on a blocking thread.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, content: &[u8]) -> Result<String, ServiceError>;
}

/// Default extractor backed by `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, content: &[u8]) -> Result<String, ServiceError> {
        pdf_extract::extract_text_from_mem(content).map_err(|e| ServiceError::Pdf(e.to_string()))
    }
}
