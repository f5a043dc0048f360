use std::sync::Arc;

use crate::config::Config;
use crate::service::pdf::{PdfTextExtractor, TextExtractor};

/// Shared state injected into the service's route handlers via Axum extractors.
#[derive(Clone)]
pub struct ServiceState {
    pub config: Config,
    /// Pluggable text extraction. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl ServiceState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            extractor: Arc::new(PdfTextExtractor),
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }
}
