use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Document;

/// Turns the raw bytes of an uploaded document into plain text.
///
/// Implementations reject documents whose declared type they do not handle
/// with [`FileLoaderError::UnsupportedContentType`].
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("could not read document: {0}")]
    ExtractionFailed(String),
    #[error("document extraction timed out after {0:?}")]
    TimedOut(Duration),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
