use async_trait::async_trait;

use crate::domain::{Chunk, DocumentId};

#[async_trait]
pub trait TextSplitter: Send + Sync {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterError {
    #[error("tokenization failed: {0}")]
    TokenizationFailed(String),
    #[error("chunk limit must be greater than zero")]
    InvalidLimit,
    #[error("chunk limit of {limit} {unit} cannot hold a single character: {fragment:?}")]
    LimitTooSmall {
        limit: usize,
        unit: &'static str,
        fragment: String,
    },
}
