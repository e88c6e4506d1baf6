use async_trait::async_trait;

use super::InferenceError;

/// Output length bounds passed to a summarization model, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryParams {
    pub max_length: usize,
    pub min_length: usize,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str, params: SummaryParams)
    -> Result<String, InferenceError>;
}
