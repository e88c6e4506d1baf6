/// Measures text in one fixed unit. A splitter owns exactly one counter.
pub trait TokenCounter: Send + Sync {
    fn unit(&self) -> &'static str;

    fn count(&self, text: &str) -> Result<usize, TokenCounterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenCounterError {
    #[error("tokenizer loading failed: {0}")]
    LoadFailed(String),
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}
