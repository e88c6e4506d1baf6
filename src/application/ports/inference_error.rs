#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("model {0} is still loading")]
    ModelLoading(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
