use async_trait::async_trait;

use super::InferenceError;

/// A single-direction translation model; the target language is fixed per instance.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, InferenceError>;
}
