use std::path::Path;

use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;

use crate::application::ports::{TokenCounter, TokenCounterError};

/// Counts tokens with a model's own `tokenizer.json`, special tokens excluded.
pub struct HfTokenizerCounter {
    tokenizer: Tokenizer,
}

impl HfTokenizerCounter {
    pub fn from_pretrained(model_id: &str) -> Result<Self, TokenCounterError> {
        tracing::info!(model = model_id, "Fetching tokenizer for chunk measurement");

        let api = Api::new().map_err(|e| TokenCounterError::LoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| TokenCounterError::LoadFailed(format!("tokenizer.json: {}", e)))?;

        Self::from_file(&tokenizer_path)
    }

    pub fn from_file(path: &Path) -> Result<Self, TokenCounterError> {
        let mut tokenizer = Tokenizer::from_file(path)
            .map_err(|e| TokenCounterError::LoadFailed(format!("tokenizer: {}", e)))?;

        // Chunk sizes must reflect the full text, so the model's own truncation is disabled.
        tokenizer
            .with_truncation(None)
            .map_err(|e| TokenCounterError::LoadFailed(format!("truncation config: {}", e)))?;
        tokenizer.with_padding(None);

        Ok(Self { tokenizer })
    }
}

impl TokenCounter for HfTokenizerCounter {
    fn unit(&self) -> &'static str {
        "tokens"
    }

    fn count(&self, text: &str) -> Result<usize, TokenCounterError> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| TokenCounterError::EncodingFailed(e.to_string()))?;
        Ok(encoding.get_ids().len())
    }
}
