use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::ModelProvider;
use crate::presentation::config::{InferenceProvider, InferenceSettings};

use super::{HuggingFaceProvider, ScaffoldProvider};

pub struct ModelProviderFactory;

#[derive(Debug, thiserror::Error)]
pub enum ModelProviderFactoryError {
    #[error("missing API token: the huggingface provider requires APP_INFERENCE__API_TOKEN")]
    MissingApiToken,
    #[error("provider initialization failed: {0}")]
    InitializationFailed(String),
}

impl ModelProviderFactory {
    pub fn create(
        settings: &InferenceSettings,
    ) -> Result<Arc<dyn ModelProvider>, ModelProviderFactoryError> {
        match settings.provider {
            InferenceProvider::Scaffold => {
                tracing::warn!("Using scaffold inference provider; results are not model output");
                Ok(Arc::new(ScaffoldProvider::new()))
            }
            InferenceProvider::HuggingFace => {
                let token = settings
                    .api_token
                    .clone()
                    .filter(|t| !t.is_empty())
                    .ok_or(ModelProviderFactoryError::MissingApiToken)?;
                tracing::info!(base_url = %settings.base_url, "Using Hugging Face inference provider");
                let provider = HuggingFaceProvider::new(
                    settings.base_url.clone(),
                    token,
                    Duration::from_secs(settings.timeout_secs),
                )
                .map_err(|e| ModelProviderFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(provider))
            }
        }
    }
}
