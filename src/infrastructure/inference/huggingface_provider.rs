use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{
    InferenceError, ModelProvider, QuestionAnswerer, Summarizer, TextClassifier, Translator,
};

use super::HuggingFaceClient;

/// Hands out hosted-inference clients that share one connection pool.
pub struct HuggingFaceProvider {
    client: Client,
    base_url: String,
    api_token: String,
}

impl HuggingFaceProvider {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::ModelLoadFailed(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_token: api_token.into(),
        })
    }

    fn client_for(&self, model_id: &str) -> Arc<HuggingFaceClient> {
        tracing::debug!(model = model_id, base_url = %self.base_url, "Binding hosted pipeline");
        Arc::new(HuggingFaceClient::new(
            self.client.clone(),
            &self.base_url,
            self.api_token.clone(),
            model_id,
        ))
    }
}

#[async_trait]
impl ModelProvider for HuggingFaceProvider {
    async fn load_summarizer(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn Summarizer>, InferenceError> {
        Ok(self.client_for(model_id))
    }

    async fn load_question_answerer(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn QuestionAnswerer>, InferenceError> {
        Ok(self.client_for(model_id))
    }

    async fn load_classifier(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn TextClassifier>, InferenceError> {
        Ok(self.client_for(model_id))
    }

    async fn load_translator(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn Translator>, InferenceError> {
        Ok(self.client_for(model_id))
    }
}
