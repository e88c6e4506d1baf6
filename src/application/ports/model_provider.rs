use std::sync::Arc;

use async_trait::async_trait;

use super::{InferenceError, QuestionAnswerer, Summarizer, TextClassifier, Translator};

/// Builds pipeline handles addressed by model identifier.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn load_summarizer(&self, model_id: &str)
    -> Result<Arc<dyn Summarizer>, InferenceError>;

    async fn load_question_answerer(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn QuestionAnswerer>, InferenceError>;

    async fn load_classifier(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn TextClassifier>, InferenceError>;

    async fn load_translator(&self, model_id: &str)
    -> Result<Arc<dyn Translator>, InferenceError>;
}
