use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    InferenceError, ModelProvider, QuestionAnswerer, Summarizer, TextClassifier, Translator,
};

use super::ScaffoldModel;

#[derive(Debug, Default)]
pub struct ScaffoldProvider;

impl ScaffoldProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ModelProvider for ScaffoldProvider {
    async fn load_summarizer(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn Summarizer>, InferenceError> {
        Ok(Arc::new(ScaffoldModel::new(model_id)))
    }

    async fn load_question_answerer(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn QuestionAnswerer>, InferenceError> {
        Ok(Arc::new(ScaffoldModel::new(model_id)))
    }

    async fn load_classifier(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn TextClassifier>, InferenceError> {
        Ok(Arc::new(ScaffoldModel::new(model_id)))
    }

    async fn load_translator(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn Translator>, InferenceError> {
        Ok(Arc::new(ScaffoldModel::new(model_id)))
    }
}
