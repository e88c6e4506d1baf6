use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::application::ports::{
    InferenceError, ModelProvider, QuestionAnswerer, Summarizer, TextClassifier, Translator,
};
use crate::domain::TargetLanguage;

/// Model identifiers for the single-model tasks. Translation models come
/// from the fixed [`TargetLanguage`] mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    pub summarization: String,
    pub question_answering: String,
    pub classification: String,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            summarization: "facebook/bart-large-cnn".to_string(),
            question_answering: "deepset/roberta-base-squad2".to_string(),
            classification: "distilbert/distilbert-base-uncased-finetuned-sst-2-english"
                .to_string(),
        }
    }
}

/// Loads each pipeline handle once, on first use, and keeps it for the
/// lifetime of the registry. Constructed at startup and passed to tasks.
pub struct ModelRegistry {
    provider: Arc<dyn ModelProvider>,
    catalog: ModelCatalog,
    summarizer: OnceCell<Arc<dyn Summarizer>>,
    question_answerer: OnceCell<Arc<dyn QuestionAnswerer>>,
    classifier: OnceCell<Arc<dyn TextClassifier>>,
    translators: HashMap<TargetLanguage, OnceCell<Arc<dyn Translator>>>,
}

impl ModelRegistry {
    pub fn new(provider: Arc<dyn ModelProvider>, catalog: ModelCatalog) -> Self {
        Self {
            provider,
            catalog,
            summarizer: OnceCell::new(),
            question_answerer: OnceCell::new(),
            classifier: OnceCell::new(),
            translators: TargetLanguage::ALL
                .into_iter()
                .map(|language| (language, OnceCell::new()))
                .collect(),
        }
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub async fn summarizer(&self) -> Result<Arc<dyn Summarizer>, InferenceError> {
        let model = &self.catalog.summarization;
        self.summarizer
            .get_or_try_init(|| async {
                tracing::info!(model = %model, "Loading summarization model");
                self.provider.load_summarizer(model).await
            })
            .await
            .map(Arc::clone)
    }

    pub async fn question_answerer(&self) -> Result<Arc<dyn QuestionAnswerer>, InferenceError> {
        let model = &self.catalog.question_answering;
        self.question_answerer
            .get_or_try_init(|| async {
                tracing::info!(model = %model, "Loading question answering model");
                self.provider.load_question_answerer(model).await
            })
            .await
            .map(Arc::clone)
    }

    pub async fn classifier(&self) -> Result<Arc<dyn TextClassifier>, InferenceError> {
        let model = &self.catalog.classification;
        self.classifier
            .get_or_try_init(|| async {
                tracing::info!(model = %model, "Loading classification model");
                self.provider.load_classifier(model).await
            })
            .await
            .map(Arc::clone)
    }

    pub async fn translator(
        &self,
        language: TargetLanguage,
    ) -> Result<Arc<dyn Translator>, InferenceError> {
        let cell = self.translators.get(&language).ok_or_else(|| {
            InferenceError::ModelLoadFailed(format!("no translation model for {language}"))
        })?;
        let model = language.model_id();
        cell.get_or_try_init(|| async {
            tracing::info!(model, language = %language, "Loading translation model");
            self.provider.load_translator(model).await
        })
        .await
        .map(Arc::clone)
    }

    /// Loads the single-model pipelines up front. Translation models stay lazy
    /// since only the selected target language is ever needed.
    pub async fn warm_up(&self) -> Result<(), InferenceError> {
        self.summarizer().await?;
        self.question_answerer().await?;
        self.classifier().await?;
        tracing::info!("Model registry warmed up");
        Ok(())
    }
}
