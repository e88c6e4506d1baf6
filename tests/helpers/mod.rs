#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use doctasks::application::ports::{
    FileLoader, FileLoaderError, InferenceError, ModelProvider, QuestionAnswerer, SummaryParams,
    Summarizer, TextClassifier, Translator,
};
use doctasks::domain::{AnswerSpan, Document, LabelScore};

/// Per-kind call counters shared between a provider and the handles it builds.
#[derive(Default)]
pub struct CallCounts {
    pub summarizer_loads: AtomicUsize,
    pub answerer_loads: AtomicUsize,
    pub classifier_loads: AtomicUsize,
    pub translator_loads: AtomicUsize,
    pub summarize_calls: AtomicUsize,
    pub answer_calls: AtomicUsize,
    pub classify_calls: AtomicUsize,
    pub translate_calls: AtomicUsize,
}

impl CallCounts {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

pub struct MockModel {
    model_id: String,
    counts: Arc<CallCounts>,
}

#[async_trait]
impl Summarizer for MockModel {
    async fn summarize(
        &self,
        text: &str,
        _params: SummaryParams,
    ) -> Result<String, InferenceError> {
        let call = self.counts.summarize_calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("summary{}({})", call, text.split_whitespace().count()))
    }
}

#[async_trait]
impl QuestionAnswerer for MockModel {
    async fn answer(&self, _question: &str, context: &str) -> Result<AnswerSpan, InferenceError> {
        self.counts.answer_calls.fetch_add(1, Ordering::SeqCst);
        let end = context.find(' ').unwrap_or(context.len());
        Ok(AnswerSpan {
            answer: context[..end].to_string(),
            score: 0.9,
            start: 0,
            end,
        })
    }
}

#[async_trait]
impl TextClassifier for MockModel {
    async fn classify(&self, _text: &str) -> Result<Vec<LabelScore>, InferenceError> {
        self.counts.classify_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            LabelScore {
                label: "NEGATIVE".to_string(),
                score: 0.2,
            },
            LabelScore {
                label: "POSITIVE".to_string(),
                score: 0.8,
            },
        ])
    }
}

#[async_trait]
impl Translator for MockModel {
    async fn translate(&self, text: &str) -> Result<String, InferenceError> {
        self.counts.translate_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}:{}", self.model_id, text))
    }
}

pub struct MockProvider {
    pub counts: Arc<CallCounts>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            counts: Arc::new(CallCounts::default()),
        }
    }

    fn model(&self, model_id: &str) -> Arc<MockModel> {
        Arc::new(MockModel {
            model_id: model_id.to_string(),
            counts: Arc::clone(&self.counts),
        })
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    async fn load_summarizer(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn Summarizer>, InferenceError> {
        self.counts.summarizer_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.model(model_id))
    }

    async fn load_question_answerer(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn QuestionAnswerer>, InferenceError> {
        self.counts.answerer_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.model(model_id))
    }

    async fn load_classifier(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn TextClassifier>, InferenceError> {
        self.counts.classifier_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.model(model_id))
    }

    async fn load_translator(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn Translator>, InferenceError> {
        self.counts.translator_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.model(model_id))
    }
}

/// A provider whose handles always fail, for error-path tests.
pub struct FailingProvider;

pub struct FailingModel;

#[async_trait]
impl Summarizer for FailingModel {
    async fn summarize(&self, _: &str, _: SummaryParams) -> Result<String, InferenceError> {
        Err(InferenceError::RateLimited)
    }
}

#[async_trait]
impl ModelProvider for FailingProvider {
    async fn load_summarizer(&self, _: &str) -> Result<Arc<dyn Summarizer>, InferenceError> {
        Ok(Arc::new(FailingModel))
    }

    async fn load_question_answerer(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn QuestionAnswerer>, InferenceError> {
        Err(InferenceError::ModelLoadFailed(model_id.to_string()))
    }

    async fn load_classifier(&self, model_id: &str) -> Result<Arc<dyn TextClassifier>, InferenceError> {
        Err(InferenceError::ModelLoadFailed(model_id.to_string()))
    }

    async fn load_translator(&self, model_id: &str) -> Result<Arc<dyn Translator>, InferenceError> {
        Err(InferenceError::ModelLoadFailed(model_id.to_string()))
    }
}

/// Decodes UTF-8 and counts how often it was asked to.
#[derive(Default)]
pub struct CountingFileLoader {
    pub calls: AtomicUsize,
}

#[async_trait]
impl FileLoader for CountingFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<String, FileLoaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        String::from_utf8(data.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}
