use async_trait::async_trait;

use crate::application::ports::{InferenceError, TextSplitterError};
use crate::domain::{DocumentId, FinalOutput, TargetLanguage, TaskKind};

/// Validated-at-the-edge input for one task run.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub document_id: DocumentId,
    pub text: String,
    pub question: Option<String>,
    pub target_language: Option<TargetLanguage>,
}

impl TaskInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            document_id: DocumentId::new(),
            text: text.into(),
            question: None,
            target_language: None,
        }
    }

    pub fn with_document_id(mut self, document_id: DocumentId) -> Self {
        self.document_id = document_id;
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_target_language(mut self, language: TargetLanguage) -> Self {
        self.target_language = Some(language);
        self
    }

    /// The text with surrounding whitespace removed, or `None` if nothing is left.
    pub fn content(&self) -> Option<&str> {
        Some(self.text.trim()).filter(|t| !t.is_empty())
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[async_trait]
pub trait Task: Send + Sync {
    fn kind(&self) -> TaskKind;

    async fn run(&self, input: &TaskInput) -> Result<FinalOutput, TaskError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("inference: {0}")]
    Inference(#[from] InferenceError),
    #[error("no handler registered for task {0}")]
    NotRegistered(TaskKind),
}
