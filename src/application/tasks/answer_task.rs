use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::ModelRegistry;
use crate::domain::{FinalOutput, InferenceResult, TaskKind};
use crate::infrastructure::observability::sanitize_prompt;

use super::{Task, TaskError, TaskInput};

pub struct AnswerTask {
    registry: Arc<ModelRegistry>,
}

impl AnswerTask {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Task for AnswerTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Answer
    }

    async fn run(&self, input: &TaskInput) -> Result<FinalOutput, TaskError> {
        let question = input
            .question()
            .ok_or_else(|| TaskError::MissingInput("a question is required".to_string()))?;
        let context = input
            .content()
            .ok_or_else(|| TaskError::MissingInput("a context text is required".to_string()))?;

        tracing::debug!(question = %sanitize_prompt(question), "Answering question");

        let answerer = self.registry.question_answerer().await?;
        let span = answerer.answer(question, context).await?;

        Ok(FinalOutput::single(
            TaskKind::Answer,
            InferenceResult::Answer(span),
        ))
    }
}
