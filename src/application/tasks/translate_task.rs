use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::ModelRegistry;
use crate::domain::{FinalOutput, InferenceResult, TaskKind};

use super::{Task, TaskError, TaskInput};

pub struct TranslateTask {
    registry: Arc<ModelRegistry>,
}

impl TranslateTask {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Task for TranslateTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Translate
    }

    async fn run(&self, input: &TaskInput) -> Result<FinalOutput, TaskError> {
        let language = input
            .target_language
            .ok_or_else(|| TaskError::MissingInput("a target language is required".to_string()))?;
        let text = input
            .content()
            .ok_or_else(|| TaskError::MissingInput("no text to translate".to_string()))?;

        let translator = self.registry.translator(language).await?;
        let translated = translator.translate(text).await?;

        Ok(FinalOutput::single(
            TaskKind::Translate,
            InferenceResult::Translation(translated),
        ))
    }
}
