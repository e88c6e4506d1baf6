use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::ModelRegistry;
use crate::domain::{FinalOutput, InferenceResult, TaskKind};

use super::{Task, TaskError, TaskInput};

pub struct ClassifyTask {
    registry: Arc<ModelRegistry>,
}

impl ClassifyTask {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Task for ClassifyTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Classify
    }

    async fn run(&self, input: &TaskInput) -> Result<FinalOutput, TaskError> {
        let text = input
            .content()
            .ok_or_else(|| TaskError::MissingInput("no text to classify".to_string()))?;

        let classifier = self.registry.classifier().await?;
        let mut labels = classifier.classify(text).await?;
        labels.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(FinalOutput::single(
            TaskKind::Classify,
            InferenceResult::Labels(labels),
        ))
    }
}
