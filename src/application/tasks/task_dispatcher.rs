use std::collections::HashMap;
use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::TextSplitter;
use crate::application::services::{ModelRegistry, SummaryLengthPolicy};
use crate::domain::{FinalOutput, TaskKind};

use super::{AnswerTask, ClassifyTask, SummarizeTask, Task, TaskError, TaskInput, TranslateTask};

/// Routes a task selection to the matching [`Task`].
pub struct TaskDispatcher {
    tasks: HashMap<TaskKind, Arc<dyn Task>>,
}

impl TaskDispatcher {
    pub fn new(tasks: Vec<Arc<dyn Task>>) -> Self {
        Self {
            tasks: tasks.into_iter().map(|t| (t.kind(), t)).collect(),
        }
    }

    /// All four tasks backed by one registry.
    pub fn standard(
        registry: Arc<ModelRegistry>,
        splitter: Arc<dyn TextSplitter>,
        length_policy: SummaryLengthPolicy,
    ) -> Self {
        Self::new(vec![
            Arc::new(SummarizeTask::new(
                Arc::clone(&registry),
                splitter,
                length_policy,
            )) as Arc<dyn Task>,
            Arc::new(AnswerTask::new(Arc::clone(&registry))) as Arc<dyn Task>,
            Arc::new(ClassifyTask::new(Arc::clone(&registry))) as Arc<dyn Task>,
            Arc::new(TranslateTask::new(registry)) as Arc<dyn Task>,
        ])
    }

    pub fn kinds(&self) -> Vec<TaskKind> {
        let mut kinds: Vec<TaskKind> = self.tasks.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub async fn dispatch(
        &self,
        kind: TaskKind,
        input: &TaskInput,
    ) -> Result<FinalOutput, TaskError> {
        let task = self.tasks.get(&kind).ok_or(TaskError::NotRegistered(kind))?;

        tracing::debug!(task = %kind, input_len = input.text.len(), "Dispatching task");
        task.run(input)
            .instrument(tracing::info_span!("task", task = %kind))
            .await
    }
}
