use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::TextSplitter;
use crate::application::services::{ModelRegistry, SummaryLengthPolicy, combine_results};
use crate::domain::{FinalOutput, InferenceResult, TaskKind};

use super::{Task, TaskError, TaskInput};

/// Splits the input into model-sized chunks, summarizes each one on its own,
/// and joins the summaries in chunk order. Chunks are summarized without any
/// context from their neighbours.
pub struct SummarizeTask {
    registry: Arc<ModelRegistry>,
    splitter: Arc<dyn TextSplitter>,
    length_policy: SummaryLengthPolicy,
}

impl SummarizeTask {
    pub fn new(
        registry: Arc<ModelRegistry>,
        splitter: Arc<dyn TextSplitter>,
        length_policy: SummaryLengthPolicy,
    ) -> Self {
        Self {
            registry,
            splitter,
            length_policy,
        }
    }
}

#[async_trait]
impl Task for SummarizeTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Summarize
    }

    #[tracing::instrument(skip(self, input), fields(document_id = %input.document_id.as_uuid()))]
    async fn run(&self, input: &TaskInput) -> Result<FinalOutput, TaskError> {
        let chunks = self.splitter.split(&input.text, input.document_id).await?;
        if chunks.is_empty() {
            return Err(TaskError::MissingInput(
                "no text to summarize".to_string(),
            ));
        }

        let summarizer = self.registry.summarizer().await?;

        let mut summaries = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let params = self.length_policy.params_for(&chunk.text);
            tracing::debug!(
                ordinal = chunk.ordinal,
                max_length = params.max_length,
                min_length = params.min_length,
                "Summarizing chunk"
            );
            summaries.push(summarizer.summarize(&chunk.text, params).await?);
        }

        tracing::info!(chunk_count = chunks.len(), "Summarization complete");

        Ok(FinalOutput::new(
            TaskKind::Summarize,
            InferenceResult::Summary(combine_results(&summaries)),
            chunks.len(),
        ))
    }
}
