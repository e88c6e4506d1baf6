use std::sync::Arc;

use crate::application::ports::{TextSplitter, TextSplitterError, TokenCounter, TokenCounterError};
use crate::presentation::config::ChunkUnit;

use super::{BoundedWindowSplitter, CharacterCounter, HfTokenizerCounter, WordCounter};

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterFactoryError {
    #[error("tokenizer initialization failed: {0}")]
    Tokenizer(#[from] TokenCounterError),
    #[error("splitter configuration invalid: {0}")]
    InvalidConfiguration(#[from] TextSplitterError),
}

pub struct TextSplitterFactory;

impl TextSplitterFactory {
    pub fn create(
        unit: ChunkUnit,
        max_chunk_size: usize,
        tokenizer_model: &str,
    ) -> Result<Arc<dyn TextSplitter>, TextSplitterFactoryError> {
        let counter: Arc<dyn TokenCounter> = match unit {
            ChunkUnit::Tokens => Arc::new(HfTokenizerCounter::from_pretrained(tokenizer_model)?),
            ChunkUnit::Words => Arc::new(WordCounter),
            ChunkUnit::Characters => Arc::new(CharacterCounter),
        };

        tracing::info!(
            unit = counter.unit(),
            max_chunk_size,
            "Chunk measurement configured"
        );

        Ok(Arc::new(BoundedWindowSplitter::new(counter, max_chunk_size)?))
    }
}
