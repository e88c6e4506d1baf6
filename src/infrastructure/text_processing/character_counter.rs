use crate::application::ports::{TokenCounter, TokenCounterError};

/// Counts Unicode scalar values, spaces included.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterCounter;

impl TokenCounter for CharacterCounter {
    fn unit(&self) -> &'static str {
        "characters"
    }

    fn count(&self, text: &str) -> Result<usize, TokenCounterError> {
        Ok(text.chars().count())
    }
}
