use crate::application::ports::{TokenCounter, TokenCounterError};

/// Counts whitespace-separated words.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordCounter;

impl TokenCounter for WordCounter {
    fn unit(&self) -> &'static str {
        "words"
    }

    fn count(&self, text: &str) -> Result<usize, TokenCounterError> {
        Ok(text.split_whitespace().count())
    }
}
