use async_trait::async_trait;

use super::InferenceError;
use crate::domain::AnswerSpan;

#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn answer(&self, question: &str, context: &str) -> Result<AnswerSpan, InferenceError>;
}
