use async_trait::async_trait;

use super::InferenceError;
use crate::domain::LabelScore;

#[async_trait]
pub trait TextClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>, InferenceError>;
}
