use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    InferenceError, QuestionAnswerer, SummaryParams, Summarizer, TextClassifier, Translator,
};
use crate::domain::{AnswerSpan, LabelScore};

/// A handle on one hosted pipeline, addressed by model identifier.
pub struct HuggingFaceClient {
    client: Client,
    endpoint: String,
    api_token: String,
    model_id: String,
}

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Serialize)]
struct SummarizationParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

#[derive(Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

#[derive(Serialize)]
struct QuestionAnsweringRequest<'a> {
    inputs: QuestionAnsweringInputs<'a>,
}

#[derive(Serialize)]
struct QuestionAnsweringInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Deserialize)]
struct QuestionAnsweringOutput {
    answer: String,
    score: f32,
    start: usize,
    end: usize,
}

#[derive(Serialize)]
struct TextRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct LabelOutput {
    label: String,
    score: f32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationOutput {
    Nested(Vec<Vec<LabelOutput>>),
    Flat(Vec<LabelOutput>),
}

#[derive(Deserialize)]
struct TranslationOutput {
    translation_text: String,
}

impl HuggingFaceClient {
    pub fn new(client: Client, base_url: &str, api_token: String, model_id: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/models/{}", base_url.trim_end_matches('/'), model_id),
            api_token,
            model_id: model_id.to_string(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn post<B, R>(&self, body: &B) -> Result<R, InferenceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(InferenceError::RateLimited),
            StatusCode::SERVICE_UNAVAILABLE => {
                return Err(InferenceError::ModelLoading(self.model_id.clone()));
            }
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(InferenceError::ApiRequestFailed(format!(
                    "HTTP {}: {}",
                    status, body
                )));
            }
            _ => {}
        }

        response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))
    }
}

/// Maps a character index reported by the pipeline onto a byte offset in `text`.
fn char_to_byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

#[async_trait]
impl Summarizer for HuggingFaceClient {
    #[tracing::instrument(skip(self, text), fields(model = %self.model_id, input_len = text.len()))]
    async fn summarize(
        &self,
        text: &str,
        params: SummaryParams,
    ) -> Result<String, InferenceError> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                max_length: params.max_length,
                min_length: params.min_length,
                do_sample: false,
            },
        };

        let outputs: Vec<SummarizationOutput> = self.post(&request).await?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| InferenceError::InvalidResponse("empty summary list".to_string()))
    }
}

#[async_trait]
impl QuestionAnswerer for HuggingFaceClient {
    #[tracing::instrument(skip(self, question, context), fields(model = %self.model_id))]
    async fn answer(&self, question: &str, context: &str) -> Result<AnswerSpan, InferenceError> {
        let request = QuestionAnsweringRequest {
            inputs: QuestionAnsweringInputs { question, context },
        };

        let output: QuestionAnsweringOutput = self.post(&request).await?;
        Ok(AnswerSpan {
            answer: output.answer,
            score: output.score,
            start: char_to_byte_offset(context, output.start),
            end: char_to_byte_offset(context, output.end),
        })
    }
}

#[async_trait]
impl TextClassifier for HuggingFaceClient {
    #[tracing::instrument(skip(self, text), fields(model = %self.model_id))]
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>, InferenceError> {
        let output: ClassificationOutput = self.post(&TextRequest { inputs: text }).await?;
        let labels = match output {
            ClassificationOutput::Nested(mut batches) if !batches.is_empty() => batches.remove(0),
            ClassificationOutput::Nested(_) => Vec::new(),
            ClassificationOutput::Flat(labels) => labels,
        };

        Ok(labels
            .into_iter()
            .map(|l| LabelScore {
                label: l.label,
                score: l.score,
            })
            .collect())
    }
}

#[async_trait]
impl Translator for HuggingFaceClient {
    #[tracing::instrument(skip(self, text), fields(model = %self.model_id, input_len = text.len()))]
    async fn translate(&self, text: &str) -> Result<String, InferenceError> {
        let outputs: Vec<TranslationOutput> = self.post(&TextRequest { inputs: text }).await?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.translation_text)
            .ok_or_else(|| InferenceError::InvalidResponse("empty translation list".to_string()))
    }
}
