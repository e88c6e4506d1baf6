use std::collections::HashSet;

use async_trait::async_trait;

use crate::application::ports::{
    InferenceError, QuestionAnswerer, SummaryParams, Summarizer, TextClassifier, Translator,
};
use crate::domain::{AnswerSpan, LabelScore};

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "happy", "love", "positive", "success", "best", "pleased",
];
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "terrible", "sad", "hate", "negative", "failure", "worst", "angry",
];

/// Deterministic offline stand-in for every pipeline kind. Used when no
/// hosted backend is configured so the service can be exercised end to end.
pub struct ScaffoldModel {
    model_id: String,
}

impl ScaffoldModel {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
        }
    }
}

fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            let end = idx + ch.len_utf8();
            spans.push((start, end));
            start = end;
        }
    }
    if start < text.len() {
        spans.push((start, text.len()));
    }
    spans
        .into_iter()
        .filter_map(|(s, e)| {
            let slice = &text[s..e];
            let leading = slice.len() - slice.trim_start().len();
            let trailing = slice.len() - slice.trim_end().len();
            let (s, e) = (s + leading, e - trailing);
            (s < e).then_some((s, e))
        })
        .collect()
}

fn lowercase_words(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[async_trait]
impl Summarizer for ScaffoldModel {
    async fn summarize(
        &self,
        text: &str,
        params: SummaryParams,
    ) -> Result<String, InferenceError> {
        let lead = sentence_spans(text)
            .first()
            .map(|&(s, e)| &text[s..e])
            .unwrap_or_default();

        Ok(lead
            .split_whitespace()
            .take(params.max_length.max(1))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[async_trait]
impl QuestionAnswerer for ScaffoldModel {
    async fn answer(&self, question: &str, context: &str) -> Result<AnswerSpan, InferenceError> {
        let question_words = lowercase_words(question);
        let best = sentence_spans(context)
            .into_iter()
            .map(|(s, e)| {
                let overlap = lowercase_words(&context[s..e])
                    .intersection(&question_words)
                    .count();
                (overlap, s, e)
            })
            .max_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
            .ok_or_else(|| InferenceError::InferenceFailed("context has no sentences".to_string()))?;

        let (overlap, start, end) = best;
        let score = if question_words.is_empty() {
            0.0
        } else {
            overlap as f32 / question_words.len() as f32
        };

        Ok(AnswerSpan {
            answer: context[start..end].to_string(),
            score,
            start,
            end,
        })
    }
}

#[async_trait]
impl TextClassifier for ScaffoldModel {
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>, InferenceError> {
        let words = lowercase_words(text);
        let positive = POSITIVE_WORDS.iter().filter(|w| words.contains(**w)).count();
        let negative = NEGATIVE_WORDS.iter().filter(|w| words.contains(**w)).count();
        let p = (positive as f32 + 1.0) / (positive as f32 + negative as f32 + 2.0);

        let mut labels = vec![
            LabelScore {
                label: "POSITIVE".to_string(),
                score: p,
            },
            LabelScore {
                label: "NEGATIVE".to_string(),
                score: 1.0 - p,
            },
        ];
        labels.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(labels)
    }
}

#[async_trait]
impl Translator for ScaffoldModel {
    async fn translate(&self, text: &str) -> Result<String, InferenceError> {
        Ok(format!("[{}] {}", self.model_id, text.trim()))
    }
}
