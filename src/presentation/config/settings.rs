use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{ModelCatalog, SummaryLengthPolicy};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub models: ModelSettings,
    pub chunking: ChunkingSettings,
    pub summarization: SummarizationSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.{environment}` under `APP_`-prefixed variables,
    /// e.g. `APP_INFERENCE__API_TOKEN`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceProvider {
    #[default]
    Scaffold,
    #[serde(rename = "huggingface")]
    HuggingFace,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    pub provider: InferenceProvider,
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            provider: InferenceProvider::Scaffold,
            base_url: "https://router.huggingface.co/hf-inference".to_string(),
            api_token: None,
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub summarization: String,
    pub question_answering: String,
    pub classification: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        let catalog = ModelCatalog::default();
        Self {
            summarization: catalog.summarization,
            question_answering: catalog.question_answering,
            classification: catalog.classification,
        }
    }
}

impl ModelSettings {
    pub fn catalog(&self) -> ModelCatalog {
        ModelCatalog {
            summarization: self.summarization.clone(),
            question_answering: self.question_answering.clone(),
            classification: self.classification.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkUnit {
    Tokens,
    #[default]
    Words,
    Characters,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    pub unit: ChunkUnit,
    pub max_chunk_size: usize,
    /// Tokenizer used when `unit = "tokens"`; falls back to the summarization model.
    pub tokenizer_model: Option<String>,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            unit: ChunkUnit::Words,
            max_chunk_size: 1024,
            tokenizer_model: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryPolicyKind {
    #[default]
    Fixed,
    Proportional,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizationSettings {
    pub policy: SummaryPolicyKind,
    pub max_length: usize,
    pub min_length: usize,
    pub ratio: f32,
    pub floor: usize,
    pub ceiling: usize,
}

impl Default for SummarizationSettings {
    fn default() -> Self {
        Self {
            policy: SummaryPolicyKind::Fixed,
            max_length: 130,
            min_length: 30,
            ratio: 0.3,
            floor: 40,
            ceiling: 300,
        }
    }
}

impl SummarizationSettings {
    pub fn length_policy(&self) -> SummaryLengthPolicy {
        match self.policy {
            SummaryPolicyKind::Fixed => SummaryLengthPolicy::Fixed {
                max_length: self.max_length,
                min_length: self.min_length,
            },
            SummaryPolicyKind::Proportional => SummaryLengthPolicy::Proportional {
                ratio: self.ratio,
                min_length: self.min_length,
                floor: self.floor,
                ceiling: self.ceiling,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
    pub pdf_timeout_secs: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 25,
            pdf_timeout_secs: 30,
        }
    }
}

impl ExtractionSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}
