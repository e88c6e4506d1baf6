mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ChunkUnit, ChunkingSettings, ExtractionSettings, InferenceProvider, InferenceSettings,
    LoggingSettings, ModelSettings, ServerSettings, Settings, SummarizationSettings,
    SummaryPolicyKind,
};
