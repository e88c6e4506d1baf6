mod file_loader;
mod inference_error;
mod model_provider;
mod question_answerer;
mod summarizer;
mod text_classifier;
mod text_splitter;
mod token_counter;
mod translator;

pub use file_loader::{FileLoader, FileLoaderError};
pub use inference_error::InferenceError;
pub use model_provider::ModelProvider;
pub use question_answerer::QuestionAnswerer;
pub use summarizer::{SummaryParams, Summarizer};
pub use text_classifier::TextClassifier;
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use token_counter::{TokenCounter, TokenCounterError};
pub use translator::Translator;
