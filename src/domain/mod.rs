mod chunk;
mod document;
mod inference_result;
mod target_language;
mod task_kind;

pub use chunk::{Chunk, ChunkBoundary, DocumentId, normalize_whitespace, reassemble};
pub use document::{ContentType, Document};
pub use inference_result::{AnswerSpan, FinalOutput, InferenceResult, LabelScore};
pub use target_language::TargetLanguage;
pub use task_kind::TaskKind;
