use super::TaskKind;

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerSpan {
    pub answer: String,
    pub score: f32,
    /// Byte offsets of the answer within the context.
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResult {
    Summary(String),
    Answer(AnswerSpan),
    Labels(Vec<LabelScore>),
    Translation(String),
}

/// What one user action produces.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalOutput {
    pub task: TaskKind,
    pub result: InferenceResult,
    pub chunk_count: usize,
}

impl FinalOutput {
    pub fn new(task: TaskKind, result: InferenceResult, chunk_count: usize) -> Self {
        Self {
            task,
            result,
            chunk_count,
        }
    }

    pub fn single(task: TaskKind, result: InferenceResult) -> Self {
        Self::new(task, result, 1)
    }
}
