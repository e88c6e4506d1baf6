use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskKind {
    Summarize,
    Answer,
    Classify,
    Translate,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Summarize,
        TaskKind::Answer,
        TaskKind::Classify,
        TaskKind::Translate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Summarize => "summarize",
            TaskKind::Answer => "answer",
            TaskKind::Classify => "classify",
            TaskKind::Translate => "translate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Summarize => "Summarization",
            TaskKind::Answer => "Question Answering",
            TaskKind::Classify => "Text Classification",
            TaskKind::Translate => "Translation",
        }
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summarize" | "summarization" => Ok(TaskKind::Summarize),
            "answer" | "qa" | "question-answering" | "question_answering" => Ok(TaskKind::Answer),
            "classify" | "classification" => Ok(TaskKind::Classify),
            "translate" | "translation" => Ok(TaskKind::Translate),
            _ => Err(format!("Invalid task: {}", s)),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
