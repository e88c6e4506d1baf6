mod answer_task;
mod classify_task;
mod summarize_task;
mod task;
mod task_dispatcher;
mod translate_task;

pub use answer_task::AnswerTask;
pub use classify_task::ClassifyTask;
pub use summarize_task::SummarizeTask;
pub use task::{Task, TaskError, TaskInput};
pub use task_dispatcher::TaskDispatcher;
pub use translate_task::TranslateTask;
