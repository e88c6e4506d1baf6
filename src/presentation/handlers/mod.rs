mod health;
mod index;
mod tasks;

pub use health::health_handler;
pub use index::index_handler;
pub use tasks::{
    ErrorResponse, ResultBody, TaskResponse, TextTaskRequest, list_tasks_handler,
    multipart_task_handler, text_task_handler,
};
