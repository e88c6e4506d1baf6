use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::application::services::DocumentTaskService;

pub struct AppState<F>
where
    F: FileLoader,
{
    pub task_service: Arc<DocumentTaskService<F>>,
    pub upload_limit_bytes: usize,
}

impl<F> Clone for AppState<F>
where
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            task_service: Arc::clone(&self.task_service),
            upload_limit_bytes: self.upload_limit_bytes,
        }
    }
}
