use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::application::tasks::{TaskDispatcher, TaskError, TaskInput};
use crate::domain::{ContentType, Document, DocumentId, FinalOutput, TargetLanguage, TaskKind};

/// A file as received from the caller.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub mime: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub task: TaskKind,
    pub upload: Option<Upload>,
    pub text: Option<String>,
    pub question: Option<String>,
    pub target_language: Option<TargetLanguage>,
}

impl TaskRequest {
    pub fn new(task: TaskKind) -> Self {
        Self {
            task,
            upload: None,
            text: None,
            question: None,
            target_language: None,
        }
    }

    pub fn with_upload(mut self, upload: Upload) -> Self {
        self.upload = Some(upload);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_target_language(mut self, language: TargetLanguage) -> Self {
        self.target_language = Some(language);
        self
    }
}

/// Runs one user action end to end: extract, then dispatch the selected task.
pub struct DocumentTaskService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
    dispatcher: Arc<TaskDispatcher>,
    max_upload_bytes: usize,
}

impl<F> DocumentTaskService<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>, dispatcher: Arc<TaskDispatcher>, max_upload_bytes: usize) -> Self {
        Self {
            file_loader,
            dispatcher,
            max_upload_bytes,
        }
    }

    pub fn available_tasks(&self) -> Vec<TaskKind> {
        self.dispatcher.kinds()
    }

    #[tracing::instrument(skip(self, request), fields(task = %request.task))]
    pub async fn run(&self, request: TaskRequest) -> Result<FinalOutput, PipelineError> {
        let document_id = DocumentId::new();

        // An uploaded file takes precedence over pasted text.
        let text = match request.upload {
            Some(upload) => self.extract(upload, document_id).await?,
            None => request.text.unwrap_or_default(),
        };

        if text.trim().is_empty() {
            return Err(PipelineError::MissingInput(
                "provide a document or some text".to_string(),
            ));
        }

        let mut input = TaskInput::new(text).with_document_id(document_id);
        input.question = request.question;
        input.target_language = request.target_language;

        let output = self
            .dispatcher
            .dispatch(request.task, &input)
            .await
            .inspect_err(|err| {
                if let TaskError::Splitting(e) = err {
                    tracing::error!(error = %e, "Chunking failed before any model call");
                }
            })?;
        tracing::info!(chunk_count = output.chunk_count, "Task finished");
        Ok(output)
    }

    async fn extract(&self, upload: Upload, document_id: DocumentId) -> Result<String, PipelineError> {
        // The MIME type only counts when the filename carries no extension.
        let content_type = match upload.filename.rsplit_once('.') {
            Some((_, extension)) => ContentType::from_extension(extension),
            None => upload.mime.as_deref().and_then(ContentType::from_mime),
        }
        .ok_or_else(|| {
            PipelineError::UnsupportedFormat(format!(
                "'{}' is not a PDF, TXT or DOCX file",
                upload.filename
            ))
        })?;

        if upload.data.len() > self.max_upload_bytes {
            return Err(PipelineError::Extraction(format!(
                "file is {} bytes, limit is {} bytes",
                upload.data.len(),
                self.max_upload_bytes
            )));
        }

        let mut document = Document::new(upload.filename, content_type, upload.data.len() as u64);
        document.id = document_id;

        tracing::debug!(
            filename = %document.filename,
            content_type = %content_type,
            size_bytes = document.size_bytes,
            "Extracting document text"
        );

        Ok(self.file_loader.extract_text(&upload.data, &document).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extraction(String),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Extraction(_) => "extraction",
            PipelineError::MissingInput(_) => "missing_input",
            PipelineError::Inference(_) => "inference",
            PipelineError::UnsupportedFormat(_) => "unsupported_format",
        }
    }
}

impl From<FileLoaderError> for PipelineError {
    fn from(err: FileLoaderError) -> Self {
        match err {
            FileLoaderError::UnsupportedContentType(ct) => PipelineError::UnsupportedFormat(ct),
            other => PipelineError::Extraction(other.to_string()),
        }
    }
}

impl From<TaskError> for PipelineError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::MissingInput(msg) => PipelineError::MissingInput(msg),
            TaskError::NotRegistered(kind) => {
                PipelineError::MissingInput(format!("task '{}' is not available", kind))
            }
            TaskError::Splitting(e) => {
                PipelineError::Inference(format!("text could not be chunked for the model: {}", e))
            }
            TaskError::Inference(e) => PipelineError::Inference(e.to_string()),
        }
    }
}
