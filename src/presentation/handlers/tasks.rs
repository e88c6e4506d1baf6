use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::FileLoader;
use crate::application::services::{PipelineError, TaskRequest, Upload};
use crate::domain::{FinalOutput, InferenceResult, TargetLanguage, TaskKind};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TaskResponse {
    pub task: String,
    pub chunk_count: usize,
    pub result: ResultBody,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultBody {
    Summary {
        text: String,
    },
    Answer {
        answer: String,
        score: f32,
        start: usize,
        end: usize,
    },
    Labels {
        labels: Vec<LabelBody>,
    },
    Translation {
        text: String,
    },
}

#[derive(Serialize)]
pub struct LabelBody {
    pub label: String,
    pub score: f32,
}

impl From<FinalOutput> for TaskResponse {
    fn from(output: FinalOutput) -> Self {
        let result = match output.result {
            InferenceResult::Summary(text) => ResultBody::Summary { text },
            InferenceResult::Answer(span) => ResultBody::Answer {
                answer: span.answer,
                score: span.score,
                start: span.start,
                end: span.end,
            },
            InferenceResult::Labels(labels) => ResultBody::Labels {
                labels: labels
                    .into_iter()
                    .map(|l| LabelBody {
                        label: l.label,
                        score: l.score,
                    })
                    .collect(),
            },
            InferenceResult::Translation(text) => ResultBody::Translation { text },
        };

        Self {
            task: output.task.to_string(),
            chunk_count: output.chunk_count,
            result,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

fn error_response(status: StatusCode, kind: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            kind: kind.to_string(),
        }),
    )
        .into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, "bad_request", message)
}

fn pipeline_error_response(err: PipelineError) -> Response {
    let status = match err {
        PipelineError::MissingInput(_) => StatusCode::BAD_REQUEST,
        PipelineError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        PipelineError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Inference(_) => StatusCode::BAD_GATEWAY,
    };

    if status.is_server_error() {
        tracing::error!(error = %err, kind = err.kind(), "Task failed");
    } else {
        tracing::warn!(error = %err, kind = err.kind(), "Task rejected");
    }

    error_response(status, err.kind(), err.to_string())
}

fn parse_task(raw: &str) -> Result<TaskKind, Response> {
    raw.parse::<TaskKind>().map_err(bad_request)
}

fn parse_language(raw: Option<&str>) -> Result<Option<TargetLanguage>, Response> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.parse::<TargetLanguage>().map(Some).map_err(bad_request),
        None => Ok(None),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Serialize)]
pub struct TaskDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct LanguageDescriptor {
    pub name: &'static str,
    pub code: &'static str,
}

#[derive(Serialize)]
pub struct TaskCatalogResponse {
    pub tasks: Vec<TaskDescriptor>,
    pub target_languages: Vec<LanguageDescriptor>,
}

pub async fn list_tasks_handler<F>(State(state): State<AppState<F>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
{
    let tasks = state
        .task_service
        .available_tasks()
        .into_iter()
        .map(|kind| TaskDescriptor {
            id: kind.as_str(),
            label: kind.label(),
        })
        .collect();

    let target_languages = TargetLanguage::ALL
        .into_iter()
        .map(|language| LanguageDescriptor {
            name: language.name(),
            code: language.code(),
        })
        .collect();

    Json(TaskCatalogResponse {
        tasks,
        target_languages,
    })
}

#[derive(Debug, Deserialize)]
pub struct TextTaskRequest {
    pub task: String,
    #[serde(default)]
    pub text: String,
    pub question: Option<String>,
    pub target_language: Option<String>,
}

#[tracing::instrument(skip(state, body), fields(task = %body.task))]
pub async fn text_task_handler<F>(
    State(state): State<AppState<F>>,
    Json(body): Json<TextTaskRequest>,
) -> Response
where
    F: FileLoader + 'static,
{
    let task = match parse_task(&body.task) {
        Ok(t) => t,
        Err(response) => return response,
    };
    let target_language = match parse_language(body.target_language.as_deref()) {
        Ok(l) => l,
        Err(response) => return response,
    };

    let mut request = TaskRequest::new(task).with_text(body.text);
    request.question = non_empty(body.question);
    request.target_language = target_language;

    run_task(&state, request).await
}

#[tracing::instrument(skip(state, multipart))]
pub async fn multipart_task_handler<F>(
    State(state): State<AppState<F>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + 'static,
{
    let mut task: Option<String> = None;
    let mut upload: Option<Upload> = None;
    let mut text: Option<String> = None;
    let mut question: Option<String> = None;
    let mut target_language: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let mime = field.content_type().map(String::from);
            let data = match field.bytes().await {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read file bytes");
                    return bad_request(format!("Failed to read file: {}", e));
                }
            };

            // Browsers submit an empty part when no file was chosen.
            if filename.is_empty() && data.is_empty() {
                continue;
            }

            tracing::debug!(filename = %filename, bytes = data.len(), "File received");
            upload = Some(Upload {
                filename,
                mime,
                data: data.to_vec(),
            });
            continue;
        }

        let value = match field.text().await {
            Ok(v) => v,
            Err(e) => return bad_request(format!("Failed to read field '{}': {}", name, e)),
        };

        match name.as_str() {
            "task" => task = Some(value),
            "text" => text = Some(value),
            "question" => question = Some(value),
            "target_language" => target_language = Some(value),
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    let task = match task.as_deref().map(parse_task) {
        Some(Ok(t)) => t,
        Some(Err(response)) => return response,
        None => return bad_request("The 'task' field is required"),
    };
    let target_language = match parse_language(target_language.as_deref()) {
        Ok(l) => l,
        Err(response) => return response,
    };

    let request = TaskRequest {
        task,
        upload,
        text: non_empty(text),
        question: non_empty(question),
        target_language,
    };

    run_task(&state, request).await
}

async fn run_task<F>(state: &AppState<F>, request: TaskRequest) -> Response
where
    F: FileLoader + 'static,
{
    match state.task_service.run(request).await {
        Ok(output) => (StatusCode::OK, Json(TaskResponse::from(output))).into_response(),
        Err(err) => pipeline_error_response(err),
    }
}
