use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::FileLoader;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, index_handler, list_tasks_handler, multipart_task_handler, text_task_handler,
};
use crate::presentation::state::AppState;

/// Headroom for multipart framing and the text fields around the file.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router<F>(state: AppState<F>) -> Router
where
    F: FileLoader + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.upload_limit_bytes + FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route(
            "/api/v1/tasks",
            get(list_tasks_handler::<F>).post(multipart_task_handler::<F>),
        )
        .route("/api/v1/tasks/text", post(text_task_handler::<F>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
