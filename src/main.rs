use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use doctasks::application::services::{DocumentTaskService, ModelRegistry};
use doctasks::application::tasks::TaskDispatcher;
use doctasks::infrastructure::inference::ModelProviderFactory;
use doctasks::infrastructure::observability::{TracingConfig, init_tracing};
use doctasks::infrastructure::text_processing::{
    CompositeFileLoader, PdfAdapter, TextSplitterFactory,
};
use doctasks::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    let file_loader = Arc::new(CompositeFileLoader::standard(PdfAdapter::with_timeout(
        Duration::from_secs(settings.extraction.pdf_timeout_secs),
    )));

    let provider = ModelProviderFactory::create(&settings.inference)?;
    let registry = Arc::new(ModelRegistry::new(provider, settings.models.catalog()));
    if let Err(e) = registry.warm_up().await {
        // Handles that failed to load are retried on first use.
        tracing::warn!(error = %e, "Model warm-up incomplete");
    }

    let chunking = settings.chunking.clone();
    let tokenizer_model = chunking
        .tokenizer_model
        .clone()
        .unwrap_or_else(|| settings.models.summarization.clone());
    let splitter = tokio::task::spawn_blocking(move || {
        TextSplitterFactory::create(chunking.unit, chunking.max_chunk_size, &tokenizer_model)
    })
    .await??;

    let dispatcher = Arc::new(TaskDispatcher::standard(
        registry,
        splitter,
        settings.summarization.length_policy(),
    ));

    let upload_limit_bytes = settings.extraction.max_file_size_bytes();
    let task_service = Arc::new(DocumentTaskService::new(
        file_loader,
        dispatcher,
        upload_limit_bytes,
    ));

    let router = create_router(AppState {
        task_service,
        upload_limit_bytes,
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
