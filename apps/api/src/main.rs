use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_ner::config::Config;
use resume_ner::ner_client::{EntityTagger, HfInferenceTagger};
use resume_ner::routes::build_router;
use resume_ner::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_ner={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume NER Parser v{}", env!("CARGO_PKG_VERSION"));

    // The tagger is built once here and shared read-only by every request.
    let tagger = HfInferenceTagger::new(&config).context("Failed to build NER client")?;
    info!(
        "NER client initialized (model: {}, endpoint: {})",
        tagger.model_id(),
        config.ner_endpoint()
    );
    if config.hf_token.is_none() {
        info!("HF_TOKEN not set; calling the inference endpoint anonymously");
    }

    let state = AppState::new(config.clone(), Arc::new(tagger));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
