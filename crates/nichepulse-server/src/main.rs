mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use nichepulse_pipeline::{BackendCorpus, PipelineOptions, TrendPipeline};
use nichepulse_sources::{NicheClient, SnippetClient, TrendsClient};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(nichepulse_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let trends = TrendsClient::new(
        &config.backend_base_url,
        config.backend_timeout_secs,
        &config.user_agent,
    )?;
    let snippets = SnippetClient::new(
        &config.backend_base_url,
        config.snippet_timeout_secs,
        &config.user_agent,
    )?;
    let niche = NicheClient::new(
        &config.backend_base_url,
        config.backend_timeout_secs,
        &config.user_agent,
    )?;
    let conversation = SnippetClient::new(
        &config.backend_base_url,
        config.backend_timeout_secs,
        &config.user_agent,
    )?;

    let pipeline = TrendPipeline::new(
        BackendCorpus::new(trends, config.subreddits.clone()),
        snippets,
        niche,
        config.ranking.clone(),
        PipelineOptions::from_app_config(&config),
    );

    let app = build_app(AppState {
        pipeline: Arc::new(pipeline),
        conversation: Arc::new(conversation),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "nichepulse server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
