use anyhow::{Context, anyhow};
use studymate::api::{self, app_state::AppState};
use studymate::config::config::AppConfig;
use studymate::config::credentials::EnvCredentials;
use studymate::config::loader::ConfigLoader;
use studymate::observability::{AppMetrics, ObservabilityState, create_observability_router, init_tracing};
use std::sync::Arc;
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config: AppConfig = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;

    let _log_guard = init_tracing(&config.app_name, &config.logging)
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    info!(
        environment = %config.environment,
        model = %config.gateway.model,
        "Starting Studymate..."
    );

    // 凭证在每次请求时读取，这里只记录变量名
    let credentials = Arc::new(EnvCredentials::new(config.gateway.api_key_env.clone()));
    info!(variable = %config.gateway.api_key_env, "Gateway credential source configured");

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::from_config(&config.gateway, credentials, metrics.clone())
        .context("failed to create AI gateway client")?;
    info!(endpoint = %config.gateway.endpoint, "AI gateway client initialized");

    let observability_state = Arc::new(ObservabilityState::new(VERSION.to_string(), metrics));
    let router = create_observability_router(observability_state).merge(api::create_router(app_state));
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Studymate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
