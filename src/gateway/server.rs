use super::handlers::{
    handle_execute, handle_health, handle_publish, handle_save, handle_validate,
};
use super::{AppState, GENERATION_TIMEOUT_MARGIN_SECS, MAX_BODY_SIZE, REQUEST_TIMEOUT_SECS};

use crate::activity::ExecutionHandler;
use crate::config::Config;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

/// Bind `gateway.host:gateway.port` and serve until Ctrl-C.
pub async fn run_gateway(config: Arc<Config>) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.gateway.host, config.gateway.port)
        .parse()
        .context("parse gateway bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind gateway socket")?;

    run_gateway_with_listener(listener, config).await
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let local_addr = listener
        .local_addr()
        .context("get gateway listener local address")?;

    let handler = ExecutionHandler::from_config(&config).context("build execution handler")?;
    let state = AppState {
        handler: Arc::new(handler),
    };

    log_gateway_banner(local_addr, &config);

    let app = build_app(state, config.gateway.public_dir.as_deref());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP gateway")?;

    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn log_gateway_banner(addr: SocketAddr, config: &Config) {
    tracing::info!(
        %addr,
        model = %config.generation.model,
        locale = %config.prompt.locale,
        "gateway listening"
    );
    tracing::info!("routes: POST /execute /save /publish /validate, GET /health");
    if let Some(dir) = &config.gateway.public_dir {
        tracing::info!(dir = %dir.display(), "serving static activity files");
    }
}

/// Route timeout: `REQUEST_TIMEOUT_SECS`, raised to stay
/// `GENERATION_TIMEOUT_MARGIN_SECS` above the generation timeout.
pub fn request_timeout(generation_timeout: Duration) -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
        .max(generation_timeout.saturating_add(Duration::from_secs(GENERATION_TIMEOUT_MARGIN_SECS)))
}

pub fn build_app(state: AppState, public_dir: Option<&Path>) -> Router {
    let timeout = request_timeout(state.handler.generation_timeout());

    let mut app = Router::new()
        .route("/health", get(handle_health))
        .route("/execute", post(handle_execute))
        .route("/save", post(handle_save))
        .route("/publish", post(handle_publish))
        .route("/validate", post(handle_validate));

    match public_dir {
        Some(dir) if dir.is_dir() => {
            app = app.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "public_dir is not a directory; static files disabled");
        }
        None => {}
    }

    app.with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
}
