//! HTTP entry point
//!
//! # Routes
//!
//! - `GET /health` - liveness check
//! - `POST /build` - build the posted configuration document and return the
//!   rendered text
//!
//! Every request builds from its own decoded document; the shared [`Engine`]
//! is only read.
//!
//! # Example
//!
//! ```rust,no_run
//! use bettybot::{config::Settings, web, Engine};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::load()?;
//! let engine = Engine::load(&settings)?;
//! web::serve(engine, settings.web.bind_addr()?).await?;
//! # Ok(())
//! # }
//! ```

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::build::Files;
use crate::engine::Engine;
use crate::error::BuildError;

/// Build the application router
#[must_use]
pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/build", post(build))
        .with_state(engine)
}

/// Serve the router on `addr` until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(engine: Engine, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(Arc::new(engine));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn build(
    State(engine): State<Arc<Engine>>,
    Json(files): Json<Files>,
) -> Result<String, BuildError> {
    tracing::info!(files = files.files.len(), "Build request");
    engine.build(&files).inspect_err(|e| {
        tracing::warn!(error = %e, "Build request failed");
    })
}

impl IntoResponse for BuildError {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()).into_response()
    }
}
