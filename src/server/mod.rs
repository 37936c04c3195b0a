//! # HTTP Server for Halftone Rendering
//!
//! Provides a web interface for uploading (or pasting) an image, adjusting the
//! cell size and pattern, and downloading the halftone as PNG.
//!
//! ## Usage
//!
//! ```bash
//! halftoner serve --listen 0.0.0.0:8080
//! ```
//!
//! Then open http://localhost:8080 in a browser.
//!
//! ## Routes
//!
//! | Method | Path                       | Purpose                              |
//! |--------|----------------------------|--------------------------------------|
//! | GET    | `/`                        | Upload page                          |
//! | GET    | `/api/patterns`            | Pattern names and curve parameters   |
//! | POST   | `/api/halftone`            | One-shot multipart render to PNG     |
//! | POST   | `/api/images`              | Store an upload for re-rendering     |
//! | GET    | `/api/images/:id/halftone` | Render a stored upload               |

mod handlers;
mod state;
mod static_files;

pub use state::{AppState, ImageSession, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::error::HalftoneError;
use state::SESSION_SWEEP_SECS;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        // Frontend
        .route("/", get(static_files::index_handler))
        // Pattern API
        .route("/api/patterns", get(handlers::patterns::list))
        // Halftone API
        .route("/api/halftone", post(handlers::halftone::render))
        .route("/api/images", post(handlers::images::upload))
        .route("/api/images/:id/halftone", get(handlers::images::halftone))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use halftoner::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), halftoner::error::HalftoneError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..ServerConfig::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), HalftoneError> {
    let app_state = Arc::new(AppState::new(config.clone()));

    // Spawn background session cleanup task
    tokio::spawn(cleanup_sessions(app_state.clone()));

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            HalftoneError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    tracing::info!(
        addr = %config.listen_addr,
        max_upload_bytes = config.max_upload_bytes,
        "halftoner HTTP server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| HalftoneError::Server(format!("Server error: {}", e)))?;

    Ok(())
}

/// Background task to drop expired image sessions.
async fn cleanup_sessions(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(Duration::from_secs(SESSION_SWEEP_SECS));

    loop {
        interval.tick().await;
        let removed = state.sweep_expired().await;
        if removed > 0 {
            let remaining = state.sessions.read().await.len();
            tracing::info!(removed, remaining, "cleaned up expired image sessions");
        }
    }
}
