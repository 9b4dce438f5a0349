//! # uiform - UI schema form builder
//!
//! uiform lets a user paste a UI schema (a JSON array of form fields) and see
//! it compiled, live, into a JSON-Schema-driven form. The compiler and form
//! session live in `uiform-core`; this crate ships the binary that serves the
//! browser UI and a small JSON API, plus a `compile` command for scripts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tokio::sync::RwLock;
//! use uiform::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let (host, port) = (settings.server.host.clone(), settings.server.port);
//!
//!     let app = uiform::create_app(Arc::new(RwLock::new(settings)));
//!     let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! - `GET /health`, `GET /health/live`
//! - `POST /api/compile`: raw UI schema text in, compiled schema out
//! - `POST /api/validate`: `{schema, formData}` in, validation errors out
//! - `GET /api/settings`: session options for the UI
//! - everything else: the embedded UI

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Creates the Axum application router with all endpoints configured.
pub fn create_app(settings: Arc<RwLock<crate::config::Settings>>) -> Router {
    let health_handler = Arc::new(HealthHandler::new());

    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_router = Router::new()
        .route("/compile", post(api_handler::compile_schema))
        .route("/validate", post(api_handler::validate_answers))
        .route("/settings", get(api_handler::get_session_options))
        .with_state(ApiState { settings });

    health_router
        .nest("/api", api_router)
        // UI endpoint (catch-all for SPA)
        .fallback(crate::adapters::ui_handler::UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
