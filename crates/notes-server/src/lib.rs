//! notes-server: HTTP API for notes, users and login.
//!
//! # Architecture
//!
//! The server is built on Axum. Handlers talk to the repositories in
//! [`AppState`] and return [`ApiError`] on failure, which renders every
//! error as `{ "error": "..." }` with the matching status code.
//!
//! Middleware, outermost first:
//! - `TraceLayer` spans
//! - CORS
//! - Request logging with `x-request-id` propagation
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{AppState, ServerConfig, build_app};
//! use notes_store::MemoryStore;
//!
//! let config = ServerConfig::from_env()?;
//! let app = build_app(AppState::new(MemoryStore::new(), config))?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;

/// Build the router with its full middleware stack.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = middleware::build_cors_layer(&state.config().cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(axum::middleware::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
