//! Route definitions for the HTTP API.

pub mod health;
pub mod login;
pub mod notes;
pub mod users;

use axum::{Router, handler::HandlerWithoutStateExt};
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Unmatched paths are answered from `STATIC_DIR` when configured, and
/// otherwise (or when no file matches) with `404 {"error":"unknown endpoint"}`.
/// Unsupported methods on known paths get the same 404.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .merge(users::routes())
        .merge(login::routes())
        .method_not_allowed_fallback(unknown_endpoint);

    let router = match state.config().static_dir.clone() {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving static files");
            router.fallback_service(
                ServeDir::new(dir)
                    .call_fallback_on_method_not_allowed(true)
                    .not_found_service(unknown_endpoint.into_service()),
            )
        }
        None => router.fallback(unknown_endpoint),
    };

    router.with_state(state)
}

async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}
