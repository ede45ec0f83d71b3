//! Router construction: info/health routes, account routes, and the not-found fallback.

mod account;
mod common;

pub use account::account_routes;
pub use common::common_routes;

use crate::config::DEFAULT_BODY_LIMIT;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::Uri, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Full service router with the default body limit.
pub fn app(state: AppState) -> Router {
    app_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

/// `body_limit` is the only body cap; axum's built-in extractor limit is disabled.
pub fn app_with_body_limit(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(account_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
