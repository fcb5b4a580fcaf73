//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - The political-fund and election-fund report routes
//! - Health and welcome endpoints
//! - Request id, tracing, and CORS middleware
//! - The JSON error body shared by every route

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method};
use polimoney_core::loader::ReferenceLoader;
use polimoney_core::reports::ReportService;
use polimoney_shared::config::AppSettings;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use error::ApiError;

/// Application state shared across handlers.
pub struct AppState<L: ReferenceLoader> {
    /// Report assembly service.
    pub reports: ReportService<L>,
    /// Include underlying error text in 500 responses.
    pub debug: bool,
}

impl<L: ReferenceLoader> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            reports: self.reports.clone(),
            debug: self.debug,
        }
    }
}

impl<L: ReferenceLoader> AppState<L> {
    /// Creates application state over a record source.
    #[must_use]
    pub fn new(loader: Arc<L>, debug: bool) -> Self {
        Self {
            reports: ReportService::new(loader),
            debug,
        }
    }
}

/// Creates the main application router.
pub fn create_router<L: ReferenceLoader + 'static>(
    state: AppState<L>,
    settings: &AppSettings,
) -> Router {
    Router::new()
        .merge(routes::health::routes::<L>())
        .nest("/api/v1", routes::api_routes::<L>())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors_layer(&settings.cors_origins))
        .with_state(state)
}

/// CORS for read-only access from the configured origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests;
