//! Health check endpoints.

use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use polimoney_core::loader::ReferenceLoader;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Time the check was answered.
    pub timestamp: DateTime<Utc>,
}

/// Welcome response.
#[derive(Serialize)]
pub struct WelcomeResponse {
    /// Greeting.
    pub message: &'static str,
    /// Path of the health check.
    pub health: &'static str,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Polimoney API",
        health: "/health",
    })
}

/// Creates health check routes.
pub fn routes<L: ReferenceLoader + 'static>() -> Router<AppState<L>> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
}
