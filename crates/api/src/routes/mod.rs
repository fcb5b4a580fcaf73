//! API route definitions.

use axum::Router;
use polimoney_core::loader::ReferenceLoader;

use crate::AppState;

pub mod funds;
pub mod health;

/// Creates the versioned API router.
pub fn api_routes<L: ReferenceLoader + 'static>() -> Router<AppState<L>> {
    Router::new().merge(funds::routes::<L>())
}
