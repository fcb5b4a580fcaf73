//! Political-fund and election-fund report routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use polimoney_core::loader::ReferenceLoader;
use polimoney_core::reports::ReportError;
use polimoney_shared::AppError;
use polimoney_shared::types::LedgerId;
use tracing::{debug, error};

use crate::{ApiError, AppState};

/// Message for a ledger id that is not a UUID.
const INVALID_LEDGER_ID: &str = "台帳IDの形式が正しくありません";

/// Creates the report routes.
pub fn routes<L: ReferenceLoader + 'static>() -> Router<AppState<L>> {
    Router::new()
        .route("/political-funds/{ledger_id}", get(get_political_funds::<L>))
        .route("/election-funds/{ledger_id}", get(get_election_funds::<L>))
}

/// Political-fund statement of an organization-bound ledger.
async fn get_political_funds<L: ReferenceLoader + 'static>(
    State(state): State<AppState<L>>,
    ledger_id: Result<Path<LedgerId>, PathRejection>,
) -> Response {
    let ledger_id = match parse_ledger_id(ledger_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.reports.political_funds(ledger_id).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => report_failure(&e, ledger_id, state.debug),
    }
}

/// Election-fund statement of an election-bound ledger.
async fn get_election_funds<L: ReferenceLoader + 'static>(
    State(state): State<AppState<L>>,
    ledger_id: Result<Path<LedgerId>, PathRejection>,
) -> Response {
    let ledger_id = match parse_ledger_id(ledger_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.reports.election_funds(ledger_id).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => report_failure(&e, ledger_id, state.debug),
    }
}

fn parse_ledger_id(path: Result<Path<LedgerId>, PathRejection>) -> Result<LedgerId, Response> {
    path.map(|Path(id)| id).map_err(|rejection| {
        debug!(rejection = %rejection, "Rejected ledger id");
        ApiError::new(AppError::Validation(INVALID_LEDGER_ID.to_string())).into_response()
    })
}

fn report_failure(err: &ReportError, ledger_id: LedgerId, debug: bool) -> Response {
    if let ReportError::Loader(source) = err {
        error!(error = %source, %ledger_id, "Failed to load report records");
    }
    ApiError::from_report(err, debug).into_response()
}
