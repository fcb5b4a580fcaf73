//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use polimoney_core::reports::ReportError;
use polimoney_shared::AppError;
use serde_json::json;

/// Message shown in place of server-side failure text.
const GENERIC_MESSAGE: &str = "An error occurred";

/// `detail` of a server-side failure outside debug mode.
const GENERIC_DETAIL: &str = "An unexpected error occurred";

/// An error rendered as `{error, message}` with the matching status code.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    detail: Option<String>,
}

impl ApiError {
    /// Wraps an application error without detail text.
    #[must_use]
    pub const fn new(error: AppError) -> Self {
        Self {
            error,
            detail: None,
        }
    }

    /// Maps a report failure.
    ///
    /// Missing records become 404 with their caller-facing message. Record
    /// source failures become 500 with a `detail` that holds the failure text
    /// when `debug` is set and a generic text otherwise.
    #[must_use]
    pub fn from_report(err: &ReportError, debug: bool) -> Self {
        match err {
            ReportError::NotFound(missing) => {
                Self::new(AppError::NotFound(missing.message().to_string()))
            }
            ReportError::Loader(source) => Self {
                error: AppError::Database(source.to_string()),
                detail: Some(if debug {
                    source.to_string()
                } else {
                    GENERIC_DETAIL.to_string()
                }),
            },
        }
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self::new(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if self.error.is_client_error() {
            self.error.message()
        } else {
            GENERIC_MESSAGE
        };

        let mut body = json!({
            "error": self.error.error_code(),
            "message": message,
        });
        if let Some(detail) = self.detail {
            body["detail"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}
