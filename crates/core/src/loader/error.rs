//! Record source errors.

use thiserror::Error;

/// The record source could not answer a lookup.
///
/// Absence of a record is not an error; see [`super::ReferenceLoader`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoaderError {
    /// Source is misconfigured or unreachable.
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    /// Query failed or returned rows that could not be decoded.
    #[error("record source query failed: {0}")]
    Query(String),
}

impl LoaderError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }
}
