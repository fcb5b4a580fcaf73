//! Report error types.

use std::fmt;

use thiserror::Error;

use crate::loader::LoaderError;
use crate::model::ScopeKind;

/// The record whose absence aborted a report build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRecord {
    /// No ledger of the requested kind with this ID.
    Ledger(ScopeKind),
    /// Ledger's politician.
    Politician,
    /// Ledger's organization.
    Organization,
    /// Ledger's election.
    Election,
    /// Election's district.
    District,
}

impl MissingRecord {
    /// Caller-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ledger(ScopeKind::Organization) => "政治資金の台帳が見つかりません",
            Self::Ledger(ScopeKind::Election) => "選挙資金の台帳が見つかりません",
            Self::Politician => "政治家情報が見つかりません",
            Self::Organization => "政治団体情報が見つかりません",
            Self::Election => "選挙情報が見つかりません",
            Self::District => "選挙区情報が見つかりません",
        }
    }
}

impl fmt::Display for MissingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ledger(ScopeKind::Organization) => f.write_str("political-funds ledger"),
            Self::Ledger(ScopeKind::Election) => f.write_str("election-funds ledger"),
            Self::Politician => f.write_str("politician"),
            Self::Organization => f.write_str("organization"),
            Self::Election => f.write_str("election"),
            Self::District => f.write_str("district"),
        }
    }
}

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required record does not exist.
    #[error("{0} not found")]
    NotFound(MissingRecord),

    /// The record source failed.
    #[error(transparent)]
    Loader(#[from] LoaderError),
}

impl ReportError {
    /// Returns true for the "not found" family.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
