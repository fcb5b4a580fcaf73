//! Ledger types.

use std::fmt;

use chrono::{DateTime, Utc};
use polimoney_shared::types::{ElectionId, LedgerId, OrganizationId, PoliticianId};
use serde::{Deserialize, Serialize};

/// The kind of report a ledger feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    /// Political-fund statement of a political organization.
    Organization,
    /// Election-fund statement of an election campaign.
    Election,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Organization => f.write_str("organization"),
            Self::Election => f.write_str("election"),
        }
    }
}

/// What a ledger is bound to. Exactly one of organization or election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum LedgerScope {
    /// Bound to a political organization.
    Organization(OrganizationId),
    /// Bound to an election.
    Election(ElectionId),
}

impl LedgerScope {
    /// The report kind this scope belongs to.
    #[must_use]
    pub const fn kind(&self) -> ScopeKind {
        match self {
            Self::Organization(_) => ScopeKind::Organization,
            Self::Election(_) => ScopeKind::Election,
        }
    }
}

/// One reporting unit for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Ledger ID.
    pub id: LedgerId,
    /// Reporting politician.
    pub politician_id: PoliticianId,
    /// Organization or election the ledger is bound to.
    pub scope: LedgerScope,
    /// Fiscal year.
    pub fiscal_year: i32,
    /// Precomputed total income (yen).
    pub total_income: i64,
    /// Precomputed total expense (yen).
    pub total_expense: i64,
    /// Stored journal count.
    pub journal_count: i32,
    /// Last update on the source side.
    pub last_updated_at: DateTime<Utc>,
    /// First sync time.
    pub first_synced_at: DateTime<Utc>,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Test data flag.
    pub is_test: bool,
}

impl Ledger {
    /// Income minus expense, from the stored totals, clamped to the `i64` range.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.total_income.saturating_sub(self.total_expense)
    }
}
