//! Summary and metadata construction.

use chrono::{DateTime, Utc};

use crate::model::{Ledger, Organization, Politician};

use super::types::{
    API_VERSION, ElectionFundsMeta, ElectionFundsSummary, ElectionInfo, PoliticalFundsMeta,
    PoliticalFundsSummary,
};

impl PoliticalFundsSummary {
    /// Summary from the ledger's stored totals and count.
    #[must_use]
    pub const fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            total_income: ledger.total_income,
            total_expense: ledger.total_expense,
            balance: ledger.balance(),
            journal_count: ledger.journal_count,
        }
    }
}

impl ElectionFundsSummary {
    /// Summary from the ledger's stored totals plus the accumulated public expense.
    #[must_use]
    pub const fn from_ledger(ledger: &Ledger, public_expense_total: i64) -> Self {
        Self {
            total_income: ledger.total_income,
            total_expense: ledger.total_expense,
            balance: ledger.balance(),
            public_expense_total,
            journal_count: ledger.journal_count,
        }
    }
}

impl PoliticalFundsMeta {
    /// Builds metadata stamped with `generated_at`.
    #[must_use]
    pub fn new(
        politician: Politician,
        organization: Organization,
        summary: PoliticalFundsSummary,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            politician,
            organization,
            summary,
            generated_at,
        }
    }
}

impl ElectionFundsMeta {
    /// Builds metadata stamped with `generated_at`.
    #[must_use]
    pub fn new(
        politician: Politician,
        election: ElectionInfo,
        summary: ElectionFundsSummary,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            politician,
            election,
            summary,
            generated_at,
        }
    }
}
