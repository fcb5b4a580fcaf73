//! Journal normalization.
//!
//! Turns raw journal rows into report lines: category and display name,
//! activity label, and public expense suppression.

use crate::category::CategoryResolver;
use crate::model::{Classification, JournalEntry};

use super::types::{EntryType, ReportEntry};

/// Public expense for a political-fund line.
///
/// Only an exact zero is suppressed; absent stays absent and any other
/// value, negative included, passes through.
#[must_use]
pub fn political_public_expense(amount: Option<i64>) -> Option<i64> {
    amount.filter(|&value| value != 0)
}

/// Public expense for an election-fund line.
///
/// Absent, zero, and negative values are all suppressed.
#[must_use]
pub fn election_public_expense(amount: Option<i64>) -> Option<i64> {
    amount.filter(|&value| value > 0)
}

/// Activity label of an election-fund line.
///
/// Missing or unrecognized classifications default to campaign activity.
#[must_use]
pub const fn election_entry_type(classification: Option<Classification>) -> EntryType {
    match classification {
        Some(Classification::PreCampaign) => EntryType::CandidacyPreparation,
        Some(Classification::Campaign) | None => EntryType::ElectionCampaign,
    }
}

/// Normalizes journal rows for one report build.
#[derive(Debug, Clone, Default)]
pub struct JournalNormalizer {
    resolver: CategoryResolver,
}

impl JournalNormalizer {
    /// Creates a normalizer resolving categories with `resolver`.
    #[must_use]
    pub fn new(resolver: CategoryResolver) -> Self {
        Self { resolver }
    }

    /// Normalizes a row of a political-fund ledger.
    #[must_use]
    pub fn political(&self, entry: &JournalEntry) -> ReportEntry {
        self.line(
            entry,
            EntryType::PoliticalActivity,
            political_public_expense(entry.public_expense_amount),
        )
    }

    /// Normalizes a row of an election-fund ledger.
    #[must_use]
    pub fn election(&self, entry: &JournalEntry) -> ReportEntry {
        self.line(
            entry,
            election_entry_type(entry.classification()),
            election_public_expense(entry.public_expense_amount),
        )
    }

    /// Normalizes election-fund rows and sums their positive public expenses.
    ///
    /// The total saturates at `i64::MAX`.
    #[must_use]
    pub fn election_lines(&self, entries: &[JournalEntry]) -> (Vec<ReportEntry>, i64) {
        let mut public_expense_total = 0_i64;
        let lines = entries
            .iter()
            .map(|entry| {
                let line = self.election(entry);
                public_expense_total =
                    public_expense_total.saturating_add(line.public_expense_amount.unwrap_or(0));
                line
            })
            .collect();

        (lines, public_expense_total)
    }

    fn line(
        &self,
        entry: &JournalEntry,
        entry_type: EntryType,
        public_expense_amount: Option<i64>,
    ) -> ReportEntry {
        let resolved = self.resolver.resolve(entry.account_code.as_deref());

        ReportEntry {
            data_id: entry.id,
            date: entry.date,
            amount: entry.amount,
            category: resolved.category,
            category_name: resolved.name,
            entry_type,
            purpose: entry.description.clone(),
            non_monetary_basis: entry.non_monetary_basis.clone(),
            note: entry.note.clone(),
            public_expense_amount,
        }
    }
}
