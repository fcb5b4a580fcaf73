//! Journal entry types.

use chrono::{DateTime, NaiveDate, Utc};
use polimoney_shared::types::{JournalId, LedgerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Election-only activity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Campaign-period activity.
    #[serde(rename = "campaign")]
    Campaign,
    /// Activity before candidacy.
    #[serde(rename = "pre-campaign")]
    PreCampaign,
}

impl Classification {
    /// Parses a stored classification tag. Unrecognized tags yield `None`.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "campaign" => Some(Self::Campaign),
            "pre-campaign" => Some(Self::PreCampaign),
            _ => None,
        }
    }
}

/// One financial movement within a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Journal ID.
    pub id: JournalId,
    /// Owning ledger.
    pub ledger_id: LedgerId,
    /// Source-side journal ID.
    pub journal_source_id: Uuid,
    /// Entry date.
    pub date: NaiveDate,
    /// Free-text description (purpose).
    pub description: Option<String>,
    /// Amount in yen.
    pub amount: i64,
    /// Counterparty name (anonymized).
    pub contact_name: Option<String>,
    /// Counterparty type.
    pub contact_type: Option<String>,
    /// Account code.
    pub account_code: Option<String>,
    /// Raw classification tag (`campaign` / `pre-campaign`), election ledgers only.
    pub classification: Option<String>,
    /// Valuation basis for non-monetary contributions.
    pub non_monetary_basis: Option<String>,
    /// Note.
    pub note: Option<String>,
    /// Publicly funded portion of the amount. Zero means not publicly funded.
    pub public_expense_amount: Option<i64>,
    /// Tamper-detection hash.
    pub content_hash: String,
    /// Sync time.
    pub synced_at: DateTime<Utc>,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Test data flag.
    pub is_test: bool,
}

impl JournalEntry {
    /// Parsed classification tag.
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.classification.as_deref().and_then(Classification::parse)
    }
}
