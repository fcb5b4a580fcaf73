//! Report data types.

use chrono::{DateTime, NaiveDate, Utc};
use polimoney_shared::types::{DistrictId, ElectionId, JournalId};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::model::{Organization, Politician};

/// API version tag carried in every report.
pub const API_VERSION: &str = "v1";

/// Activity label of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Political activity; every line of a political-fund statement.
    #[serde(rename = "政治活動")]
    PoliticalActivity,
    /// Election campaign activity.
    #[serde(rename = "選挙運動")]
    ElectionCampaign,
    /// Preparation for candidacy.
    #[serde(rename = "立候補準備")]
    CandidacyPreparation,
}

/// One normalized report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Source journal ID.
    pub data_id: JournalId,
    /// Entry date.
    pub date: NaiveDate,
    /// Amount (yen).
    pub amount: i64,
    /// Derived category.
    pub category: Category,
    /// Category display name.
    pub category_name: String,
    /// Activity label.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Purpose (journal description).
    pub purpose: Option<String>,
    /// Valuation basis for non-monetary contributions.
    pub non_monetary_basis: Option<String>,
    /// Note.
    pub note: Option<String>,
    /// Publicly funded amount; null when not publicly funded.
    pub public_expense_amount: Option<i64>,
}

/// Political-fund statement summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticalFundsSummary {
    /// Total income.
    pub total_income: i64,
    /// Total expense.
    pub total_expense: i64,
    /// Income minus expense.
    pub balance: i64,
    /// Journal count stored on the ledger.
    pub journal_count: i32,
}

/// Election-fund statement summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionFundsSummary {
    /// Total income.
    pub total_income: i64,
    /// Total expense.
    pub total_expense: i64,
    /// Income minus expense.
    pub balance: i64,
    /// Sum of positive public expense amounts.
    pub public_expense_total: i64,
    /// Journal count stored on the ledger.
    pub journal_count: i32,
}

/// Election descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionInfo {
    /// Election ID.
    pub id: ElectionId,
    /// Election name.
    pub name: String,
    /// Election type code.
    #[serde(rename = "type")]
    pub election_type: String,
    /// Election type display name.
    pub type_name: String,
    /// District ID.
    pub district_id: DistrictId,
    /// District name.
    pub district_name: String,
    /// Election day.
    pub election_date: NaiveDate,
}

/// Political-fund statement metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticalFundsMeta {
    /// API version.
    pub api_version: String,
    /// Politician.
    pub politician: Politician,
    /// Political organization.
    pub organization: Organization,
    /// Summary.
    pub summary: PoliticalFundsSummary,
    /// Generation time.
    pub generated_at: DateTime<Utc>,
}

/// Election-fund statement metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionFundsMeta {
    /// API version.
    pub api_version: String,
    /// Politician.
    pub politician: Politician,
    /// Election.
    pub election: ElectionInfo,
    /// Summary.
    pub summary: ElectionFundsSummary,
    /// Generation time.
    pub generated_at: DateTime<Utc>,
}

/// Political-fund statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticalFundsReport {
    /// Metadata.
    pub meta: PoliticalFundsMeta,
    /// Lines, ascending by date.
    pub data: Vec<ReportEntry>,
}

/// Election-fund statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionFundsReport {
    /// Metadata.
    pub meta: ElectionFundsMeta,
    /// Lines, ascending by date.
    pub data: Vec<ReportEntry>,
}
