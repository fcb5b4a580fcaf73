//! Report generation service.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::Utc;
use polimoney_shared::types::{ElectionId, LedgerId};
use tracing::{debug, warn};

use super::error::{MissingRecord, ReportError};
use super::normalize::JournalNormalizer;
use super::types::{
    ElectionFundsMeta, ElectionFundsReport, ElectionFundsSummary, ElectionInfo,
    PoliticalFundsMeta, PoliticalFundsReport, PoliticalFundsSummary,
};
use crate::category::{CategoryResolver, resolve_election_type_name};
use crate::loader::ReferenceLoader;
use crate::model::{JournalEntry, Ledger, LedgerScope, ScopeKind};

/// Service for assembling disclosure reports.
///
/// Each build is a linear pipeline; the first failing lookup aborts it and no
/// partial report is returned.
pub struct ReportService<L: ReferenceLoader> {
    loader: Arc<L>,
}

impl<L: ReferenceLoader> Clone for ReportService<L> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
        }
    }
}

impl<L: ReferenceLoader> ReportService<L> {
    /// Create a new report service.
    #[must_use]
    pub fn new(loader: Arc<L>) -> Self {
        Self { loader }
    }

    /// The underlying record source.
    #[must_use]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Loads a ledger and checks it is of the requested scope.
    ///
    /// A missing ledger and a ledger of the other scope both yield
    /// `NotFound(Ledger(scope))`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or a loader error.
    pub async fn load_scoped(
        &self,
        ledger_id: LedgerId,
        scope: ScopeKind,
    ) -> Result<Ledger, ReportError> {
        self.loader
            .find_ledger(ledger_id, scope)
            .await?
            .filter(|ledger| ledger.scope.kind() == scope)
            .ok_or(ReportError::NotFound(MissingRecord::Ledger(scope)))
    }

    /// Builds the political-fund statement of an organization-bound ledger.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a missing ledger, politician, or organization,
    /// or a loader error.
    pub async fn political_funds(
        &self,
        ledger_id: LedgerId,
    ) -> Result<PoliticalFundsReport, ReportError> {
        let result = self.build_political_funds(ledger_id).await;
        log_outcome("political_funds", ledger_id, &result, |r| r.data.len());
        result
    }

    /// Builds the election-fund statement of an election-bound ledger.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a missing ledger, politician, election, or
    /// district, or a loader error.
    pub async fn election_funds(
        &self,
        ledger_id: LedgerId,
    ) -> Result<ElectionFundsReport, ReportError> {
        let result = self.build_election_funds(ledger_id).await;
        log_outcome("election_funds", ledger_id, &result, |r| r.data.len());
        result
    }

    async fn build_political_funds(
        &self,
        ledger_id: LedgerId,
    ) -> Result<PoliticalFundsReport, ReportError> {
        let ledger = self.load_scoped(ledger_id, ScopeKind::Organization).await?;
        let LedgerScope::Organization(organization_id) = ledger.scope else {
            return Err(ReportError::NotFound(MissingRecord::Ledger(
                ScopeKind::Organization,
            )));
        };

        let (politician, organization) = tokio::join!(
            self.loader.find_politician(ledger.politician_id),
            self.loader.find_organization(organization_id),
        );
        let politician = politician?.ok_or(ReportError::NotFound(MissingRecord::Politician))?;
        let organization =
            organization?.ok_or(ReportError::NotFound(MissingRecord::Organization))?;

        let (entries, normalizer) = self.load_journals(ledger.id).await?;
        let data = entries.iter().map(|entry| normalizer.political(entry)).collect();

        let summary = PoliticalFundsSummary::from_ledger(&ledger);
        let meta = PoliticalFundsMeta::new(politician, organization, summary, Utc::now());

        Ok(PoliticalFundsReport { meta, data })
    }

    async fn build_election_funds(
        &self,
        ledger_id: LedgerId,
    ) -> Result<ElectionFundsReport, ReportError> {
        let ledger = self.load_scoped(ledger_id, ScopeKind::Election).await?;
        let LedgerScope::Election(election_id) = ledger.scope else {
            return Err(ReportError::NotFound(MissingRecord::Ledger(ScopeKind::Election)));
        };

        let (politician, election) = tokio::join!(
            self.loader.find_politician(ledger.politician_id),
            self.election_info(election_id),
        );
        let politician = politician?.ok_or(ReportError::NotFound(MissingRecord::Politician))?;
        let election = election?;

        let (entries, normalizer) = self.load_journals(ledger.id).await?;
        let (data, public_expense_total) = normalizer.election_lines(&entries);

        let summary = ElectionFundsSummary::from_ledger(&ledger, public_expense_total);
        let meta = ElectionFundsMeta::new(politician, election, summary, Utc::now());

        Ok(ElectionFundsReport { meta, data })
    }

    /// Election descriptor with district and type display name.
    async fn election_info(&self, election_id: ElectionId) -> Result<ElectionInfo, ReportError> {
        let election = self
            .loader
            .find_election(election_id)
            .await?
            .ok_or(ReportError::NotFound(MissingRecord::Election))?;

        let (district, election_type) = tokio::join!(
            self.loader.find_district(election.district_id),
            self.loader.find_election_type(&election.election_type),
        );
        let district = district?.ok_or(ReportError::NotFound(MissingRecord::District))?;
        let type_name = resolve_election_type_name(
            &election.election_type,
            election_type?
                .and_then(|record| record.name)
                .filter(|name| !name.is_empty())
                .as_deref(),
        );

        Ok(ElectionInfo {
            id: election.id,
            name: election.name,
            election_type: election.election_type,
            type_name,
            district_id: district.id,
            district_name: district.name,
            election_date: election.election_date,
        })
    }

    /// Loads a ledger's journals in date order and a normalizer primed with
    /// their account code catalog names.
    async fn load_journals(
        &self,
        ledger_id: LedgerId,
    ) -> Result<(Vec<JournalEntry>, JournalNormalizer), ReportError> {
        let mut entries = self.loader.list_journals(ledger_id).await?;
        // Stable: rows sharing a date keep load order
        entries.sort_by_key(|entry| entry.date);

        let codes = distinct_account_codes(&entries);
        let catalog = if codes.is_empty() {
            HashMap::new()
        } else {
            self.loader.account_code_names(&codes).await?
        };

        Ok((entries, JournalNormalizer::new(CategoryResolver::new(catalog))))
    }
}

/// Distinct non-empty account codes, sorted.
fn distinct_account_codes(entries: &[JournalEntry]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| entry.account_code.as_deref())
        .filter(|code| !code.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn log_outcome<T>(
    report: &str,
    ledger_id: LedgerId,
    result: &Result<T, ReportError>,
    entries: impl Fn(&T) -> usize,
) {
    match result {
        Ok(value) => debug!(report, %ledger_id, entries = entries(value), "Report built"),
        Err(ReportError::NotFound(missing)) => {
            warn!(report, %ledger_id, %missing, "Report not available");
        }
        Err(ReportError::Loader(_)) => {}
    }
}
