//! In-memory record source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use polimoney_shared::types::{DistrictId, ElectionId, LedgerId, OrganizationId, PoliticianId};

use super::{LoaderError, ReferenceLoader};
use crate::model::{
    District, Election, ElectionTypeRecord, JournalEntry, Ledger, Organization, Politician,
    ScopeKind,
};

/// Record source backed by in-process maps.
///
/// Journals are returned ordered by date, keeping insertion order among equal
/// dates. Setting [`InMemoryLoader::unavailable`] makes every lookup fail.
#[derive(Debug, Default)]
pub struct InMemoryLoader {
    ledgers: HashMap<LedgerId, Ledger>,
    politicians: HashMap<PoliticianId, Politician>,
    organizations: HashMap<OrganizationId, Organization>,
    elections: HashMap<ElectionId, Election>,
    districts: HashMap<DistrictId, District>,
    election_types: HashMap<String, ElectionTypeRecord>,
    journals: Vec<JournalEntry>,
    account_codes: HashMap<String, String>,
    failure: Option<String>,
    account_code_lookups: AtomicUsize,
}

impl InMemoryLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader whose every lookup fails with [`LoaderError::Unavailable`].
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Adds a ledger.
    #[must_use]
    pub fn with_ledger(mut self, ledger: Ledger) -> Self {
        self.ledgers.insert(ledger.id, ledger);
        self
    }

    /// Adds a politician.
    #[must_use]
    pub fn with_politician(mut self, politician: Politician) -> Self {
        self.politicians.insert(politician.id, politician);
        self
    }

    /// Adds an organization.
    #[must_use]
    pub fn with_organization(mut self, organization: Organization) -> Self {
        self.organizations.insert(organization.id, organization);
        self
    }

    /// Adds an election.
    #[must_use]
    pub fn with_election(mut self, election: Election) -> Self {
        self.elections.insert(election.id, election);
        self
    }

    /// Adds a district.
    #[must_use]
    pub fn with_district(mut self, district: District) -> Self {
        self.districts.insert(district.id, district);
        self
    }

    /// Adds an election type catalog row.
    #[must_use]
    pub fn with_election_type(mut self, record: ElectionTypeRecord) -> Self {
        self.election_types.insert(record.code.clone(), record);
        self
    }

    /// Adds a journal entry.
    #[must_use]
    pub fn with_journal(mut self, entry: JournalEntry) -> Self {
        self.journals.push(entry);
        self
    }

    /// Adds an account code catalog row.
    #[must_use]
    pub fn with_account_code(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.account_codes.insert(code.into(), name.into());
        self
    }

    /// How many times [`ReferenceLoader::account_code_names`] was called.
    #[must_use]
    pub fn account_code_lookups(&self) -> usize {
        self.account_code_lookups.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<(), LoaderError> {
        match &self.failure {
            Some(reason) => Err(LoaderError::unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl ReferenceLoader for InMemoryLoader {
    async fn find_ledger(
        &self,
        id: LedgerId,
        scope: ScopeKind,
    ) -> Result<Option<Ledger>, LoaderError> {
        self.check()?;
        Ok(self
            .ledgers
            .get(&id)
            .filter(|ledger| ledger.scope.kind() == scope)
            .cloned())
    }

    async fn find_politician(&self, id: PoliticianId) -> Result<Option<Politician>, LoaderError> {
        self.check()?;
        Ok(self.politicians.get(&id).cloned())
    }

    async fn find_organization(
        &self,
        id: OrganizationId,
    ) -> Result<Option<Organization>, LoaderError> {
        self.check()?;
        Ok(self.organizations.get(&id).cloned())
    }

    async fn find_election(&self, id: ElectionId) -> Result<Option<Election>, LoaderError> {
        self.check()?;
        Ok(self.elections.get(&id).cloned())
    }

    async fn find_district(&self, id: DistrictId) -> Result<Option<District>, LoaderError> {
        self.check()?;
        Ok(self.districts.get(&id).cloned())
    }

    async fn find_election_type(
        &self,
        code: &str,
    ) -> Result<Option<ElectionTypeRecord>, LoaderError> {
        self.check()?;
        Ok(self.election_types.get(code).cloned())
    }

    async fn list_journals(&self, ledger_id: LedgerId) -> Result<Vec<JournalEntry>, LoaderError> {
        self.check()?;
        let mut entries: Vec<JournalEntry> = self
            .journals
            .iter()
            .filter(|entry| entry.ledger_id == ledger_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.date);
        Ok(entries)
    }

    async fn account_code_names(
        &self,
        codes: &[String],
    ) -> Result<HashMap<String, String>, LoaderError> {
        self.account_code_lookups.fetch_add(1, Ordering::Relaxed);
        self.check()?;
        Ok(codes
            .iter()
            .filter_map(|code| {
                self.account_codes
                    .get(code)
                    .map(|name| (code.clone(), name.clone()))
            })
            .collect())
    }
}
