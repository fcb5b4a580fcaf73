//! Read-only record source.
//!
//! Report assembly depends only on [`ReferenceLoader`]; the db crate provides
//! the PostgreSQL implementation and [`InMemoryLoader`] serves tests and
//! local fixtures.

mod error;
mod memory;

pub use error::LoaderError;
pub use memory::InMemoryLoader;

use std::collections::HashMap;
use std::future::Future;

use polimoney_shared::types::{DistrictId, ElectionId, LedgerId, OrganizationId, PoliticianId};

use crate::model::{
    District, Election, ElectionTypeRecord, JournalEntry, Ledger, Organization, Politician,
    ScopeKind,
};

/// Record source for report assembly.
///
/// Every lookup yields a record, an explicit absence (`None` / empty), or a
/// [`LoaderError`] when the source itself cannot be reached.
pub trait ReferenceLoader: Send + Sync {
    /// Finds a ledger by ID whose companion column for `scope` is set.
    ///
    /// A ledger of the other scope is reported as absent.
    fn find_ledger(
        &self,
        id: LedgerId,
        scope: ScopeKind,
    ) -> impl Future<Output = Result<Option<Ledger>, LoaderError>> + Send;

    /// Finds a politician by ID.
    fn find_politician(
        &self,
        id: PoliticianId,
    ) -> impl Future<Output = Result<Option<Politician>, LoaderError>> + Send;

    /// Finds an organization by ID.
    fn find_organization(
        &self,
        id: OrganizationId,
    ) -> impl Future<Output = Result<Option<Organization>, LoaderError>> + Send;

    /// Finds an election by ID.
    fn find_election(
        &self,
        id: ElectionId,
    ) -> impl Future<Output = Result<Option<Election>, LoaderError>> + Send;

    /// Finds a district by ID.
    fn find_district(
        &self,
        id: DistrictId,
    ) -> impl Future<Output = Result<Option<District>, LoaderError>> + Send;

    /// Finds an election type catalog row by code.
    fn find_election_type(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Option<ElectionTypeRecord>, LoaderError>> + Send;

    /// Lists the journal entries of a ledger, ordered by date ascending.
    fn list_journals(
        &self,
        ledger_id: LedgerId,
    ) -> impl Future<Output = Result<Vec<JournalEntry>, LoaderError>> + Send;

    /// Loads catalog display names for the given account codes in one call.
    ///
    /// Codes without a catalog row are simply missing from the result.
    fn account_code_names(
        &self,
        codes: &[String],
    ) -> impl Future<Output = Result<HashMap<String, String>, LoaderError>> + Send;
}
