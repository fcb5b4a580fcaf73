//! Read-only repository over the public disclosure tables.

use std::collections::HashMap;

use polimoney_core::loader::{LoaderError, ReferenceLoader};
use polimoney_core::model::{
    District, Election, ElectionTypeRecord, JournalEntry, Ledger, Organization, Politician,
    ScopeKind,
};
use polimoney_shared::types::{DistrictId, ElectionId, LedgerId, OrganizationId, PoliticianId};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::convert;
use crate::entities::{
    account_codes, districts, election_types, elections, organizations, politicians,
    public_journals, public_ledgers,
};

/// Repository serving report assembly from PostgreSQL.
#[derive(Debug)]
pub struct PublicRecordRepository {
    db: DatabaseConnection,
}

impl PublicRecordRepository {
    /// Creates a new public record repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn query_error(context: &'static str) -> impl FnOnce(DbErr) -> LoaderError {
    move |err| LoaderError::query(format!("{context}: {err}"))
}

/// Column that must be set for a ledger of `scope`.
const fn scope_column(scope: ScopeKind) -> public_ledgers::Column {
    match scope {
        ScopeKind::Organization => public_ledgers::Column::OrganizationId,
        ScopeKind::Election => public_ledgers::Column::ElectionId,
    }
}

impl ReferenceLoader for PublicRecordRepository {
    async fn find_ledger(
        &self,
        id: LedgerId,
        scope: ScopeKind,
    ) -> Result<Option<Ledger>, LoaderError> {
        let model = public_ledgers::Entity::find_by_id(id.into_inner())
            .filter(scope_column(scope).is_not_null())
            .one(&self.db)
            .await
            .map_err(query_error("public_ledgers"))?;

        Ok(model.and_then(|model| convert::ledger(model, scope)))
    }

    async fn find_politician(&self, id: PoliticianId) -> Result<Option<Politician>, LoaderError> {
        let model = politicians::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(query_error("politicians"))?;

        Ok(model.map(Politician::from))
    }

    async fn find_organization(
        &self,
        id: OrganizationId,
    ) -> Result<Option<Organization>, LoaderError> {
        let model = organizations::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(query_error("organizations"))?;

        Ok(model.map(Organization::from))
    }

    async fn find_election(&self, id: ElectionId) -> Result<Option<Election>, LoaderError> {
        let model = elections::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(query_error("elections"))?;

        Ok(model.map(Election::from))
    }

    async fn find_district(&self, id: DistrictId) -> Result<Option<District>, LoaderError> {
        let model = districts::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(query_error("districts"))?;

        Ok(model.map(District::from))
    }

    async fn find_election_type(
        &self,
        code: &str,
    ) -> Result<Option<ElectionTypeRecord>, LoaderError> {
        let model = election_types::Entity::find_by_id(code.to_string())
            .one(&self.db)
            .await
            .map_err(query_error("election_types"))?;

        Ok(model.map(ElectionTypeRecord::from))
    }

    async fn list_journals(&self, ledger_id: LedgerId) -> Result<Vec<JournalEntry>, LoaderError> {
        let models = public_journals::Entity::find()
            .filter(public_journals::Column::LedgerId.eq(ledger_id.into_inner()))
            .order_by_asc(public_journals::Column::Date)
            .order_by_asc(public_journals::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error("public_journals"))?;

        Ok(models.into_iter().map(convert::journal).collect())
    }

    async fn account_code_names(
        &self,
        codes: &[String],
    ) -> Result<HashMap<String, String>, LoaderError> {
        if codes.is_empty() {
            return Ok(HashMap::new());
        }

        let models = account_codes::Entity::find()
            .filter(account_codes::Column::Code.is_in(codes.iter().map(String::as_str)))
            .all(&self.db)
            .await
            .map_err(query_error("account_codes"))?;

        Ok(models
            .into_iter()
            .map(|model| (model.code, model.name))
            .collect())
    }
}
