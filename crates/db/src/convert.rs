//! Row to domain model conversions.

use chrono::Utc;
use polimoney_core::model::{
    District, Election, ElectionTypeRecord, JournalEntry, Ledger, LedgerScope, Organization,
    Politician, ScopeKind,
};
use polimoney_shared::types::{
    DistrictId, ElectionId, JournalId, LedgerId, OrganizationId, PoliticianId,
};

use crate::entities::{
    districts, election_types, elections, organizations, politicians, public_journals,
    public_ledgers,
};

/// Converts a ledger row read for `scope`.
///
/// Returns `None` when the row's companion column for `scope` is empty.
pub fn ledger(model: public_ledgers::Model, scope: ScopeKind) -> Option<Ledger> {
    let scope = match scope {
        ScopeKind::Organization => {
            LedgerScope::Organization(OrganizationId::from_uuid(model.organization_id?))
        }
        ScopeKind::Election => LedgerScope::Election(ElectionId::from_uuid(model.election_id?)),
    };

    Some(Ledger {
        id: LedgerId::from_uuid(model.id),
        politician_id: PoliticianId::from_uuid(model.politician_id),
        scope,
        fiscal_year: model.fiscal_year,
        total_income: model.total_income,
        total_expense: model.total_expense,
        journal_count: model.journal_count,
        last_updated_at: model.last_updated_at.with_timezone(&Utc),
        first_synced_at: model.first_synced_at.with_timezone(&Utc),
        created_at: model.created_at.with_timezone(&Utc),
        is_test: model.is_test,
    })
}

/// Converts a journal row.
pub fn journal(model: public_journals::Model) -> JournalEntry {
    JournalEntry {
        id: JournalId::from_uuid(model.id),
        ledger_id: LedgerId::from_uuid(model.ledger_id),
        journal_source_id: model.journal_source_id,
        date: model.date,
        description: model.description,
        amount: model.amount,
        contact_name: model.contact_name,
        contact_type: model.contact_type,
        account_code: model.account_code,
        classification: model.classification,
        non_monetary_basis: model.non_monetary_basis,
        note: model.note,
        public_expense_amount: model.public_expense_amount,
        content_hash: model.content_hash,
        synced_at: model.synced_at.with_timezone(&Utc),
        created_at: model.created_at.with_timezone(&Utc),
        is_test: model.is_test,
    }
}

impl From<politicians::Model> for Politician {
    fn from(model: politicians::Model) -> Self {
        Self {
            id: PoliticianId::from_uuid(model.id),
            name: model.name,
            name_kana: model.name_kana,
        }
    }
}

impl From<organizations::Model> for Organization {
    fn from(model: organizations::Model) -> Self {
        Self {
            id: OrganizationId::from_uuid(model.id),
            name: model.name,
            kind: model.kind,
        }
    }
}

impl From<elections::Model> for Election {
    fn from(model: elections::Model) -> Self {
        Self {
            id: ElectionId::from_uuid(model.id),
            name: model.name,
            election_type: model.election_type,
            district_id: DistrictId::from_uuid(model.district_id),
            election_date: model.election_date,
        }
    }
}

impl From<districts::Model> for District {
    fn from(model: districts::Model) -> Self {
        Self {
            id: DistrictId::from_uuid(model.id),
            name: model.name,
        }
    }
}

impl From<election_types::Model> for ElectionTypeRecord {
    fn from(model: election_types::Model) -> Self {
        Self {
            code: model.code,
            name: model.name,
        }
    }
}
