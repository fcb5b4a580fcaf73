//! `SeaORM` Entity for public_ledgers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "public_ledgers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub politician_id: Uuid,
    pub organization_id: Option<Uuid>,
    pub election_id: Option<Uuid>,
    pub fiscal_year: i32,
    pub total_income: i64,
    pub total_expense: i64,
    pub journal_count: i32,
    pub ledger_source_id: Uuid,
    pub last_updated_at: DateTimeWithTimeZone,
    pub first_synced_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub is_test: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::public_journals::Entity")]
    PublicJournals,
    #[sea_orm(
        belongs_to = "super::politicians::Entity",
        from = "Column::PoliticianId",
        to = "super::politicians::Column::Id"
    )]
    Politicians,
}

impl Related<super::public_journals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicJournals.def()
    }
}

impl Related<super::politicians::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Politicians.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
