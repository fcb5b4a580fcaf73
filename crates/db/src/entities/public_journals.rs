//! `SeaORM` Entity for public_journals table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "public_journals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ledger_id: Uuid,
    pub journal_source_id: Uuid,
    pub date: Date,
    pub description: Option<String>,
    pub amount: i64,
    pub contact_name: Option<String>,
    pub contact_type: Option<String>,
    pub account_code: Option<String>,
    pub classification: Option<String>,
    pub non_monetary_basis: Option<String>,
    pub note: Option<String>,
    pub public_expense_amount: Option<i64>,
    pub content_hash: String,
    pub synced_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub is_test: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::public_ledgers::Entity",
        from = "Column::LedgerId",
        to = "super::public_ledgers::Column::Id",
        on_delete = "Cascade"
    )]
    PublicLedgers,
}

impl Related<super::public_ledgers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicLedgers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
