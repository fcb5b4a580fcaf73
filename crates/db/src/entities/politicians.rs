//! `SeaORM` Entity for politicians table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "politicians")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub name_kana: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::public_ledgers::Entity")]
    PublicLedgers,
}

impl Related<super::public_ledgers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicLedgers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
