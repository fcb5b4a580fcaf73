//! `SeaORM` Entity for elections table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "elections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub election_type: String,
    pub district_id: Uuid,
    pub election_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::districts::Entity",
        from = "Column::DistrictId",
        to = "super::districts::Column::Id"
    )]
    Districts,
    #[sea_orm(
        belongs_to = "super::election_types::Entity",
        from = "Column::ElectionType",
        to = "super::election_types::Column::Code"
    )]
    ElectionTypes,
}

impl Related<super::districts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Districts.def()
    }
}

impl Related<super::election_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ElectionTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
