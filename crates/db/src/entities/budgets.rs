//! `SeaORM` Entity for the budgets table.
//!
//! Exactly one row per `(location_id, category_id)` pair, enforced by a
//! unique index. A row carries either the twelve monthly slots
//! (`monthly_amounts` jsonb) or, for rows written before the monthly
//! breakdown existed, the legacy scalar `amount` column. The legacy column
//! is cleared on first write and never set again.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub location_id: Uuid,
    pub category_id: Uuid,
    /// Legacy single-scalar amount; NULL once migrated.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))", nullable)]
    pub amount: Option<Decimal>,
    /// Twelve monthly amounts as a JSON array; NULL only on legacy rows.
    pub monthly_amounts: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::LocationId",
        to = "super::locations::Column::Id"
    )]
    Locations,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Categories,
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
