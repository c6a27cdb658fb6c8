//! Month closure entity - Marks a month as finalised.
//! Closure is advisory; nothing blocks edits to a closed month.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Month closure database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "month_closures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Always the first day of the month
    #[sea_orm(unique)]
    pub month_start: Date,
    pub closed_by: String,
    pub closed_at: DateTimeUtc,
}

/// `MonthClosure` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
