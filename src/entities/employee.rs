//! Employee entity - A member of the pharmacy staff.
//!
//! Employees are never hard-deleted; `active = false` hides them from
//! selection lists while keeping their assignment history intact.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Unique identifier for the employee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, trimmed on insert
    pub full_name: String,
    /// `"staff"` or `"manager"`
    pub role: String,
    /// Soft delete flag - inactive employees are kept for history
    pub active: bool,
}

/// Defines relationships between Employee and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One employee has many assignments
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,
    /// One employee has many time-off ranges
    #[sea_orm(has_many = "super::time_off::Entity")]
    TimeOff,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::time_off::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeOff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
