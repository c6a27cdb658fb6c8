//! Assignment entity - An employee placed on a (date, shift) slot.
//!
//! Rows are never deleted. Removing someone from a slot flips `active` to
//! false, so the table doubles as the history of who was ever proposed.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Assignment database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    /// Unique identifier for the assignment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar day of the slot
    pub work_date: Date,
    /// ISO weekday of `work_date`, denormalised for weekly views
    pub weekday: i32,
    /// Shift of the slot
    pub shift_type_id: i64,
    /// Employee placed on the slot
    pub employee_id: i64,
    /// Whether the assignment is currently in force
    pub active: bool,
    /// Last time `active` was written
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Assignment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each assignment belongs to one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
    /// Each assignment belongs to one shift type
    #[sea_orm(
        belongs_to = "super::shift_type::Entity",
        from = "Column::ShiftTypeId",
        to = "super::shift_type::Column::Id"
    )]
    ShiftType,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::shift_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShiftType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
