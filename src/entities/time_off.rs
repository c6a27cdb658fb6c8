//! Time-off entity - Vacations and absences.
//!
//! Both `start_date` and `end_date` are inclusive. A `None` shift blocks
//! every shift in the range.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Time-off database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_time_off")]
pub struct Model {
    /// Unique identifier for the time-off record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Employee who is away
    pub employee_id: i64,
    /// First day of the absence
    pub start_date: Date,
    /// Last day of the absence
    pub end_date: Date,
    /// Only this shift is blocked when set; all shifts otherwise
    pub shift_type_id: Option<i64>,
    /// Free text, e.g. "Vacation"
    pub reason: String,
}

/// Defines relationships between `TimeOff` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each time-off record belongs to one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
