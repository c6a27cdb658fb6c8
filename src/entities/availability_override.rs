//! Availability override entity - Date-specific exception to the weekly pattern.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Availability override database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "availability_overrides")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub employee_id: i64,
    /// Exact calendar date the override applies to
    pub date: Date,
    pub shift_type_id: i64,
    /// Wins over the weekly pattern for this date and shift
    pub available: bool,
    pub reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
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
