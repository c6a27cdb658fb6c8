//! Shift type entity - A recurring daily time window (e.g. morning, afternoon).
//!
//! `required_staff` is only used for coverage display and `fairness_weight`
//! is stored as inert metadata.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shift type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shift_types")]
pub struct Model {
    /// Unique identifier for the shift type
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short unique code (e.g. `"M"`, `"T"`)
    #[sea_orm(unique)]
    pub code: String,
    /// Human-readable name (e.g. "Morning")
    pub name: String,
    /// Time the shift starts
    pub start_time: Time,
    /// Time the shift ends; shifts crossing midnight are not supported
    pub end_time: Time,
    /// Number of people the shift should have
    pub required_staff: i32,
    /// Stored but not consumed by any logic
    pub fairness_weight: i32,
    /// Inactive shift types are hidden from selection lists
    pub active: bool,
}

/// Defines relationships between `ShiftType` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One shift type has many assignments
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
