//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod assignment;
pub mod availability_override;
pub mod employee;
pub mod month_closure;
pub mod shift_type;
pub mod time_off;
pub mod weekly_availability;

// Re-export specific types to avoid conflicts
pub use assignment::{Column as AssignmentColumn, Entity as Assignment, Model as AssignmentModel};
pub use availability_override::{
    Column as AvailabilityOverrideColumn, Entity as AvailabilityOverride,
    Model as AvailabilityOverrideModel,
};
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use month_closure::{
    Column as MonthClosureColumn, Entity as MonthClosure, Model as MonthClosureModel,
};
pub use shift_type::{Column as ShiftTypeColumn, Entity as ShiftType, Model as ShiftTypeModel};
pub use time_off::{Column as TimeOffColumn, Entity as TimeOff, Model as TimeOffModel};
pub use weekly_availability::{
    Column as WeeklyAvailabilityColumn, Entity as WeeklyAvailability,
    Model as WeeklyAvailabilityModel,
};
