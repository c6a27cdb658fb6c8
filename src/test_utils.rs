//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        employee::{self, EmployeeRole},
        shift::{self, NewShiftType},
    },
    entities,
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Shorthand for a time of day in tests.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Creates an active staff employee.
pub async fn create_test_employee(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::employee::Model> {
    employee::create_employee(db, name, EmployeeRole::Staff, true)
        .await?
        .ok_or_else(|| Error::InvalidInput {
            message: format!("test employee '{name}' was not created"),
        })
}

/// Creates an active shift type named "Shift {code}" running between two
/// whole hours.
///
/// # Defaults
/// * `required_staff`: 2
/// * `fairness_weight`: 1
pub async fn create_test_shift(
    db: &DatabaseConnection,
    code: &str,
    start_hour: u32,
    end_hour: u32,
) -> Result<entities::shift_type::Model> {
    let input = NewShiftType {
        code: code.to_string(),
        name: format!("Shift {code}"),
        start_time: time(start_hour, 0),
        end_time: time(end_hour, 0),
        required_staff: 2,
        fairness_weight: 1,
        active: true,
    };
    shift::save_shift_type(db, input)
        .await?
        .ok_or_else(|| Error::InvalidInput {
            message: format!("test shift '{code}' was not created"),
        })
}

/// Sets up a database with employee "Ana" and a 09:00-13:00 shift "M".
/// Returns (db, employee, shift) for the common scenario.
pub async fn setup_with_employee_and_shift() -> Result<(
    DatabaseConnection,
    entities::employee::Model,
    entities::shift_type::Model,
)> {
    let db = setup_test_db().await?;
    let ana = create_test_employee(&db, "Ana").await?;
    let morning = create_test_shift(&db, "M", 9, 13).await?;
    Ok((db, ana, morning))
}
