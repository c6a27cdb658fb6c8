//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs. The composite uniqueness rules that
//! the upsert and reconcile logic rely on are added as explicit unique indexes.

use crate::entities::{
    Assignment, AssignmentColumn, AvailabilityOverride, AvailabilityOverrideColumn, Employee,
    MonthClosure, ShiftType, TimeOff, WeeklyAvailability, WeeklyAvailabilityColumn,
};
use crate::errors::{Error, Result};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema, sea_query::Index,
};
use tracing::{debug, info};

/// Reads the database URL from the `DATABASE_URL` environment variable.
///
/// Unlike most settings there is no fallback: running against an unexpected
/// database file is worse than refusing to start.
pub fn get_database_url() -> Result<String> {
    std::env::var("DATABASE_URL").map_err(|e| Error::Config {
        message: format!("DATABASE_URL is not set: {e}"),
    })
}

/// Establishes a connection to the database named by `DATABASE_URL`.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url()?;
    info!("Connecting to database");
    Database::connect(&database_url).await.map_err(Into::into)
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Creates all tables and unique indexes if they do not exist yet.
///
/// Parents are created before children so foreign keys resolve.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    create_table(db, Employee).await?;
    create_table(db, ShiftType).await?;
    create_table(db, WeeklyAvailability).await?;
    create_table(db, AvailabilityOverride).await?;
    create_table(db, TimeOff).await?;
    create_table(db, Assignment).await?;
    create_table(db, MonthClosure).await?;

    let builder = db.get_database_backend();

    let weekly_unique = Index::create()
        .if_not_exists()
        .name("ux_weekly_availability_employee_weekday_shift")
        .table(WeeklyAvailability)
        .col(WeeklyAvailabilityColumn::EmployeeId)
        .col(WeeklyAvailabilityColumn::Weekday)
        .col(WeeklyAvailabilityColumn::ShiftTypeId)
        .unique()
        .to_owned();

    let override_unique = Index::create()
        .if_not_exists()
        .name("ux_availability_overrides_employee_date_shift")
        .table(AvailabilityOverride)
        .col(AvailabilityOverrideColumn::EmployeeId)
        .col(AvailabilityOverrideColumn::Date)
        .col(AvailabilityOverrideColumn::ShiftTypeId)
        .unique()
        .to_owned();

    let assignment_unique = Index::create()
        .if_not_exists()
        .name("ux_assignments_date_shift_employee")
        .table(Assignment)
        .col(AssignmentColumn::WorkDate)
        .col(AssignmentColumn::ShiftTypeId)
        .col(AssignmentColumn::EmployeeId)
        .unique()
        .to_owned();

    db.execute(builder.build(&weekly_unique)).await?;
    db.execute(builder.build(&override_unique)).await?;
    db.execute(builder.build(&assignment_unique)).await?;

    debug!("Schema is up to date");
    Ok(())
}
