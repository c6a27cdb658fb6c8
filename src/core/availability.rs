//! Availability business logic - Decides whether an employee may work a given
//! date and shift.
//!
//! Three sources feed the decision, in this order of precedence:
//!
//! 1. time off covering the date (blanket or for this shift) - always unavailable
//! 2. an override for exactly this employee, date and shift
//! 3. the weekly pattern row for the ISO weekday of the date
//!
//! With none of them present the employee is available.

use crate::{
    core::{employee, shift, time_off},
    entities::{
        AvailabilityOverride, WeeklyAvailability, availability_override, weekly_availability,
    },
    errors::{Error, Result},
};
use chrono::{Datelike, NaiveDate};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::OnConflict};
use tracing::{debug, info};

/// Outcome of resolving availability for one (employee, date, shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    /// Whether the employee may work the slot
    pub available: bool,
    /// Set when time off is the reason the employee is unavailable
    pub days_off: bool,
}

/// Applies the precedence rule to already-fetched inputs.
///
/// `on_time_off` beats everything, then the override, then the weekly value,
/// then the default of available.
#[must_use]
pub const fn resolve(
    on_time_off: bool,
    override_value: Option<bool>,
    weekly_value: Option<bool>,
) -> Availability {
    if on_time_off {
        return Availability {
            available: false,
            days_off: true,
        };
    }

    let available = match (override_value, weekly_value) {
        (Some(value), _) | (None, Some(value)) => value,
        (None, None) => true,
    };

    Availability {
        available,
        days_off: false,
    }
}

/// ISO weekday of a date, 1 = Monday .. 7 = Sunday.
#[must_use]
pub fn iso_weekday(date: NaiveDate) -> i32 {
    // number_from_monday is always 1..=7
    #[allow(clippy::cast_possible_wrap)]
    let weekday = date.weekday().number_from_monday() as i32;
    weekday
}

/// English name of an ISO weekday number.
#[must_use]
pub const fn weekday_name(weekday: i32) -> &'static str {
    match weekday {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        7 => "Sunday",
        _ => "?",
    }
}

fn validate_weekday(weekday: i32) -> Result<()> {
    if (1..=7).contains(&weekday) {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            message: format!("Weekday must be between 1 (Monday) and 7 (Sunday), got {weekday}"),
        })
    }
}

/// Resolves effective availability from the database.
pub async fn effective_availability<C>(
    db: &C,
    employee_id: i64,
    date: NaiveDate,
    shift_type_id: i64,
) -> Result<Availability>
where
    C: ConnectionTrait,
{
    if time_off::is_on_time_off(db, employee_id, date, shift_type_id).await? {
        return Ok(resolve(true, None, None));
    }

    let override_value = AvailabilityOverride::find()
        .filter(availability_override::Column::EmployeeId.eq(employee_id))
        .filter(availability_override::Column::Date.eq(date))
        .filter(availability_override::Column::ShiftTypeId.eq(shift_type_id))
        .one(db)
        .await?
        .map(|row| row.available);

    // Skip the weekly lookup when the override already decides
    let weekly_value = if override_value.is_some() {
        None
    } else {
        WeeklyAvailability::find()
            .filter(weekly_availability::Column::EmployeeId.eq(employee_id))
            .filter(weekly_availability::Column::Weekday.eq(iso_weekday(date)))
            .filter(weekly_availability::Column::ShiftTypeId.eq(shift_type_id))
            .one(db)
            .await?
            .map(|row| row.available)
    };

    Ok(resolve(false, override_value, weekly_value))
}

/// Makes sure the employee has one weekly row per weekday and active shift.
///
/// Missing rows are inserted as available; rows that already exist keep their
/// value. Safe to call any number of times. Returns the number of rows inserted.
pub async fn ensure_default_weekly_rows(db: &DatabaseConnection, employee_id: i64) -> Result<u64> {
    if employee::get_employee_by_id(db, employee_id).await?.is_none() {
        return Err(Error::EmployeeNotFound {
            name: employee_id.to_string(),
        });
    }

    let shifts = shift::list_active_shift_types(db).await?;
    if shifts.is_empty() {
        return Ok(0);
    }

    let rows = (1..=7).flat_map(|weekday| {
        shifts.iter().map(move |shift| weekly_availability::ActiveModel {
            employee_id: Set(employee_id),
            weekday: Set(weekday),
            shift_type_id: Set(shift.id),
            available: Set(true),
            ..Default::default()
        })
    });

    let inserted = WeeklyAvailability::insert_many(rows)
        .on_conflict(
            OnConflict::columns([
                weekly_availability::Column::EmployeeId,
                weekly_availability::Column::Weekday,
                weekly_availability::Column::ShiftTypeId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    if inserted > 0 {
        info!(employee_id, inserted, "Created default weekly availability rows");
    }
    Ok(inserted)
}

/// Sets the weekly availability of an employee for one weekday and shift.
pub async fn set_weekly_availability(
    db: &DatabaseConnection,
    employee_id: i64,
    weekday: i32,
    shift_type_id: i64,
    available: bool,
) -> Result<weekly_availability::Model> {
    validate_weekday(weekday)?;

    let txn = db.begin().await?;

    let existing = WeeklyAvailability::find()
        .filter(weekly_availability::Column::EmployeeId.eq(employee_id))
        .filter(weekly_availability::Column::Weekday.eq(weekday))
        .filter(weekly_availability::Column::ShiftTypeId.eq(shift_type_id))
        .one(&txn)
        .await?;

    let saved = if let Some(row) = existing {
        let mut active_model: weekly_availability::ActiveModel = row.into();
        active_model.available = Set(available);
        active_model.update(&txn).await?
    } else {
        weekly_availability::ActiveModel {
            employee_id: Set(employee_id),
            weekday: Set(weekday),
            shift_type_id: Set(shift_type_id),
            available: Set(available),
            ..Default::default()
        }
        .insert(&txn)
        .await?
    };

    txn.commit().await?;

    debug!(employee_id, weekday, shift_type_id, available, "Saved weekly availability");
    Ok(saved)
}

/// Retrieves the stored weekly pattern of an employee, ordered by weekday then shift.
pub async fn get_weekly_pattern(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<Vec<weekly_availability::Model>> {
    WeeklyAvailability::find()
        .filter(weekly_availability::Column::EmployeeId.eq(employee_id))
        .order_by_asc(weekly_availability::Column::Weekday)
        .order_by_asc(weekly_availability::Column::ShiftTypeId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates or replaces the override for one employee, date and shift.
pub async fn set_override(
    db: &DatabaseConnection,
    employee_id: i64,
    date: NaiveDate,
    shift_type_id: i64,
    available: bool,
    reason: Option<String>,
) -> Result<availability_override::Model> {
    let reason = reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    let txn = db.begin().await?;

    let existing = AvailabilityOverride::find()
        .filter(availability_override::Column::EmployeeId.eq(employee_id))
        .filter(availability_override::Column::Date.eq(date))
        .filter(availability_override::Column::ShiftTypeId.eq(shift_type_id))
        .one(&txn)
        .await?;

    let saved = if let Some(row) = existing {
        let mut active_model: availability_override::ActiveModel = row.into();
        active_model.available = Set(available);
        active_model.reason = Set(reason);
        active_model.update(&txn).await?
    } else {
        availability_override::ActiveModel {
            employee_id: Set(employee_id),
            date: Set(date),
            shift_type_id: Set(shift_type_id),
            available: Set(available),
            reason: Set(reason),
            ..Default::default()
        }
        .insert(&txn)
        .await?
    };

    txn.commit().await?;

    info!(employee_id, shift_type_id, available, "Saved availability override for {date}");
    Ok(saved)
}

/// Removes the override for one employee, date and shift so the weekly
/// pattern applies again. Returns whether an override existed.
pub async fn clear_override(
    db: &DatabaseConnection,
    employee_id: i64,
    date: NaiveDate,
    shift_type_id: i64,
) -> Result<bool> {
    let result = AvailabilityOverride::delete_many()
        .filter(availability_override::Column::EmployeeId.eq(employee_id))
        .filter(availability_override::Column::Date.eq(date))
        .filter(availability_override::Column::ShiftTypeId.eq(shift_type_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_resolve_precedence() {
        // Default
        assert_eq!(
            resolve(false, None, None),
            Availability {
                available: true,
                days_off: false
            }
        );
        // Weekly value
        assert!(!resolve(false, None, Some(false)).available);
        // Override beats weekly in both directions
        assert!(resolve(false, Some(true), Some(false)).available);
        assert!(!resolve(false, Some(false), Some(true)).available);
        // Time off beats everything
        let blocked = resolve(true, Some(true), Some(true));
        assert!(!blocked.available);
        assert!(blocked.days_off);
    }

    #[test]
    fn test_iso_weekday() {
        // 2024-06-03 is a Monday, 2024-06-09 a Sunday
        assert_eq!(iso_weekday(date(2024, 6, 3)), 1);
        assert_eq!(iso_weekday(date(2024, 6, 9)), 7);
        assert_eq!(weekday_name(iso_weekday(date(2024, 6, 5))), "Wednesday");
    }

    #[tokio::test]
    async fn test_no_rows_means_available() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        let result = effective_availability(&db, ana.id, date(2024, 6, 3), morning.id).await?;
        assert!(result.available);
        assert!(!result.days_off);

        Ok(())
    }

    #[tokio::test]
    async fn test_weekly_row_applies_to_matching_weekday_only() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        set_weekly_availability(&db, ana.id, 1, morning.id, false).await?;

        let monday = effective_availability(&db, ana.id, date(2024, 6, 3), morning.id).await?;
        assert!(!monday.available);
        assert!(!monday.days_off);

        let tuesday = effective_availability(&db, ana.id, date(2024, 6, 4), morning.id).await?;
        assert!(tuesday.available);

        Ok(())
    }

    #[tokio::test]
    async fn test_override_beats_weekly_pattern() -> Result<()> {
        // Ana is not available on Monday mornings, but 2024-06-03 (a Monday)
        // has an override saying she is.
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        set_weekly_availability(&db, ana.id, 1, morning.id, false).await?;
        set_override(&db, ana.id, date(2024, 6, 3), morning.id, true, None).await?;

        let result = effective_availability(&db, ana.id, date(2024, 6, 3), morning.id).await?;
        assert!(result.available);

        // The following Monday still follows the weekly pattern
        let next = effective_availability(&db, ana.id, date(2024, 6, 10), morning.id).await?;
        assert!(!next.available);

        Ok(())
    }

    #[tokio::test]
    async fn test_time_off_beats_override() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        set_override(&db, ana.id, date(2024, 6, 3), morning.id, true, None).await?;
        time_off::add_time_off(&db, ana.id, date(2024, 6, 1), date(2024, 6, 7), None, "").await?;

        let result = effective_availability(&db, ana.id, date(2024, 6, 3), morning.id).await?;
        assert!(!result.available);
        assert!(result.days_off);

        Ok(())
    }

    #[tokio::test]
    async fn test_time_off_for_other_shift_does_not_block() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        let afternoon = create_test_shift(&db, "T", 16, 20).await?;

        time_off::add_time_off(
            &db,
            ana.id,
            date(2024, 6, 3),
            date(2024, 6, 3),
            Some(afternoon.id),
            "",
        )
        .await?;

        let result = effective_availability(&db, ana.id, date(2024, 6, 3), morning.id).await?;
        assert!(result.available);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_override_replaces_and_clear_restores_weekly() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        set_weekly_availability(&db, ana.id, 1, morning.id, false).await?;
        set_override(&db, ana.id, date(2024, 6, 3), morning.id, true, Some("Swap".into())).await?;
        let replaced =
            set_override(&db, ana.id, date(2024, 6, 3), morning.id, false, Some("  ".into()))
                .await?;
        assert!(!replaced.available);
        assert!(replaced.reason.is_none());
        assert_eq!(AvailabilityOverride::find().count(&db).await?, 1);

        assert!(clear_override(&db, ana.id, date(2024, 6, 3), morning.id).await?);
        assert!(!clear_override(&db, ana.id, date(2024, 6, 3), morning.id).await?);

        let result = effective_availability(&db, ana.id, date(2024, 6, 3), morning.id).await?;
        assert!(!result.available);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_weekly_availability_upserts() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        set_weekly_availability(&db, ana.id, 3, morning.id, false).await?;
        set_weekly_availability(&db, ana.id, 3, morning.id, true).await?;

        let pattern = get_weekly_pattern(&db, ana.id).await?;
        assert_eq!(pattern.len(), 1);
        assert!(pattern[0].available);

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_weekday_rejected() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        let result = set_weekly_availability(&db, ana.id, 8, morning.id, true).await;
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
        let result = set_weekly_availability(&db, ana.id, 0, morning.id, true).await;
        assert!(matches!(result, Err(Error::InvalidInput { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_default_rows_is_idempotent() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        create_test_shift(&db, "T", 16, 20).await?;

        // An explicit value set before initialisation must survive it
        set_weekly_availability(&db, ana.id, 2, morning.id, false).await?;

        let first = ensure_default_weekly_rows(&db, ana.id).await?;
        assert_eq!(first, 13);
        let second = ensure_default_weekly_rows(&db, ana.id).await?;
        assert_eq!(second, 0);

        let pattern = get_weekly_pattern(&db, ana.id).await?;
        assert_eq!(pattern.len(), 14);
        let tuesday_morning = pattern
            .iter()
            .find(|row| row.weekday == 2 && row.shift_type_id == morning.id)
            .unwrap();
        assert!(!tuesday_morning.available);

        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_default_rows_unknown_employee() -> Result<()> {
        let db = setup_test_db().await?;

        let result = ensure_default_weekly_rows(&db, 42).await;
        assert!(matches!(result, Err(Error::EmployeeNotFound { .. })));

        Ok(())
    }
}
