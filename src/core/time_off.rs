//! Time-off business logic - Vacations and absences.
//!
//! A time-off record covers every date from `start_date` to `end_date`
//! inclusive. When it names a shift only that shift is blocked; otherwise the
//! whole day is.

use crate::{
    entities::{TimeOff, time_off},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{Condition, QueryOrder, Set, prelude::*};
use tracing::info;

const DEFAULT_REASON: &str = "Vacation";

/// Records a time-off range for an employee.
///
/// A blank reason is stored as "Vacation". A range whose end precedes its start
/// is rejected, since it could never block anything.
pub async fn add_time_off(
    db: &DatabaseConnection,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    shift_type_id: Option<i64>,
    reason: &str,
) -> Result<time_off::Model> {
    if end_date < start_date {
        return Err(Error::InvalidInput {
            message: format!("Time off ends ({end_date}) before it starts ({start_date})"),
        });
    }

    let reason = match reason.trim() {
        "" => DEFAULT_REASON,
        trimmed => trimmed,
    };

    let model = time_off::ActiveModel {
        employee_id: Set(employee_id),
        start_date: Set(start_date),
        end_date: Set(end_date),
        shift_type_id: Set(shift_type_id),
        reason: Set(reason.to_string()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(
        employee_id,
        time_off_id = created.id,
        "Recorded time off {start_date}..={end_date}"
    );
    Ok(created)
}

/// Retrieves all time-off records of an employee ordered by start date.
pub async fn list_time_off_for_employee(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<Vec<time_off::Model>> {
    TimeOff::find()
        .filter(time_off::Column::EmployeeId.eq(employee_id))
        .order_by_asc(time_off::Column::StartDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns whether any time off blocks the employee on `date` for the shift.
///
/// Blanket records (no shift) block every shift.
pub async fn is_on_time_off<C>(
    db: &C,
    employee_id: i64,
    date: NaiveDate,
    shift_type_id: i64,
) -> Result<bool>
where
    C: ConnectionTrait,
{
    let count = TimeOff::find()
        .filter(time_off::Column::EmployeeId.eq(employee_id))
        .filter(time_off::Column::StartDate.lte(date))
        .filter(time_off::Column::EndDate.gte(date))
        .filter(
            Condition::any()
                .add(time_off::Column::ShiftTypeId.is_null())
                .add(time_off::Column::ShiftTypeId.eq(shift_type_id)),
        )
        .count(db)
        .await?;

    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_blanket_time_off_blocks_every_shift_inclusive() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        let afternoon = create_test_shift(&db, "T", 16, 20).await?;

        add_time_off(&db, ana.id, date(2024, 8, 1), date(2024, 8, 15), None, "").await?;

        assert!(is_on_time_off(&db, ana.id, date(2024, 8, 1), morning.id).await?);
        assert!(is_on_time_off(&db, ana.id, date(2024, 8, 15), afternoon.id).await?);
        assert!(!is_on_time_off(&db, ana.id, date(2024, 7, 31), morning.id).await?);
        assert!(!is_on_time_off(&db, ana.id, date(2024, 8, 16), morning.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_shift_specific_time_off_only_blocks_that_shift() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        let afternoon = create_test_shift(&db, "T", 16, 20).await?;

        add_time_off(
            &db,
            ana.id,
            date(2024, 8, 5),
            date(2024, 8, 5),
            Some(afternoon.id),
            "Doctor",
        )
        .await?;

        assert!(is_on_time_off(&db, ana.id, date(2024, 8, 5), afternoon.id).await?);
        assert!(!is_on_time_off(&db, ana.id, date(2024, 8, 5), morning.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_time_off_is_per_employee() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        let lucia = create_test_employee(&db, "Lucia").await?;

        add_time_off(&db, ana.id, date(2024, 8, 1), date(2024, 8, 2), None, "").await?;

        assert!(!is_on_time_off(&db, lucia.id, date(2024, 8, 1), morning.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_reversed_range_rejected() -> Result<()> {
        let (db, ana, _) = setup_with_employee_and_shift().await?;

        let result = add_time_off(&db, ana.id, date(2024, 8, 10), date(2024, 8, 1), None, "").await;
        assert!(matches!(result, Err(Error::InvalidInput { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_reason_defaults_and_listing_order() -> Result<()> {
        let (db, ana, _) = setup_with_employee_and_shift().await?;

        add_time_off(&db, ana.id, date(2024, 9, 1), date(2024, 9, 2), None, "Course").await?;
        add_time_off(&db, ana.id, date(2024, 8, 1), date(2024, 8, 2), None, "  ").await?;

        let records = list_time_off_for_employee(&db, ana.id).await?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start_date, date(2024, 8, 1));
        assert_eq!(records[0].reason, "Vacation");
        assert_eq!(records[1].reason, "Course");

        Ok(())
    }
}
