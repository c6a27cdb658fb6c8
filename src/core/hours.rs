//! Monthly hour totals.
//!
//! Hours are the sum over active assignments of each shift's
//! `end_time - start_time`. Shifts that cross midnight are not supported and
//! come out negative.

use crate::{
    entities::{Assignment, Employee, ShiftType, assignment},
    errors::{Error, Result},
};
use chrono::{Months, NaiveDate, NaiveTime};
use sea_orm::prelude::*;
use std::collections::HashMap;

/// Totals of one employee over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeHours {
    /// Employee the totals belong to
    pub employee_id: i64,
    /// Employee name at query time
    pub full_name: String,
    /// Number of active assignments in the range
    pub shift_count: usize,
    /// Sum of the assigned shifts' durations in hours
    pub total_hours: f64,
}

/// Length of a shift in hours.
#[must_use]
pub fn shift_duration_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let minutes = (end - start).num_minutes();
    // Minutes within a day fit in an f64 exactly
    #[allow(clippy::cast_precision_loss)]
    let hours = minutes as f64 / 60.0;
    hours
}

/// Half-open range `[first day of month, first day of next month)`.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| Error::InvalidInput {
        message: format!("Invalid month {year}-{month:02}"),
    })?;
    let end = start
        .checked_add_months(Months::new(1))
        .ok_or_else(|| Error::InvalidInput {
            message: format!("Month {year}-{month:02} is out of range"),
        })?;
    Ok((start, end))
}

/// Per-employee totals over the half-open range `[start, end)`, ordered by name.
///
/// Only employees with at least one active assignment in the range are listed.
/// An empty or reversed range yields no rows.
pub async fn hours_between(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<EmployeeHours>> {
    if end <= start {
        return Ok(Vec::new());
    }

    let assignments = Assignment::find()
        .filter(assignment::Column::Active.eq(true))
        .filter(assignment::Column::WorkDate.gte(start))
        .filter(assignment::Column::WorkDate.lt(end))
        .all(db)
        .await?;

    let durations: HashMap<i64, f64> = ShiftType::find()
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, shift_duration_hours(s.start_time, s.end_time)))
        .collect();

    let mut totals: HashMap<i64, (usize, f64)> = HashMap::new();
    for row in &assignments {
        let duration = durations.get(&row.shift_type_id).copied().unwrap_or(0.0);
        let entry = totals.entry(row.employee_id).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += duration;
    }

    let names: HashMap<i64, String> = Employee::find()
        .all(db)
        .await?
        .into_iter()
        .map(|e| (e.id, e.full_name))
        .collect();

    let mut result: Vec<EmployeeHours> = totals
        .into_iter()
        .map(|(employee_id, (shift_count, total_hours))| EmployeeHours {
            employee_id,
            full_name: names
                .get(&employee_id)
                .cloned()
                .unwrap_or_else(|| format!("#{employee_id}")),
            shift_count,
            total_hours,
        })
        .collect();

    result.sort_by(|a, b| {
        a.full_name
            .cmp(&b.full_name)
            .then(a.employee_id.cmp(&b.employee_id))
    });
    Ok(result)
}

/// Totals for one calendar month.
pub async fn monthly_hours(
    db: &DatabaseConnection,
    year: i32,
    month: u32,
) -> Result<Vec<EmployeeHours>> {
    let (start, end) = month_range(year, month)?;
    hours_between(db, start, end).await
}

/// Formats monthly totals as a fixed-width text table.
#[must_use]
pub fn format_hours_summary(month_start: NaiveDate, rows: &[EmployeeHours]) -> String {
    use std::fmt::Write;

    let mut summary = format!("Hours - {}\n", month_start.format("%B %Y"));

    if rows.is_empty() {
        summary.push_str("  No active assignments.\n");
        return summary;
    }

    let mut total = 0.0;
    for row in rows {
        // write! into a String cannot fail
        let _ = writeln!(
            summary,
            "  {:<24} {:>3} shifts {:>7.2} h",
            row.full_name, row.shift_count, row.total_hours
        );
        total += row.total_hours;
    }
    let _ = writeln!(summary, "  {:<24} {:>18.2} h", "Total", total);

    summary
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::assignment::reconcile_slot;
    use crate::test_utils::*;

    #[test]
    fn test_shift_duration_hours() {
        assert_eq!(shift_duration_hours(time(9, 0), time(13, 0)), 4.0);
        assert_eq!(shift_duration_hours(time(16, 30), time(20, 45)), 4.25);
        // Crossing midnight is unsupported and comes out negative
        assert_eq!(shift_duration_hours(time(22, 0), time(6, 0)), -16.0);
    }

    #[test]
    fn test_month_range() -> Result<()> {
        assert_eq!(month_range(2024, 2)?, (date(2024, 2, 1), date(2024, 3, 1)));
        assert_eq!(month_range(2024, 12)?, (date(2024, 12, 1), date(2025, 1, 1)));
        assert!(matches!(month_range(2024, 13), Err(Error::InvalidInput { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_one_assignment_counts_shift_length() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        reconcile_slot(&db, date(2024, 6, 3), morning.id, &[ana.id]).await?;

        let rows = monthly_hours(&db, 2024, 6).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].shift_count, 1);
        assert_eq!(rows[0].total_hours, 4.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_two_assignments_sum() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;

        reconcile_slot(&db, date(2024, 6, 3), morning.id, &[ana.id]).await?;
        reconcile_slot(&db, date(2024, 6, 4), morning.id, &[ana.id]).await?;

        let rows = monthly_hours(&db, 2024, 6).await?;
        assert_eq!(rows[0].shift_count, 2);
        assert_eq!(rows[0].total_hours, 8.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_inactive_and_out_of_range_excluded() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        let lucia = create_test_employee(&db, "Lucia").await?;

        reconcile_slot(&db, date(2024, 6, 3), morning.id, &[ana.id, lucia.id]).await?;
        reconcile_slot(&db, date(2024, 6, 3), morning.id, &[lucia.id]).await?;
        // First day of the next month is outside the half-open range
        reconcile_slot(&db, date(2024, 7, 1), morning.id, &[lucia.id]).await?;
        reconcile_slot(&db, date(2024, 5, 31), morning.id, &[lucia.id]).await?;

        let rows = monthly_hours(&db, 2024, 6).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].full_name, "Lucia");
        assert_eq!(rows[0].shift_count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_reversed_range_is_empty() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        reconcile_slot(&db, date(2024, 6, 3), morning.id, &[ana.id]).await?;

        assert!(hours_between(&db, date(2024, 7, 1), date(2024, 6, 1)).await?.is_empty());
        assert!(hours_between(&db, date(2024, 6, 3), date(2024, 6, 3)).await?.is_empty());

        Ok(())
    }

    #[test]
    fn test_format_hours_summary() {
        let rows = vec![
            EmployeeHours {
                employee_id: 1,
                full_name: "Ana".to_string(),
                shift_count: 2,
                total_hours: 8.0,
            },
            EmployeeHours {
                employee_id: 2,
                full_name: "Lucia".to_string(),
                shift_count: 1,
                total_hours: 4.5,
            },
        ];

        let summary = format_hours_summary(date(2024, 6, 1), &rows);
        assert!(summary.contains("June 2024"));
        assert!(summary.contains("Ana"));
        assert!(summary.contains("8.00 h"));
        assert!(summary.contains("12.50 h"));

        let empty = format_hours_summary(date(2024, 6, 1), &[]);
        assert!(empty.contains("No active assignments"));
    }
}
