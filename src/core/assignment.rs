//! Assignment business logic - Keeps the stored assignments of a slot in line
//! with the set of employees a manager wants on it.
//!
//! Rows are never deleted. An employee taken off a slot has their row flipped
//! to inactive, and putting them back flips the same row to active again, so the
//! table remembers everyone who was ever proposed for a slot.

use crate::{
    core::{availability::iso_weekday, shift},
    entities::{Assignment, Employee, ShiftType, assignment},
    errors::{Error, Result},
};
use chrono::{Days, NaiveDate, NaiveTime, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::{BTreeSet, HashMap};
use tracing::info;

/// What a reconcile call changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Employees newly inserted or flipped back to active
    pub activated: Vec<i64>,
    /// Employees whose row was flipped to inactive
    pub deactivated: Vec<i64>,
    /// Desired employees that were already active
    pub unchanged: Vec<i64>,
}

impl ReconcileOutcome {
    /// True when the call did not write anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.activated.is_empty() && self.deactivated.is_empty()
    }
}

/// Reconciles the assignments of the slot (`work_date`, `shift_type_id`) so
/// that exactly the `desired` employees are active.
///
/// Runs in a single database transaction. Duplicate ids are collapsed and the
/// order of `desired` does not matter; calling this twice with the same set
/// leaves the same state.
pub async fn reconcile_slot(
    db: &DatabaseConnection,
    work_date: NaiveDate,
    shift_type_id: i64,
    desired: &[i64],
) -> Result<ReconcileOutcome> {
    let desired: BTreeSet<i64> = desired.iter().copied().collect();

    let txn = db.begin().await?;

    if shift::get_shift_type_by_id(&txn, shift_type_id).await?.is_none() {
        return Err(Error::ShiftNotFound {
            code: shift_type_id.to_string(),
        });
    }

    let existing: HashMap<i64, assignment::Model> = Assignment::find()
        .filter(assignment::Column::WorkDate.eq(work_date))
        .filter(assignment::Column::ShiftTypeId.eq(shift_type_id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|row| (row.employee_id, row))
        .collect();

    let now = Utc::now();
    let mut outcome = ReconcileOutcome::default();

    for &employee_id in &desired {
        match existing.get(&employee_id) {
            Some(row) if row.active => outcome.unchanged.push(employee_id),
            Some(row) => {
                let mut active_model: assignment::ActiveModel = row.clone().into();
                active_model.active = Set(true);
                active_model.updated_at = Set(now);
                active_model.update(&txn).await?;
                outcome.activated.push(employee_id);
            }
            None => {
                assignment::ActiveModel {
                    work_date: Set(work_date),
                    weekday: Set(iso_weekday(work_date)),
                    shift_type_id: Set(shift_type_id),
                    employee_id: Set(employee_id),
                    active: Set(true),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                outcome.activated.push(employee_id);
            }
        }
    }

    let mut dropped: Vec<&assignment::Model> = existing
        .values()
        .filter(|row| row.active && !desired.contains(&row.employee_id))
        .collect();
    dropped.sort_by_key(|row| row.employee_id);

    for row in dropped {
        let mut active_model: assignment::ActiveModel = row.clone().into();
        active_model.active = Set(false);
        active_model.updated_at = Set(now);
        active_model.update(&txn).await?;
        outcome.deactivated.push(row.employee_id);
    }

    txn.commit().await?;

    info!(
        shift_type_id,
        activated = outcome.activated.len(),
        deactivated = outcome.deactivated.len(),
        "Reconciled assignments for {work_date}"
    );
    Ok(outcome)
}

/// Active assignments of one slot ordered by employee id.
pub async fn active_assignments_for_slot<C>(
    db: &C,
    work_date: NaiveDate,
    shift_type_id: i64,
) -> Result<Vec<assignment::Model>>
where
    C: ConnectionTrait,
{
    Assignment::find()
        .filter(assignment::Column::WorkDate.eq(work_date))
        .filter(assignment::Column::ShiftTypeId.eq(shift_type_id))
        .filter(assignment::Column::Active.eq(true))
        .order_by_asc(assignment::Column::EmployeeId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Every assignment row of one slot, including inactive history.
pub async fn all_assignments_for_slot(
    db: &DatabaseConnection,
    work_date: NaiveDate,
    shift_type_id: i64,
) -> Result<Vec<assignment::Model>> {
    Assignment::find()
        .filter(assignment::Column::WorkDate.eq(work_date))
        .filter(assignment::Column::ShiftTypeId.eq(shift_type_id))
        .order_by_asc(assignment::Column::EmployeeId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// One line of the weekly schedule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// Day of the slot
    pub work_date: NaiveDate,
    /// Name of the shift
    pub shift_name: String,
    /// Start of the shift, used for ordering
    pub shift_start: NaiveTime,
    /// Name of the assigned employee
    pub employee_name: String,
}

/// Active assignments of the seven days starting at `week_start`, ordered by
/// date, shift start time and employee name.
pub async fn week_schedule(
    db: &DatabaseConnection,
    week_start: NaiveDate,
) -> Result<Vec<ScheduleRow>> {
    let week_end = week_start
        .checked_add_days(Days::new(7))
        .ok_or_else(|| Error::InvalidInput {
            message: format!("Week starting {week_start} is out of range"),
        })?;

    let rows = Assignment::find()
        .filter(assignment::Column::Active.eq(true))
        .filter(assignment::Column::WorkDate.gte(week_start))
        .filter(assignment::Column::WorkDate.lt(week_end))
        .all(db)
        .await?;

    let shifts: HashMap<i64, _> = ShiftType::find()
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();
    let employees: HashMap<i64, _> = Employee::find()
        .all(db)
        .await?
        .into_iter()
        .map(|e| (e.id, e))
        .collect();

    let mut schedule: Vec<ScheduleRow> = rows
        .into_iter()
        .filter_map(|row| {
            let shift = shifts.get(&row.shift_type_id)?;
            let employee = employees.get(&row.employee_id)?;
            Some(ScheduleRow {
                work_date: row.work_date,
                shift_name: shift.name.clone(),
                shift_start: shift.start_time,
                employee_name: employee.full_name.clone(),
            })
        })
        .collect();

    schedule.sort_by(|a, b| {
        (a.work_date, a.shift_start, &a.employee_name).cmp(&(
            b.work_date,
            b.shift_start,
            &b.employee_name,
        ))
    });
    Ok(schedule)
}
