//! Slot detail view.
//!
//! A [`Slot`] is the (date, shift) a manager has selected in the calendar. It is
//! always passed in by the caller; nothing here remembers a "current" slot.

use crate::{
    core::{
        assignment,
        availability::{self, Availability},
        employee, shift,
    },
    entities::{employee as employee_entity, shift_type},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

/// One (date, shift type) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Calendar day
    pub date: NaiveDate,
    /// Shift type primary key
    pub shift_type_id: i64,
}

/// Staffing level of a slot compared with what the shift asks for.
///
/// Purely informational; nothing prevents under- or over-staffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    /// `required_staff` of the shift
    pub required: i32,
    /// Active assignments on the slot
    pub assigned: usize,
}

impl Coverage {
    fn assigned_i64(self) -> i64 {
        i64::try_from(self.assigned).unwrap_or(i64::MAX)
    }

    /// Fewer people assigned than required.
    #[must_use]
    pub fn is_understaffed(self) -> bool {
        self.assigned_i64() < i64::from(self.required)
    }

    /// More people assigned than required.
    #[must_use]
    pub fn is_overstaffed(self) -> bool {
        self.assigned_i64() > i64::from(self.required)
    }
}

/// An employee as seen from a particular slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The employee
    pub employee: employee_entity::Model,
    /// Effective availability for the slot
    pub availability: Availability,
    /// Whether the employee is actively assigned to the slot
    pub assigned: bool,
}

/// Everything needed to render the detail panel of one slot.
#[derive(Debug, Clone)]
pub struct SlotView {
    /// The slot being viewed
    pub slot: Slot,
    /// Shift type of the slot
    pub shift: shift_type::Model,
    /// Active employees, plus anyone still assigned after being deactivated
    pub candidates: Vec<Candidate>,
    /// Assigned versus required
    pub coverage: Coverage,
}

impl SlotView {
    /// Candidates currently assigned to the slot.
    pub fn assigned(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(|c| c.assigned)
    }
}

/// Builds the detail view of a slot.
///
/// An unknown shift is reported as [`Error::ShiftNotFound`] so the caller can
/// stop rendering the page.
pub async fn slot_view(db: &DatabaseConnection, slot: Slot) -> Result<SlotView> {
    let shift = shift::get_shift_type_by_id(db, slot.shift_type_id)
        .await?
        .ok_or_else(|| Error::ShiftNotFound {
            code: slot.shift_type_id.to_string(),
        })?;

    let active_rows =
        assignment::active_assignments_for_slot(db, slot.date, slot.shift_type_id).await?;
    let assigned_ids: HashSet<i64> = active_rows.iter().map(|row| row.employee_id).collect();

    let mut employees = employee::list_active_employees(db).await?;
    for row in &active_rows {
        if !employees.iter().any(|e| e.id == row.employee_id) {
            if let Some(inactive) = employee::get_employee_by_id(db, row.employee_id).await? {
                employees.push(inactive);
            }
        }
    }

    let mut candidates = Vec::with_capacity(employees.len());
    for employee in employees {
        let availability =
            availability::effective_availability(db, employee.id, slot.date, slot.shift_type_id)
                .await?;
        candidates.push(Candidate {
            assigned: assigned_ids.contains(&employee.id),
            employee,
            availability,
        });
    }

    let coverage = Coverage {
        required: shift.required_staff,
        assigned: active_rows.len(),
    };

    Ok(SlotView {
        slot,
        shift,
        candidates,
        coverage,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{assignment::reconcile_slot, time_off};
    use crate::test_utils::*;

    #[test]
    fn test_coverage_flags() {
        let under = Coverage {
            required: 2,
            assigned: 1,
        };
        assert!(under.is_understaffed());
        assert!(!under.is_overstaffed());

        let exact = Coverage {
            required: 2,
            assigned: 2,
        };
        assert!(!exact.is_understaffed());
        assert!(!exact.is_overstaffed());

        let over = Coverage {
            required: 1,
            assigned: 3,
        };
        assert!(over.is_overstaffed());
    }

    #[tokio::test]
    async fn test_slot_view_lists_availability_and_assignment() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        let lucia = create_test_employee(&db, "Lucia").await?;
        let day = date(2024, 6, 3);

        time_off::add_time_off(&db, lucia.id, day, day, None, "").await?;
        reconcile_slot(&db, day, morning.id, &[ana.id]).await?;

        let view = slot_view(
            &db,
            Slot {
                date: day,
                shift_type_id: morning.id,
            },
        )
        .await?;

        assert_eq!(view.shift.code, "M");
        assert_eq!(view.candidates.len(), 2);
        assert_eq!(view.coverage.assigned, 1);
        assert!(view.coverage.is_understaffed());

        let ana_row = view.candidates.iter().find(|c| c.employee.id == ana.id).unwrap();
        assert!(ana_row.assigned);
        assert!(ana_row.availability.available);

        let lucia_row = view.candidates.iter().find(|c| c.employee.id == lucia.id).unwrap();
        assert!(!lucia_row.assigned);
        assert!(lucia_row.availability.days_off);

        assert_eq!(view.assigned().count(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_slot_view_keeps_assigned_inactive_employee() -> Result<()> {
        let (db, ana, morning) = setup_with_employee_and_shift().await?;
        let day = date(2024, 6, 3);

        reconcile_slot(&db, day, morning.id, &[ana.id]).await?;
        employee::set_employee_active(&db, ana.id, false).await?;

        let view = slot_view(
            &db,
            Slot {
                date: day,
                shift_type_id: morning.id,
            },
        )
        .await?;
        assert_eq!(view.assigned().count(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_slot_view_unknown_shift() -> Result<()> {
        let db = setup_test_db().await?;

        let result = slot_view(
            &db,
            Slot {
                date: date(2024, 6, 3),
                shift_type_id: 7,
            },
        )
        .await;
        assert!(matches!(result, Err(Error::ShiftNotFound { .. })));

        Ok(())
    }
}
