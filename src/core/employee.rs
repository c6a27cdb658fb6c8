//! Employee business logic - Handles staff registration and soft deletion.
//!
//! Employees are never removed from the database. Deactivating one keeps every
//! assignment they ever had while hiding them from selection lists.

use crate::{
    entities::{Employee, employee},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use std::{fmt, str::FromStr};
use tracing::{debug, info};

/// Role of an employee within the pharmacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeRole {
    /// Regular counter staff
    Staff,
    /// Shift manager
    Manager,
}

impl EmployeeRole {
    /// Value stored in the `role` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "manager" => Ok(Self::Manager),
            other => Err(Error::InvalidInput {
                message: format!("Unknown role '{other}', expected 'staff' or 'manager'"),
            }),
        }
    }
}

/// Registers a new employee.
///
/// The name is trimmed. A blank name is not an error: the submit is ignored and
/// `Ok(None)` is returned, mirroring a form that does nothing when left empty.
pub async fn create_employee(
    db: &DatabaseConnection,
    full_name: &str,
    role: EmployeeRole,
    active: bool,
) -> Result<Option<employee::Model>> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        debug!("Ignoring employee submit with blank name");
        return Ok(None);
    }

    let model = employee::ActiveModel {
        full_name: Set(full_name.to_string()),
        role: Set(role.as_str().to_string()),
        active: Set(active),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(employee_id = created.id, "Created employee '{}'", created.full_name);
    Ok(Some(created))
}

/// Retrieves every employee, active or not, ordered by name.
pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find()
        .order_by_asc(employee::Column::FullName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves active employees ordered by name, as offered in selection lists.
pub async fn list_active_employees<C>(db: &C) -> Result<Vec<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find()
        .filter(employee::Column::Active.eq(true))
        .order_by_asc(employee::Column::FullName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by primary key.
pub async fn get_employee_by_id<C>(db: &C, employee_id: i64) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find_by_id(employee_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an active employee by exact (trimmed) name.
///
/// Names are not unique; the first match in name order wins, which is what a
/// selection box listing names would pick as well.
pub async fn get_active_employee_by_name(
    db: &DatabaseConnection,
    full_name: &str,
) -> Result<Option<employee::Model>> {
    Employee::find()
        .filter(employee::Column::FullName.eq(full_name.trim()))
        .filter(employee::Column::Active.eq(true))
        .order_by_asc(employee::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by exact (trimmed) name regardless of the active flag.
pub async fn get_employee_by_name(
    db: &DatabaseConnection,
    full_name: &str,
) -> Result<Option<employee::Model>> {
    Employee::find()
        .filter(employee::Column::FullName.eq(full_name.trim()))
        .order_by_asc(employee::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Sets the soft delete flag of an employee.
pub async fn set_employee_active(
    db: &DatabaseConnection,
    employee_id: i64,
    active: bool,
) -> Result<employee::Model> {
    let existing = Employee::find_by_id(employee_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::EmployeeNotFound {
            name: employee_id.to_string(),
        })?;

    let mut active_model: employee::ActiveModel = existing.into();
    active_model.active = Set(active);
    let updated = active_model.update(db).await?;

    info!(employee_id, active, "Updated employee active flag");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_role_round_trip_through_column_value() {
        assert_eq!("staff".parse::<EmployeeRole>().unwrap(), EmployeeRole::Staff);
        assert_eq!(" Manager ".parse::<EmployeeRole>().unwrap(), EmployeeRole::Manager);
        assert!(matches!(
            "owner".parse::<EmployeeRole>(),
            Err(Error::InvalidInput { .. })
        ));
        assert_eq!(EmployeeRole::Manager.to_string(), "manager");
    }

    #[tokio::test]
    async fn test_create_employee_trims_name() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_employee(&db, "  Ana Torres ", EmployeeRole::Staff, true)
            .await?
            .unwrap();

        assert_eq!(created.full_name, "Ana Torres");
        assert_eq!(created.role, "staff");
        assert!(created.active);

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_name_is_silent_noop() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_employee(&db, "   ", EmployeeRole::Manager, true).await?;
        assert!(result.is_none());

        let count = Employee::find().count(&db).await?;
        assert_eq!(count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_employees_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_employee(&db, "Lucia").await?;
        create_test_employee(&db, "Ana").await?;
        create_test_employee(&db, "Marta").await?;

        let names: Vec<String> = list_employees(&db)
            .await?
            .into_iter()
            .map(|e| e.full_name)
            .collect();
        assert_eq!(names, vec!["Ana", "Lucia", "Marta"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_hides_from_active_list() -> Result<()> {
        let db = setup_test_db().await?;

        let ana = create_test_employee(&db, "Ana").await?;
        create_test_employee(&db, "Lucia").await?;

        let updated = set_employee_active(&db, ana.id, false).await?;
        assert!(!updated.active);

        let active = list_active_employees(&db).await?;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].full_name, "Lucia");

        // Soft deleted, not removed
        assert_eq!(list_employees(&db).await?.len(), 2);
        assert!(get_active_employee_by_name(&db, "Ana").await?.is_none());
        assert!(get_employee_by_name(&db, "Ana").await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_set_active_unknown_employee() -> Result<()> {
        let db = setup_test_db().await?;

        let result = set_employee_active(&db, 999, false).await;
        assert!(matches!(result, Err(Error::EmployeeNotFound { .. })));

        Ok(())
    }
}
