//! Shift type business logic - Handles defining the daily time windows staff work in.
//!
//! Shift types are keyed by their short code: saving a code that already exists
//! updates that shift in place instead of creating a duplicate.

use crate::{
    config::shifts::ShiftConfig,
    entities::{ShiftType, shift_type},
    errors::{Error, Result},
};
use chrono::NaiveTime;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// Input for creating or updating a shift type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShiftType {
    /// Unique short code (e.g. "M")
    pub code: String,
    /// Display name
    pub name: String,
    /// When the shift starts
    pub start_time: NaiveTime,
    /// When the shift ends
    pub end_time: NaiveTime,
    /// People needed on the shift (informational)
    pub required_staff: i32,
    /// Stored as-is
    pub fairness_weight: i32,
    /// Whether the shift is offered in selection lists
    pub active: bool,
}

impl NewShiftType {
    fn try_from_config(config: &ShiftConfig) -> Result<Self> {
        let (start_time, end_time) = config.times()?;
        Ok(Self {
            code: config.code.clone(),
            name: config.name.clone(),
            start_time,
            end_time,
            required_staff: config.required_staff,
            fairness_weight: config.fairness_weight,
            active: config.active,
        })
    }
}

/// Creates a shift type, or updates every column of the one with the same code.
///
/// Code and name are trimmed; if either is blank nothing is saved and `Ok(None)`
/// is returned.
pub async fn save_shift_type(
    db: &DatabaseConnection,
    input: NewShiftType,
) -> Result<Option<shift_type::Model>> {
    let code = input.code.trim().to_string();
    let name = input.name.trim().to_string();
    if code.is_empty() || name.is_empty() {
        debug!("Ignoring shift submit with blank code or name");
        return Ok(None);
    }

    let txn = db.begin().await?;

    let existing = ShiftType::find()
        .filter(shift_type::Column::Code.eq(code.as_str()))
        .one(&txn)
        .await?;

    let saved = if let Some(shift) = existing {
        let mut active_model: shift_type::ActiveModel = shift.into();
        active_model.name = Set(name);
        active_model.start_time = Set(input.start_time);
        active_model.end_time = Set(input.end_time);
        active_model.required_staff = Set(input.required_staff);
        active_model.fairness_weight = Set(input.fairness_weight);
        active_model.active = Set(input.active);
        active_model.update(&txn).await?
    } else {
        let new_shift = shift_type::ActiveModel {
            code: Set(code),
            name: Set(name),
            start_time: Set(input.start_time),
            end_time: Set(input.end_time),
            required_staff: Set(input.required_staff),
            fairness_weight: Set(input.fairness_weight),
            active: Set(input.active),
            ..Default::default()
        };
        new_shift.insert(&txn).await?
    };

    txn.commit().await?;

    info!(shift_type_id = saved.id, "Saved shift type '{}'", saved.code);
    Ok(Some(saved))
}

/// Inserts the configured shift types whose code is not in the database yet.
///
/// Existing rows are left untouched so edits made after the first start survive
/// restarts. Returns how many shift types were inserted.
pub async fn seed_shift_types(db: &DatabaseConnection, shifts: &[ShiftConfig]) -> Result<usize> {
    let mut inserted = 0;

    for config in shifts {
        if get_shift_type_by_code(db, &config.code).await?.is_some() {
            debug!("Shift '{}' already exists, not seeding", config.code);
            continue;
        }
        let input = NewShiftType::try_from_config(config)?;
        if save_shift_type(db, input).await?.is_some() {
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// Retrieves every shift type ordered by start time.
pub async fn list_shift_types<C>(db: &C) -> Result<Vec<shift_type::Model>>
where
    C: ConnectionTrait,
{
    ShiftType::find()
        .order_by_asc(shift_type::Column::StartTime)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves active shift types ordered by start time.
pub async fn list_active_shift_types<C>(db: &C) -> Result<Vec<shift_type::Model>>
where
    C: ConnectionTrait,
{
    ShiftType::find()
        .filter(shift_type::Column::Active.eq(true))
        .order_by_asc(shift_type::Column::StartTime)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a shift type by its (trimmed) code.
pub async fn get_shift_type_by_code<C>(db: &C, code: &str) -> Result<Option<shift_type::Model>>
where
    C: ConnectionTrait,
{
    ShiftType::find()
        .filter(shift_type::Column::Code.eq(code.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a shift type by primary key.
pub async fn get_shift_type_by_id<C>(db: &C, shift_type_id: i64) -> Result<Option<shift_type::Model>>
where
    C: ConnectionTrait,
{
    ShiftType::find_by_id(shift_type_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Like [`get_shift_type_by_code`] but a missing shift is an error.
pub async fn require_shift_type_by_code<C>(db: &C, code: &str) -> Result<shift_type::Model>
where
    C: ConnectionTrait,
{
    get_shift_type_by_code(db, code)
        .await?
        .ok_or_else(|| Error::ShiftNotFound {
            code: code.trim().to_string(),
        })
}
