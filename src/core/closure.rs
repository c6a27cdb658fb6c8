//! Month closure business logic.
//!
//! Closing a month records who finalised it. The record is informational:
//! assignments in a closed month can still be changed.

use crate::{
    entities::{MonthClosure, month_closure},
    errors::Result,
};
use chrono::{Datelike, Days, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// First day of the month `date` falls in.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Closes the month containing `date`.
///
/// Returns the closure record and whether this call created it. Closing an
/// already closed month changes nothing and returns the existing record.
pub async fn close_month(
    db: &DatabaseConnection,
    date: NaiveDate,
    closed_by: &str,
) -> Result<(month_closure::Model, bool)> {
    let month_start = first_of_month(date);

    let txn = db.begin().await?;

    if let Some(existing) = MonthClosure::find()
        .filter(month_closure::Column::MonthStart.eq(month_start))
        .one(&txn)
        .await?
    {
        return Ok((existing, false));
    }

    let created = month_closure::ActiveModel {
        month_start: Set(month_start),
        closed_by: Set(closed_by.trim().to_string()),
        closed_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!("Month {} closed by {}", month_start.format("%Y-%m"), created.closed_by);
    Ok((created, true))
}

/// Whether the month containing `date` has been closed.
pub async fn is_month_closed(db: &DatabaseConnection, date: NaiveDate) -> Result<bool> {
    let count = MonthClosure::find()
        .filter(month_closure::Column::MonthStart.eq(first_of_month(date)))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// All closures, most recent month first.
pub async fn list_closures(db: &DatabaseConnection) -> Result<Vec<month_closure::Model>> {
    MonthClosure::find()
        .order_by_desc(month_closure::Column::MonthStart)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_first_of_month() {
        assert_eq!(first_of_month(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(first_of_month(date(2024, 6, 1)), date(2024, 6, 1));
    }

    #[tokio::test]
    async fn test_close_month_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        let (first, created) = close_month(&db, date(2024, 6, 17), "maria").await?;
        assert!(created);
        assert_eq!(first.month_start, date(2024, 6, 1));

        let (second, created) = close_month(&db, date(2024, 6, 30), "someone else").await?;
        assert!(!created);
        assert_eq!(second.id, first.id);
        assert_eq!(second.closed_by, "maria");

        assert_eq!(MonthClosure::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_is_month_closed_and_listing() -> Result<()> {
        let db = setup_test_db().await?;

        close_month(&db, date(2024, 5, 2), "maria").await?;
        close_month(&db, date(2024, 6, 2), "maria").await?;

        assert!(is_month_closed(&db, date(2024, 5, 31)).await?);
        assert!(!is_month_closed(&db, date(2024, 7, 1)).await?);

        let months: Vec<NaiveDate> = list_closures(&db)
            .await?
            .into_iter()
            .map(|c| c.month_start)
            .collect();
        assert_eq!(months, vec![date(2024, 6, 1), date(2024, 5, 1)]);

        Ok(())
    }
}
