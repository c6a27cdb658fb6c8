//! Time-off Discord commands - vacations and absences.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, handlers::autocomplete, lookup},
        core::{shift, time_off},
        errors::{Error, Result},
    };
    use std::{collections::HashMap, fmt::Write};

    /// Parent command for recording time off.
    #[poise::command(slash_command, subcommands("timeoff_add", "timeoff_list"))]
    pub async fn timeoff(ctx: Context<'_>) -> Result<()> {
        ctx.say(
            "Time-off command. Available subcommands:\n\
            `/timeoff add` - Record a vacation or absence\n\
            `/timeoff list` - Show an employee's time off",
        )
        .await?;
        Ok(())
    }

    /// Records time off for an employee. Leave the shift empty to block whole days.
    #[poise::command(slash_command, rename = "add")]
    pub async fn timeoff_add(
        ctx: Context<'_>,
        #[description = "Employee"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee: String,
        #[description = "First day, YYYY-MM-DD"] from: String,
        #[description = "Last day (inclusive), YYYY-MM-DD"] to: String,
        #[description = "Only this shift (default: whole day)"]
        #[autocomplete = "autocomplete::autocomplete_shift_code"]
        shift: Option<String>,
        #[description = "Reason (default: Vacation)"] reason: Option<String>,
    ) -> Result<()> {
        let Some(found) = lookup::active_employee(ctx, &employee).await? else {
            return Ok(());
        };
        let Some(start) = lookup::date(ctx, &from).await? else {
            return Ok(());
        };
        let Some(end) = lookup::date(ctx, &to).await? else {
            return Ok(());
        };

        let shift_type = match shift.as_deref() {
            Some(code) => match lookup::shift_by_code(ctx, code).await? {
                Some(s) => Some(s),
                None => return Ok(()),
            },
            None => None,
        };

        let result = time_off::add_time_off(
            &ctx.data().database,
            found.id,
            start,
            end,
            shift_type.as_ref().map(|s| s.id),
            reason.as_deref().unwrap_or_default(),
        )
        .await;

        match result {
            Ok(record) => {
                let scope = shift_type.map_or_else(|| "all shifts".to_string(), |s| s.name);
                ctx.say(format!(
                    "🏖️ Time off saved for {}: {} to {} ({scope}) - {}.",
                    found.full_name, record.start_date, record.end_date, record.reason
                ))
                .await?;
            }
            Err(e @ Error::InvalidInput { .. }) => {
                ctx.say(format!("❌ {e}")).await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Lists the time off recorded for an employee.
    #[poise::command(slash_command, rename = "list")]
    pub async fn timeoff_list(
        ctx: Context<'_>,
        #[description = "Employee"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee: String,
    ) -> Result<()> {
        let Some(found) = lookup::any_employee(ctx, &employee).await? else {
            return Ok(());
        };
        let db = &ctx.data().database;

        let records = time_off::list_time_off_for_employee(db, found.id).await?;
        if records.is_empty() {
            ctx.say(format!("{} has no time off recorded.", found.full_name))
                .await?;
            return Ok(());
        }

        let shift_names: HashMap<i64, String> = shift::list_shift_types(db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let mut text = format!("**Time off - {}**\n", found.full_name);
        for r in &records {
            let scope = r
                .shift_type_id
                .and_then(|id| shift_names.get(&id).cloned())
                .unwrap_or_else(|| "all shifts".to_string());
            let _ = writeln!(
                text,
                "• {} → {} ({scope}) - {}",
                r.start_date, r.end_date, r.reason
            );
        }

        ctx.say(text).await?;
        Ok(())
    }
}

pub use inner::*;
