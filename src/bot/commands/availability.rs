//! Availability Discord commands - weekly pattern editor, overrides and checks.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, handlers::autocomplete, lookup, parse},
        core::{availability, shift},
        errors::Result,
    };
    use std::{collections::HashMap, fmt::Write};

    /// Parent command for availability.
    #[poise::command(
        slash_command,
        subcommands(
            "availability_week",
            "availability_set",
            "availability_override",
            "availability_clear",
            "availability_check"
        )
    )]
    pub async fn availability(ctx: Context<'_>) -> Result<()> {
        ctx.say(
            "Availability command. Available subcommands:\n\
            `/availability week` - Show an employee's weekly pattern\n\
            `/availability set` - Change one weekday/shift of the pattern\n\
            `/availability override` - One-off exception for a date\n\
            `/availability clear` - Remove an exception\n\
            `/availability check` - Effective availability for a date and shift",
        )
        .await?;
        Ok(())
    }

    /// Shows the weekly pattern grid of an employee.
    ///
    /// Missing weekday/shift rows are created as available first so the grid
    /// is always complete.
    #[poise::command(slash_command, rename = "week")]
    pub async fn availability_week(
        ctx: Context<'_>,
        #[description = "Employee"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee: String,
    ) -> Result<()> {
        let Some(found) = lookup::active_employee(ctx, &employee).await? else {
            return Ok(());
        };
        let db = &ctx.data().database;

        availability::ensure_default_weekly_rows(db, found.id).await?;

        let shifts = shift::list_active_shift_types(db).await?;
        if shifts.is_empty() {
            ctx.say("No active shift types. Use `/shift save` first.")
                .await?;
            return Ok(());
        }

        let pattern: HashMap<(i32, i64), bool> = availability::get_weekly_pattern(db, found.id)
            .await?
            .into_iter()
            .map(|row| ((row.weekday, row.shift_type_id), row.available))
            .collect();

        let mut grid = format!("**Weekly availability - {}**\n```\n{:<10}", found.full_name, "");
        for s in &shifts {
            let _ = write!(grid, " {:^5}", s.code);
        }
        grid.push('\n');

        for weekday in 1..=7 {
            let _ = write!(grid, "{:<10}", availability::weekday_name(weekday));
            for s in &shifts {
                let mark = if pattern.get(&(weekday, s.id)).copied().unwrap_or(true) {
                    "yes"
                } else {
                    "no"
                };
                let _ = write!(grid, " {mark:^5}");
            }
            grid.push('\n');
        }
        grid.push_str("```");

        ctx.say(grid).await?;
        Ok(())
    }

    /// Changes the weekly pattern for one weekday and shift.
    #[poise::command(slash_command, rename = "set")]
    pub async fn availability_set(
        ctx: Context<'_>,
        #[description = "Employee"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee: String,
        #[description = "Weekday (name or 1-7, Monday = 1)"]
        #[autocomplete = "autocomplete::autocomplete_weekday"]
        weekday: String,
        #[description = "Shift code"]
        #[autocomplete = "autocomplete::autocomplete_shift_code"]
        shift: String,
        #[description = "Available on that weekday and shift"] available: bool,
    ) -> Result<()> {
        let Some(found) = lookup::active_employee(ctx, &employee).await? else {
            return Ok(());
        };
        let weekday = match parse::parse_weekday(&weekday) {
            Ok(w) => w,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };
        let Some(shift_type) = lookup::shift_by_code(ctx, &shift).await? else {
            return Ok(());
        };

        availability::set_weekly_availability(
            &ctx.data().database,
            found.id,
            weekday,
            shift_type.id,
            available,
        )
        .await?;

        ctx.say(format!(
            "✅ {} is {} on {} {} shifts.",
            found.full_name,
            if available { "available" } else { "not available" },
            availability::weekday_name(weekday),
            shift_type.name
        ))
        .await?;
        Ok(())
    }

    /// Sets a one-off exception for a specific date and shift.
    #[poise::command(slash_command, rename = "override")]
    pub async fn availability_override(
        ctx: Context<'_>,
        #[description = "Employee"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee: String,
        #[description = "Date, YYYY-MM-DD"] date: String,
        #[description = "Shift code"]
        #[autocomplete = "autocomplete::autocomplete_shift_code"]
        shift: String,
        #[description = "Available on that date and shift"] available: bool,
        #[description = "Reason"] reason: Option<String>,
    ) -> Result<()> {
        let Some(found) = lookup::active_employee(ctx, &employee).await? else {
            return Ok(());
        };
        let Some(day) = lookup::date(ctx, &date).await? else {
            return Ok(());
        };
        let Some(shift_type) = lookup::shift_by_code(ctx, &shift).await? else {
            return Ok(());
        };

        availability::set_override(
            &ctx.data().database,
            found.id,
            day,
            shift_type.id,
            available,
            reason,
        )
        .await?;

        ctx.say(format!(
            "📌 Override saved: {} is {} on {day} ({}).",
            found.full_name,
            if available { "available" } else { "not available" },
            shift_type.name
        ))
        .await?;
        Ok(())
    }

    /// Removes the exception for a date and shift so the weekly pattern applies again.
    #[poise::command(slash_command, rename = "clear")]
    pub async fn availability_clear(
        ctx: Context<'_>,
        #[description = "Employee"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee: String,
        #[description = "Date, YYYY-MM-DD"] date: String,
        #[description = "Shift code"]
        #[autocomplete = "autocomplete::autocomplete_shift_code"]
        shift: String,
    ) -> Result<()> {
        let Some(found) = lookup::active_employee(ctx, &employee).await? else {
            return Ok(());
        };
        let Some(day) = lookup::date(ctx, &date).await? else {
            return Ok(());
        };
        let Some(shift_type) = lookup::shift_by_code(ctx, &shift).await? else {
            return Ok(());
        };

        let removed =
            availability::clear_override(&ctx.data().database, found.id, day, shift_type.id)
                .await?;

        let message = if removed {
            format!("🧹 Override removed for {} on {day}.", found.full_name)
        } else {
            format!("There was no override for {} on {day}.", found.full_name)
        };
        ctx.say(message).await?;
        Ok(())
    }

    /// Shows the effective availability of an employee for a date and shift.
    #[poise::command(slash_command, rename = "check")]
    pub async fn availability_check(
        ctx: Context<'_>,
        #[description = "Employee"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        employee: String,
        #[description = "Date, YYYY-MM-DD"] date: String,
        #[description = "Shift code"]
        #[autocomplete = "autocomplete::autocomplete_shift_code"]
        shift: String,
    ) -> Result<()> {
        let Some(found) = lookup::active_employee(ctx, &employee).await? else {
            return Ok(());
        };
        let Some(day) = lookup::date(ctx, &date).await? else {
            return Ok(());
        };
        let Some(shift_type) = lookup::shift_by_code(ctx, &shift).await? else {
            return Ok(());
        };

        let result = availability::effective_availability(
            &ctx.data().database,
            found.id,
            day,
            shift_type.id,
        )
        .await?;

        let status = match (result.available, result.days_off) {
            (true, _) => "✅ available",
            (false, true) => "🏖️ on time off",
            (false, false) => "⛔ not available",
        };
        ctx.say(format!(
            "{} on {day} ({}): {status}",
            found.full_name, shift_type.name
        ))
        .await?;
        Ok(())
    }
}

pub use inner::*;
