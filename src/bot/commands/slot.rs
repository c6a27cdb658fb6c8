//! Slot Discord commands - the calendar detail view, assignment and the weekly schedule.
//!
//! The selected slot travels as explicit command options (date and shift), never
//! as remembered per-user state.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, handlers::autocomplete, lookup, parse},
        core::{
            assignment, employee,
            slot::{self, Slot},
        },
        errors::{Error, Result},
    };
    use std::{collections::HashMap, fmt::Write};

    /// Parent command for a single (date, shift) slot.
    #[poise::command(slash_command, subcommands("slot_view", "slot_assign", "slot_history"))]
    pub async fn slot(ctx: Context<'_>) -> Result<()> {
        ctx.say(
            "Slot command. Available subcommands:\n\
            `/slot view` - Who is available and assigned\n\
            `/slot assign` - Set exactly who works the slot\n\
            `/slot history` - Everyone ever proposed for the slot",
        )
        .await?;
        Ok(())
    }

    /// Shows availability, assignment and coverage for a date and shift.
    #[poise::command(slash_command, rename = "view")]
    pub async fn slot_view(
        ctx: Context<'_>,
        #[description = "Date, YYYY-MM-DD"] date: String,
        #[description = "Shift code"]
        #[autocomplete = "autocomplete::autocomplete_shift_code"]
        shift: String,
    ) -> Result<()> {
        let Some(day) = lookup::date(ctx, &date).await? else {
            return Ok(());
        };
        let Some(shift_type) = lookup::shift_by_code(ctx, &shift).await? else {
            return Ok(());
        };

        let selected = Slot {
            date: day,
            shift_type_id: shift_type.id,
        };
        let view = match slot::slot_view(&ctx.data().database, selected).await {
            Ok(view) => view,
            Err(Error::ShiftNotFound { .. }) => {
                ctx.say("❌ Could not identify shift.").await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let coverage = view.coverage;
        let coverage_note = if coverage.is_understaffed() {
            " ⚠️ understaffed"
        } else if coverage.is_overstaffed() {
            " ➕ overstaffed"
        } else {
            ""
        };

        let mut text = format!(
            "**{} - {} ({}-{})**\nAssigned {}/{}{coverage_note}\n```\n",
            view.slot.date.format("%A %Y-%m-%d"),
            view.shift.name,
            view.shift.start_time.format("%H:%M"),
            view.shift.end_time.format("%H:%M"),
            coverage.assigned,
            coverage.required,
        );
        for c in &view.candidates {
            let status = match (c.availability.available, c.availability.days_off) {
                (true, _) => "available",
                (false, true) => "time off",
                (false, false) => "unavailable",
            };
            let _ = writeln!(
                text,
                "{} {:<24} {status}",
                if c.assigned { "[x]" } else { "[ ]" },
                c.employee.full_name
            );
        }
        text.push_str("```");

        ctx.say(text).await?;
        Ok(())
    }

    /// Sets exactly who works a slot. Everyone else on it is taken off.
    #[poise::command(slash_command, rename = "assign")]
    pub async fn slot_assign(
        ctx: Context<'_>,
        #[description = "Date, YYYY-MM-DD"] date: String,
        #[description = "Shift code"]
        #[autocomplete = "autocomplete::autocomplete_shift_code"]
        shift: String,
        #[description = "Comma-separated employee names (empty clears the slot)"]
        employees: Option<String>,
    ) -> Result<()> {
        let Some(day) = lookup::date(ctx, &date).await? else {
            return Ok(());
        };
        let Some(shift_type) = lookup::shift_by_code(ctx, &shift).await? else {
            return Ok(());
        };
        let db = &ctx.data().database;

        let names = parse::split_names(employees.as_deref().unwrap_or_default());
        let mut desired = Vec::with_capacity(names.len());
        let mut unknown = Vec::new();
        for name in &names {
            match employee::get_active_employee_by_name(db, name).await? {
                Some(found) => desired.push(found.id),
                None => unknown.push(name.as_str()),
            }
        }

        if !unknown.is_empty() {
            ctx.say(format!(
                "❌ Unknown or inactive employees: {}. Nothing was changed.",
                unknown.join(", ")
            ))
            .await?;
            return Ok(());
        }

        let outcome = assignment::reconcile_slot(db, day, shift_type.id, &desired).await?;

        let message = if outcome.is_noop() {
            format!("No changes for {} on {day}.", shift_type.name)
        } else {
            format!(
                "✅ {} on {day}: {} added, {} removed, {} kept.",
                shift_type.name,
                outcome.activated.len(),
                outcome.deactivated.len(),
                outcome.unchanged.len()
            )
        };
        ctx.say(message).await?;
        Ok(())
    }

    /// Lists everyone ever assigned to a slot, including people taken off it.
    #[poise::command(slash_command, rename = "history")]
    pub async fn slot_history(
        ctx: Context<'_>,
        #[description = "Date, YYYY-MM-DD"] date: String,
        #[description = "Shift code"]
        #[autocomplete = "autocomplete::autocomplete_shift_code"]
        shift: String,
    ) -> Result<()> {
        let Some(day) = lookup::date(ctx, &date).await? else {
            return Ok(());
        };
        let Some(shift_type) = lookup::shift_by_code(ctx, &shift).await? else {
            return Ok(());
        };
        let db = &ctx.data().database;

        let rows = assignment::all_assignments_for_slot(db, day, shift_type.id).await?;
        if rows.is_empty() {
            ctx.say(format!("Nobody was ever assigned to {} on {day}.", shift_type.name))
                .await?;
            return Ok(());
        }

        let names: HashMap<i64, String> = employee::list_employees(db)
            .await?
            .into_iter()
            .map(|e| (e.id, e.full_name))
            .collect();

        let mut text = format!("**History - {} on {day}**\n", shift_type.name);
        for row in &rows {
            let name = names
                .get(&row.employee_id)
                .map_or("?", String::as_str);
            let _ = writeln!(
                text,
                "• {name} - {} (last change {})",
                if row.active { "active" } else { "removed" },
                row.updated_at.format("%Y-%m-%d %H:%M")
            );
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Shows the active assignments of the week starting on the given date.
    #[poise::command(slash_command)]
    pub async fn schedule(
        ctx: Context<'_>,
        #[description = "First day of the week (usually a Monday), YYYY-MM-DD"] week_start: String,
    ) -> Result<()> {
        let Some(start) = lookup::date(ctx, &week_start).await? else {
            return Ok(());
        };

        let rows = assignment::week_schedule(&ctx.data().database, start).await?;
        if rows.is_empty() {
            ctx.say(format!("No assignments in the week starting {start}."))
                .await?;
            return Ok(());
        }

        let mut text = format!("**Week of {start}**\n```\n");
        for row in &rows {
            let _ = writeln!(
                text,
                "{} {:<16} {}",
                row.work_date.format("%a %d/%m"),
                row.shift_name,
                row.employee_name
            );
        }
        text.push_str("```");

        ctx.say(text).await?;
        Ok(())
    }
}

pub use inner::*;
