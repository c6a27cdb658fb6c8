//! Reporting Discord commands - monthly hour totals and month closure.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, parse},
        core::{closure, hours},
        errors::Result,
    };
    use chrono::{Datelike, Local};
    use std::fmt::Write;

    async fn month_or_current(ctx: Context<'_>, month: Option<&str>) -> Result<Option<(i32, u32)>> {
        let Some(input) = month else {
            let today = Local::now().date_naive();
            return Ok(Some((today.year(), today.month())));
        };
        match parse::parse_month(input) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                Ok(None)
            }
        }
    }

    /// Shows hours worked per employee in a month.
    #[poise::command(slash_command, prefix_command)]
    pub async fn hours(
        ctx: Context<'_>,
        #[description = "Month, YYYY-MM (default: current month)"] month: Option<String>,
    ) -> Result<()> {
        let Some((year, month)) = month_or_current(ctx, month.as_deref()).await? else {
            return Ok(());
        };
        let db = &ctx.data().database;

        let (start, _) = hours::month_range(year, month)?;
        let rows = hours::monthly_hours(db, year, month).await?;

        let mut text = format!("```\n{}```", hours::format_hours_summary(start, &rows));
        if closure::is_month_closed(db, start).await? {
            text.push_str("\n🔒 This month is closed.");
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Parent command for month closure.
    #[poise::command(slash_command, subcommands("month_close", "month_list"))]
    pub async fn month(ctx: Context<'_>) -> Result<()> {
        ctx.say(
            "Month command. Available subcommands:\n\
            `/month close` - Mark a month as finalised\n\
            `/month list` - Show closed months",
        )
        .await?;
        Ok(())
    }

    /// Marks a month as finalised. Closing twice changes nothing.
    #[poise::command(slash_command, rename = "close")]
    pub async fn month_close(
        ctx: Context<'_>,
        #[description = "Month, YYYY-MM (default: current month)"] month: Option<String>,
    ) -> Result<()> {
        let Some((year, month)) = month_or_current(ctx, month.as_deref()).await? else {
            return Ok(());
        };
        let (start, _) = hours::month_range(year, month)?;

        let closed_by = ctx.author().name.clone();
        let (record, created) = closure::close_month(&ctx.data().database, start, &closed_by).await?;

        let label = record.month_start.format("%B %Y");
        let message = if created {
            format!("🔒 {label} closed by {}.", record.closed_by)
        } else {
            format!(
                "{label} was already closed by {} on {}.",
                record.closed_by,
                record.closed_at.format("%Y-%m-%d")
            )
        };
        ctx.say(message).await?;
        Ok(())
    }

    /// Lists closed months, most recent first.
    #[poise::command(slash_command, rename = "list")]
    pub async fn month_list(ctx: Context<'_>) -> Result<()> {
        let closures = closure::list_closures(&ctx.data().database).await?;
        if closures.is_empty() {
            ctx.say("No months have been closed yet.").await?;
            return Ok(());
        }

        let mut text = String::from("**Closed months**\n");
        for c in &closures {
            let _ = writeln!(
                text,
                "• {} - {} ({})",
                c.month_start.format("%B %Y"),
                c.closed_by,
                c.closed_at.format("%Y-%m-%d")
            );
        }
        ctx.say(text).await?;
        Ok(())
    }
}

pub use inner::*;
