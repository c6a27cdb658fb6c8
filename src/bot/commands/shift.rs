//! Shift type Discord commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, parse},
        core::shift::{self, NewShiftType},
        errors::Result,
    };
    use std::fmt::Write;

    /// Parent command for managing shift types.
    #[poise::command(slash_command, subcommands("shift_save", "shift_list"))]
    pub async fn shift(ctx: Context<'_>) -> Result<()> {
        ctx.say(
            "Shift management command. Available subcommands:\n\
            `/shift save` - Create a shift type or update the one with the same code\n\
            `/shift list` - List shift types",
        )
        .await?;
        Ok(())
    }

    /// Creates a shift type, or updates the existing one with the same code.
    #[poise::command(slash_command, rename = "save")]
    pub async fn shift_save(
        ctx: Context<'_>,
        #[description = "Short code (e.g. M, T)"] code: String,
        #[description = "Display name"] name: String,
        #[description = "Start time, HH:MM"] start: String,
        #[description = "End time, HH:MM (same day)"] end: String,
        #[description = "People needed"]
        #[min = 1]
        required_staff: Option<i32>,
        #[description = "Fairness weight (stored only)"]
        #[min = 1]
        fairness_weight: Option<i32>,
        #[description = "Whether the shift is active (default yes)"] active: Option<bool>,
    ) -> Result<()> {
        let (start_time, end_time) = match (parse::parse_time(&start), parse::parse_time(&end)) {
            (Ok(s), Ok(e)) => (s, e),
            (Err(e), _) | (_, Err(e)) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let input = NewShiftType {
            code,
            name,
            start_time,
            end_time,
            required_staff: required_staff.unwrap_or(2),
            fairness_weight: fairness_weight.unwrap_or(1),
            active: active.unwrap_or(true),
        };

        match shift::save_shift_type(&ctx.data().database, input).await? {
            Some(saved) => {
                ctx.say(format!(
                    "💾 Shift {} ({}) saved: {}-{}, {} people.",
                    saved.code,
                    saved.name,
                    saved.start_time.format("%H:%M"),
                    saved.end_time.format("%H:%M"),
                    saved.required_staff
                ))
                .await?;
            }
            None => {
                ctx.say("Nothing saved.").await?;
            }
        }
        Ok(())
    }

    /// Lists shift types by start time.
    #[poise::command(slash_command, rename = "list")]
    pub async fn shift_list(ctx: Context<'_>) -> Result<()> {
        let shifts = shift::list_shift_types(&ctx.data().database).await?;

        if shifts.is_empty() {
            ctx.say("No shift types yet. Use `/shift save` to define one.")
                .await?;
            return Ok(());
        }

        let mut table =
            String::from("```\nCode Name             Start End   Staff Weight Active\n");
        for s in &shifts {
            let _ = writeln!(
                table,
                "{:<4} {:<16} {} {} {:>5} {:>6} {}",
                s.code,
                s.name,
                s.start_time.format("%H:%M"),
                s.end_time.format("%H:%M"),
                s.required_staff,
                s.fairness_weight,
                if s.active { "yes" } else { "no" }
            );
        }
        table.push_str("```");

        ctx.say(table).await?;
        Ok(())
    }
}

pub use inner::*;
