//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let help_text = "**Pharmacy Shifts Help**\n\
        Here is a summary of all available commands.\n\n\
        **Staff & Shifts**\n\
        • `/employee add|list|deactivate|activate` - Register and soft-delete staff.\n\
        • `/shift save|list` - Define shift types (saving an existing code updates it).\n\
        • `/timeoff add|list` - Record vacations and absences.\n\n\
        **Availability**\n\
        • `/availability week <employee>` - Weekly pattern grid.\n\
        • `/availability set <employee> <weekday> <shift> <available>` - Edit the weekly pattern.\n\
        • `/availability override|clear <employee> <date> <shift>` - One-off exceptions.\n\
        • `/availability check <employee> <date> <shift>` - Effective availability.\n\n\
        **Scheduling**\n\
        • `/slot view|assign|history <date> <shift>` - Who works a day/shift.\n\
        • `/schedule <monday>` - The week's active assignments.\n\n\
        **Reports**\n\
        • `/hours [YYYY-MM]` - Monthly hour totals.\n\
        • `/month close|list` - Mark months as finalised.\n\n\
        Dates are `YYYY-MM-DD`, times `HH:MM`.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
