//! Staff Discord commands - registering, listing and soft-deleting employees.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, handlers::autocomplete, lookup},
        core::employee::{self, EmployeeRole},
        errors::Result,
    };
    use std::fmt::Write;

    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum RoleChoice {
        #[name = "staff"]
        Staff,
        #[name = "manager"]
        Manager,
    }

    impl From<RoleChoice> for EmployeeRole {
        fn from(choice: RoleChoice) -> Self {
            match choice {
                RoleChoice::Staff => Self::Staff,
                RoleChoice::Manager => Self::Manager,
            }
        }
    }

    /// Parent command for managing staff.
    #[poise::command(
        slash_command,
        subcommands(
            "employee_add",
            "employee_list",
            "employee_deactivate",
            "employee_activate"
        )
    )]
    pub async fn employee(ctx: Context<'_>) -> Result<()> {
        let help_text = "Staff management command. Available subcommands:\n\
            `/employee add` - Register a new employee\n\
            `/employee list` - List all employees\n\
            `/employee deactivate` - Hide an employee from selection lists\n\
            `/employee activate` - Bring a deactivated employee back";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Registers a new employee.
    #[poise::command(slash_command, rename = "add")]
    pub async fn employee_add(
        ctx: Context<'_>,
        #[description = "Full name"] name: String,
        #[description = "Role"] role: RoleChoice,
        #[description = "Whether the employee is active (default yes)"] active: Option<bool>,
    ) -> Result<()> {
        let db = &ctx.data().database;

        match employee::create_employee(db, &name, role.into(), active.unwrap_or(true)).await? {
            Some(created) => {
                ctx.say(format!(
                    "✅ Saved {} ({}).",
                    created.full_name, created.role
                ))
                .await?;
            }
            // Blank names are ignored without complaint
            None => {
                ctx.say("Nothing saved.").await?;
            }
        }

        Ok(())
    }

    /// Lists every employee with role and status.
    #[poise::command(slash_command, rename = "list")]
    pub async fn employee_list(ctx: Context<'_>) -> Result<()> {
        let employees = employee::list_employees(&ctx.data().database).await?;

        if employees.is_empty() {
            ctx.say("No employees yet. Use `/employee add` to register one.")
                .await?;
            return Ok(());
        }

        let mut table = String::from("```\nName                     Role     Active\n");
        for e in &employees {
            let _ = writeln!(
                table,
                "{:<24} {:<8} {}",
                e.full_name,
                e.role,
                if e.active { "yes" } else { "no" }
            );
        }
        table.push_str("```");

        ctx.say(table).await?;
        Ok(())
    }

    /// Deactivates an employee. Their assignment history is kept.
    #[poise::command(slash_command, rename = "deactivate")]
    pub async fn employee_deactivate(
        ctx: Context<'_>,
        #[description = "Employee to deactivate"]
        #[autocomplete = "autocomplete::autocomplete_employee_name"]
        name: String,
    ) -> Result<()> {
        let Some(found) = lookup::active_employee(ctx, &name).await? else {
            return Ok(());
        };

        employee::set_employee_active(&ctx.data().database, found.id, false).await?;
        ctx.say(format!("🗃️ {} is now inactive.", found.full_name))
            .await?;
        Ok(())
    }

    /// Reactivates a previously deactivated employee.
    #[poise::command(slash_command, rename = "activate")]
    pub async fn employee_activate(
        ctx: Context<'_>,
        #[description = "Employee to reactivate"] name: String,
    ) -> Result<()> {
        let Some(found) = lookup::any_employee(ctx, &name).await? else {
            return Ok(());
        };

        employee::set_employee_active(&ctx.data().database, found.id, true).await?;
        ctx.say(format!("✅ {} is active again.", found.full_name))
            .await?;
        Ok(())
    }
}

pub use inner::*;
