//! Resolution of user-typed names, codes and dates for commands.
//!
//! Each helper replies to the user itself when the input cannot be resolved and
//! returns `None`, so a command can simply stop.

use crate::{
    bot::{Context, parse},
    core::{employee, shift},
    entities::{employee as employee_entity, shift_type},
    errors::Result,
};
use chrono::NaiveDate;

pub async fn active_employee(
    ctx: Context<'_>,
    name: &str,
) -> Result<Option<employee_entity::Model>> {
    let found = employee::get_active_employee_by_name(&ctx.data().database, name).await?;
    if found.is_none() {
        ctx.say(format!(
            "❌ No active employee named '{}'. Use `/employee list` to see staff.",
            name.trim()
        ))
        .await?;
    }
    Ok(found)
}

pub async fn any_employee(
    ctx: Context<'_>,
    name: &str,
) -> Result<Option<employee_entity::Model>> {
    let found = employee::get_employee_by_name(&ctx.data().database, name).await?;
    if found.is_none() {
        ctx.say(format!("❌ No employee named '{}'.", name.trim()))
            .await?;
    }
    Ok(found)
}

pub async fn shift_by_code(ctx: Context<'_>, code: &str) -> Result<Option<shift_type::Model>> {
    let found = shift::get_shift_type_by_code(&ctx.data().database, code).await?;
    if found.is_none() {
        ctx.say(format!("❌ Could not identify shift '{}'.", code.trim()))
            .await?;
    }
    Ok(found)
}

pub async fn date(ctx: Context<'_>, input: &str) -> Result<Option<NaiveDate>> {
    match parse::parse_date(input) {
        Ok(date) => Ok(Some(date)),
        Err(e) => {
            ctx.say(format!("❌ {e}")).await?;
            Ok(None)
        }
    }
}
