//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests employee names and shift codes as the user types so that the
//! values passed to commands match stored rows exactly.

use crate::{
    bot::Context,
    core::{employee, shift},
};

/// Discord accepts at most 25 suggestions.
const MAX_SUGGESTIONS: usize = 25;

/// Suggests active employee names containing the partial input.
pub async fn autocomplete_employee_name(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let Ok(employees) = employee::list_active_employees(&ctx.data().database).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    // Already ordered by name
    employees
        .into_iter()
        .filter(|e| e.full_name.to_lowercase().contains(&partial_lower))
        .map(|e| e.full_name)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests active shift codes whose code or name contains the partial input.
pub async fn autocomplete_shift_code(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let Ok(shifts) = shift::list_active_shift_types(&ctx.data().database).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    shifts
        .into_iter()
        .filter(|s| {
            s.code.to_lowercase().contains(&partial_lower)
                || s.name.to_lowercase().contains(&partial_lower)
        })
        .map(|s| s.code)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests weekday names.
pub async fn autocomplete_weekday(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    let weekdays = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    let partial_lower = partial.to_lowercase();

    weekdays
        .iter()
        .filter(|day| day.to_lowercase().starts_with(&partial_lower))
        .map(|&day| day.to_string())
        .collect()
}
