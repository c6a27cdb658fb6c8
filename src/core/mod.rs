//! Core business logic - framework-agnostic staff, shift, availability and
//! assignment operations.
//!
//! Nothing in here knows about Discord. Every function takes a database
//! connection and plain values and returns plain data for the bot layer to format.

/// Effective availability resolution and the weekly/override tables behind it
pub mod availability;
/// Slot assignment bookkeeping and weekly schedule listing
pub mod assignment;
/// Advisory month closure records
pub mod closure;
/// Staff registration and soft deletion
pub mod employee;
/// Monthly hour totals
pub mod hours;
/// Shift type definitions
pub mod shift;
/// Detail view of one selected (date, shift) slot
pub mod slot;
/// Vacations and absences
pub mod time_off;
