//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Weekly pattern, override and effective availability commands
pub mod availability;

/// Staff management commands
pub mod employee;

/// General utility commands
pub mod general;

/// Hour totals and month closure commands
pub mod report;

/// Shift type management commands
pub mod shift;

/// Slot detail, assignment and weekly schedule commands
pub mod slot;

/// Vacation and absence commands
pub mod time_off;

// Export commands
pub use availability::*;
pub use employee::*;
pub use general::*;
pub use report::*;
pub use shift::*;
pub use slot::*;
pub use time_off::*;
