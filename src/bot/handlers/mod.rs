//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete.

/// Autocomplete handlers for employee names, shift codes, and weekdays
pub mod autocomplete;
