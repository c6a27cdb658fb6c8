//! Unified error type for the shift administration tool.

use thiserror::Error;

/// Every failure the core, configuration, and bot layers can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is missing a required value
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Error raised by the relational store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No employee matches the given identifier or name
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// Identifier or name that was looked up
        name: String,
    },

    /// No shift type matches the given identifier or code
    #[error("Could not identify shift: {code}")]
    ShiftNotFound {
        /// Identifier or code that was looked up
        code: String,
    },

    /// User-supplied input was rejected
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected
        message: String,
    },

    /// I/O failure (reading config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable is absent or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
