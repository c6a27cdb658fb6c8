/// Database configuration and connection management
pub mod database;

/// Shift type seed configuration loading from config.toml
pub mod shifts;
