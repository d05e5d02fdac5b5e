//! Configuration management for the address book.
//!
//! Settings are read from environment variables, with an optional `.env`
//! file loaded first.

use crate::error::{ConfigError, ConfigResult};
use crate::services::{BirthdayScheduler, DEFAULT_WINDOW_DAYS};
use std::env;

/// Longest reminder window accepted, in days.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many days ahead the upcoming-birthdays query looks (default: 7)
    pub upcoming_window_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_UPCOMING_DAYS`: Reminder window in days (default: 7, max: 366)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let upcoming_window_days =
            Self::parse_env_u32("ADDRESS_BOOK_UPCOMING_DAYS", DEFAULT_WINDOW_DAYS)?;

        if upcoming_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_UPCOMING_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            upcoming_window_days,
            log_level,
        })
    }

    /// Scheduler using the configured reminder window.
    pub fn scheduler(&self) -> BirthdayScheduler {
        BirthdayScheduler::new(self.upcoming_window_days)
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upcoming_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
