//! Configuration management for the assistant bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::models::BirthdayWindow;
use std::env;

/// Largest accepted birthday window, one leap year.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of days the `birthdays` command looks ahead, today included (default: 7)
    pub birthday_window_days: u32,

    /// Whether birthdays early next year count when today is late December (default: false)
    pub birthday_wrap_year: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Look-ahead window in days, 1-366 (default: 7)
    /// - `BIRTHDAY_WRAP_YEAR`: `true` to wrap the window into next year (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy does not write to stdout
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", 7)?;
        if birthday_window_days == 0 || birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let birthday_wrap_year = Self::parse_env_bool("BIRTHDAY_WRAP_YEAR", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            birthday_wrap_year,
            log_level,
        })
    }

    /// Window parameters for the upcoming-birthdays query.
    pub fn birthday_window(&self) -> BirthdayWindow {
        BirthdayWindow {
            days: self.birthday_window_days,
            wrap_year_boundary: self.birthday_wrap_year,
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let window = BirthdayWindow::default();
        Config {
            birthday_window_days: window.days,
            birthday_wrap_year: window.wrap_year_boundary,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["BIRTHDAY_WINDOW_DAYS", "BIRTHDAY_WRAP_YEAR", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
        assert!(!config.birthday_wrap_year);
        assert_eq!(config.log_level, "error");
        assert_eq!(config.birthday_window(), BirthdayWindow::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("BIRTHDAY_WRAP_YEAR", "true");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 14);
        assert!(config.birthday_wrap_year);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.birthday_window(),
            BirthdayWindow {
                days: 14,
                wrap_year_boundary: true
            }
        );
    }

    #[test]
    #[serial]
    fn test_config_window_out_of_range() {
        for value in ["0", "367"] {
            let mut guard = EnvGuard::new();
            guard.set("BIRTHDAY_WINDOW_DAYS", value);

            match Config::from_env() {
                Err(ConfigError::InvalidValue { var, .. }) => {
                    assert_eq!(var, "BIRTHDAY_WINDOW_DAYS")
                }
                other => panic!("Expected InvalidValue error, got: {:?}", other),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_wrap_flag() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WRAP_YEAR", "sometimes");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "BIRTHDAY_WRAP_YEAR"
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");
        guard.set("TEST_U32_INVALID", "not-a-number");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT_U32", 10).unwrap(), 10);
        assert!(Config::parse_env_u32("TEST_U32_INVALID", 10).is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_FLAG_ON", "Yes");
        guard.set("TEST_FLAG_OFF", "0");

        assert!(Config::parse_env_bool("TEST_FLAG_ON", false).unwrap());
        assert!(!Config::parse_env_bool("TEST_FLAG_OFF", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_FLAG", true).unwrap());
    }
}
