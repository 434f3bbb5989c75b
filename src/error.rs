//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing an address book command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// A phone number is not exactly 10 digits
    #[error("Phone number must contain exactly 10 digits: {0}")]
    InvalidPhoneFormat(String),

    /// A birthday is not a valid DD.MM.YYYY date
    #[error("Invalid date format. Use DD.MM.YYYY: {0}")]
    InvalidDateFormat(String),

    /// A contact name is empty
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The phone to edit or remove is not stored on the record
    #[error("Phone {0} not found in record")]
    PhoneNotFound(String),

    /// No contact is stored under the given name
    #[error("Contact '{0}' not found")]
    ContactNotFound(String),

    /// The command was given fewer arguments than it needs
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },
}

impl From<ValidationError> for AssistantError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::EmptyName,
            ValidationError::InvalidPhoneFormat(phone) => Self::InvalidPhoneFormat(phone),
            ValidationError::InvalidDateFormat(date) => Self::InvalidDateFormat(date),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
