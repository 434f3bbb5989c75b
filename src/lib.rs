//! Assistant Bot - an interactive command-line assistant with an in-memory address book.
//!
//! The bot keeps contacts (a name, phone numbers and an optional birthday)
//! for the life of the process and answers short text commands such as
//! `add John 1234567890` or `birthdays`.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `Phone`, `Birthday`)
//! - **models**: `Record` and `AddressBook`, including the upcoming-birthdays query
//! - **commands**: Input parsing, command handlers and error-to-message translation
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use commands::{Assistant, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{AssistantError, AssistantResult, ConfigError};
pub use models::{AddressBook, BirthdayWindow, Record, UpcomingBirthday};
