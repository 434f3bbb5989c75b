//! Command dispatch over a single address book.

use super::handlers::{self, render_error};
use super::help::show_help;
use super::parser::{parse_input, Command};
use crate::config::Config;
use crate::error::AssistantResult;
use crate::models::{AddressBook, BirthdayWindow};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// What the REPL should do after a line has been executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and keep reading
    Reply(String),
    /// Nothing to print (blank input)
    Silent,
    /// Print the farewell and stop
    Exit(String),
}

/// The assistant bot: owns the address book for the life of the session.
#[derive(Debug, Default)]
pub struct Assistant {
    book: AddressBook,
    window: BirthdayWindow,
}

impl Assistant {
    /// Create an assistant with an empty address book.
    pub fn new(window: BirthdayWindow) -> Self {
        Self {
            book: AddressBook::new(),
            window,
        }
    }

    /// Create an assistant using the birthday window from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.birthday_window())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Execute one input line against the system date.
    pub fn execute(&mut self, line: &str) -> Outcome {
        self.execute_at(line, Local::now().date_naive())
    }

    /// Execute one input line, treating `today` as the current date.
    pub fn execute_at(&mut self, line: &str, today: NaiveDate) -> Outcome {
        let (command, args) = parse_input(line);
        debug!(command = ?command, arg_count = args.len(), "Executing command");

        let result: AssistantResult<String> = match command {
            Command::Empty => return Outcome::Silent,
            Command::Exit => return Outcome::Exit("Good bye!".to_string()),
            Command::Unknown(verb) => {
                debug!(verb = %verb, "Unknown command");
                Ok("Invalid command. Type 'help' for available commands.".to_string())
            }
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Help => Ok(show_help().to_string()),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => Ok(handlers::show_all(&self.book)),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => Ok(handlers::birthdays(&self.book, today, &self.window)),
        };

        match result {
            Ok(reply) => Outcome::Reply(reply),
            Err(err) => {
                warn!(error = %err, "Command failed");
                Outcome::Reply(render_error(&err))
            }
        }
    }
}
