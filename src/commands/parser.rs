//! Command vocabulary and input tokenizing.

use std::str::FromStr;

/// Verbs understood by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    /// Blank input line
    Empty,
    /// Anything else, lower-cased
    Unknown(String),
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "" => Command::Empty,
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

/// Split a raw input line into a command and its whitespace-separated arguments.
///
/// Only the verb is lower-cased; arguments keep their case.
pub fn parse_input(line: &str) -> (Command, Vec<String>) {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some(verb) => verb.parse().unwrap_or(Command::Empty),
        None => Command::Empty,
    };
    let args = tokens.map(str::to_string).collect();
    (command, args)
}
