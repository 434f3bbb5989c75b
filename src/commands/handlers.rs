//! Command handlers.
//!
//! Each handler takes the already-tokenized arguments and the address book,
//! and returns the reply text or an [`AssistantError`]. Turning errors into
//! user-facing text is left to [`render_error`].

use super::help::{
    ADD_BIRTHDAY_USAGE, ADD_USAGE, CHANGE_USAGE, PHONE_USAGE, SHOW_BIRTHDAY_USAGE,
};
use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::domain::Phone;
use crate::error::{AssistantError, AssistantResult};
use crate::models::{AddressBook, BirthdayWindow, Record};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Borrow the first `N` arguments, or fail with the command's usage.
fn require_args<'a, const N: usize>(
    args: &'a [String],
    usage: &'static str,
) -> AssistantResult<[&'a str; N]> {
    if args.len() < N {
        return Err(AssistantError::MissingArguments { usage });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> AssistantResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> AssistantResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: add a phone, creating the contact on first mention.
///
/// A new contact is only stored once its first phone has validated.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    let [name, phone] = require_args::<2>(args, ADD_USAGE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!(name = %name, "Added phone to existing contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::with_name(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    info!(name = %name, "Contact created");
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    let [name, old_phone, new_phone] = require_args::<3>(args, CHANGE_USAGE)?;

    find_record_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    debug!(name = %name, "Phone changed");
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> AssistantResult<String> {
    let [name] = require_args::<1>(args, PHONE_USAGE)?;
    let record = find_record(book, name)?;

    if record.phones().is_empty() {
        return Ok(format!("No phone numbers found for {}", name));
    }

    let phones = record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}: {}", name, phones))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }

    book.iter()
        .map(Record::to_display_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    let [name, birthday] = require_args::<2>(args, ADD_BIRTHDAY_USAGE)?;

    find_record_mut(book, name)?.add_birthday(birthday)?;
    debug!(name = %name, "Birthday set");
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> AssistantResult<String> {
    let [name] = require_args::<1>(args, SHOW_BIRTHDAY_USAGE)?;
    let record = find_record(book, name)?;

    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("No birthday found for {}", name)),
    }
}

/// `birthdays`: upcoming birthdays counted from `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window: &BirthdayWindow) -> String {
    let upcoming = book.upcoming_birthdays(today, window);

    if upcoming.is_empty() {
        return "No upcoming birthdays in the next week.".to_string();
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(upcoming.iter().map(|entry| {
        format!(
            "{}: {}",
            entry.name,
            entry.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }));
    lines.join("\n")
}

/// Translate an error into the text shown to the user.
pub fn render_error(err: &AssistantError) -> String {
    match err {
        AssistantError::ContactNotFound(_) => "Contact not found.".to_string(),
        AssistantError::MissingArguments { usage } => {
            format!("Not enough arguments provided. Usage: {}", usage)
        }
        AssistantError::InvalidPhoneFormat(_) => {
            "Error: Phone number must contain exactly 10 digits".to_string()
        }
        AssistantError::InvalidDateFormat(_) => {
            "Error: Invalid date format. Use DD.MM.YYYY".to_string()
        }
        AssistantError::EmptyName | AssistantError::PhoneNotFound(_) => format!("Error: {}", err),
    }
}
