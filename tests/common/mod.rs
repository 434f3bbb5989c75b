//! Shared fixtures for integration tests.

use assistant_bot::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a date, panicking on impossible input.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Build a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::with_name(name).expect("valid test name");
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    if let Some(raw) = birthday {
        record.add_birthday(raw).expect("valid test birthday");
    }
    record
}

/// Address book holding the given (name, birthday) pairs in order.
#[allow(dead_code)]
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, &["1234567890"], Some(birthday)));
    }
    book
}
