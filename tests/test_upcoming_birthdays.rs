//! Integration tests for the upcoming-birthdays query.
//!
//! Reference weekdays used below:
//! - 2024-01-01 Monday, 2024-01-05 Friday
//! - 2024-06-10 Monday
//! - 2024-12-30 Monday

use assistant_bot::{AddressBook, BirthdayWindow, UpcomingBirthday};

mod common;
use common::*;

#[test]
fn test_next_day_birthday_on_weekday() {
    let book = book_with_birthdays(&[("John", "02.01.1990")]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 1, 1));
    assert_eq!(
        upcoming,
        vec![UpcomingBirthday {
            name: "John".to_string(),
            congratulation_date: date(2024, 1, 2),
        }]
    );
}

#[test]
fn test_saturday_birthday_moves_to_monday() {
    let book = book_with_birthdays(&[("Jane", "06.01.1990")]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 1, 5));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation_date, date(2024, 1, 8));
}

#[test]
fn test_eight_days_out_is_excluded() {
    let book = book_with_birthdays(&[("Far", "18.06.1990"), ("Near", "12.06.1990")]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10));
    let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Near"]);
}

#[test]
fn test_today_is_included_and_past_is_skipped() {
    let book = book_with_birthdays(&[("Past", "09.06.1990"), ("Today", "10.06.1990")]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10));
    let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Today"]);
}

#[test]
fn test_records_without_birthday_are_skipped() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("NoBirthday", &["1234567890"], None));
    assert!(book.get_upcoming_birthdays(date(2024, 6, 10)).is_empty());
    assert!(AddressBook::new()
        .get_upcoming_birthdays(date(2024, 6, 10))
        .is_empty());
}

#[test]
fn test_ordered_by_birthday_then_insertion() {
    let book = book_with_birthdays(&[
        ("Sunday", "16.06.1990"),
        ("Tuesday", "11.06.1990"),
        ("Saturday", "15.06.1990"),
        ("TuesdayToo", "11.06.2001"),
    ]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10));
    let summary: Vec<(&str, String)> = upcoming
        .iter()
        .map(|u| (u.name.as_str(), u.congratulation_date.to_string()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Tuesday", "2024-06-11".to_string()),
            ("TuesdayToo", "2024-06-11".to_string()),
            ("Saturday", "2024-06-17".to_string()),
            ("Sunday", "2024-06-17".to_string()),
        ]
    );
}

#[test]
fn test_year_boundary_is_not_wrapped_by_default() {
    let book = book_with_birthdays(&[("NewYear", "01.01.1990"), ("Eve", "31.12.1990")]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 12, 30));
    let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Eve"]);
}

#[test]
fn test_year_boundary_wraps_when_enabled() {
    let book = book_with_birthdays(&[("NewYear", "01.01.1990"), ("Eve", "31.12.1990")]);
    let window = BirthdayWindow {
        days: 7,
        wrap_year_boundary: true,
    };

    let upcoming = book.upcoming_birthdays(date(2024, 12, 30), &window);
    let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Eve", "NewYear"]);
    assert_eq!(upcoming[1].congratulation_date, date(2025, 1, 1));
}

#[test]
fn test_query_does_not_mutate_book() {
    let book = book_with_birthdays(&[("John", "02.01.1990")]);
    let before: Vec<String> = book.iter().map(|r| r.to_display_string()).collect();

    let _ = book.get_upcoming_birthdays(date(2024, 1, 1));
    let _ = book.get_upcoming_birthdays_from_now();

    let after: Vec<String> = book.iter().map(|r| r.to_display_string()).collect();
    assert_eq!(before, after);
}
