//! AddressBook model: the in-memory keyed store of records.

use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::models::record::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Parameters of the upcoming-birthdays query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    /// Number of calendar days in the window, today included.
    pub days: u32,

    /// Move an occurrence that already passed this year into next year
    /// instead of skipping it.
    pub wrap_year_boundary: bool,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: 7,
            wrap_year_boundary: false,
        }
    }
}

/// A contact to congratulate and the weekday on which to do it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Birthday occurrence, moved to Monday when it falls on a weekend
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(BIRTHDAY_FORMAT).to_string())
}

/// Records keyed by name, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// Callers look the name up with [`AddressBook::find`] first and only add
    /// records for names that are not present yet. If that precondition is
    /// broken the new record replaces the old one in its original position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => {
                tracing::debug!(name = %key, "Replacing existing record");
                self.records[position] = record;
            }
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays in the next 7 days counted from `today`, today included.
    ///
    /// Occurrences that already passed this year are skipped. Use
    /// [`AddressBook::upcoming_birthdays`] to change either rule.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(today, &BirthdayWindow::default())
    }

    /// Same as [`AddressBook::get_upcoming_birthdays`] with the system date.
    pub fn get_upcoming_birthdays_from_now(&self) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays(Local::now().date_naive())
    }

    /// Birthdays whose occurrence is `0..window.days` days after `today`.
    ///
    /// Selection uses the real occurrence date; the congratulation date is
    /// that occurrence moved to Monday when it falls on a weekend. Results
    /// are ordered by occurrence date, ties by insertion order.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window: &BirthdayWindow,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<(NaiveDate, UpcomingBirthday)> = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = birthday.occurrence_in(today.year());
            if occurrence < today {
                if !window.wrap_year_boundary {
                    continue;
                }
                occurrence = birthday.occurrence_in(today.year() + 1);
            }

            let days_until = (occurrence - today).num_days();
            if days_until >= i64::from(window.days) {
                continue;
            }

            upcoming.push((
                occurrence,
                UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: congratulation_date(occurrence),
                },
            ));
        }

        // Stable sort keeps insertion order for equal dates
        upcoming.sort_by_key(|(occurrence, _)| *occurrence);

        tracing::debug!(
            today = %today,
            window_days = window.days,
            result_count = upcoming.len(),
            "Computed upcoming birthdays"
        );

        upcoming.into_iter().map(|(_, entry)| entry).collect()
    }
}

/// Move a weekend date to the following Monday.
fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
