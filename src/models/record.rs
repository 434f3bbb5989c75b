//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{AssistantError, AssistantResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep insertion order and duplicates are accepted, so adding the
/// same number twice stores it twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create an empty record, validating the raw name.
    pub fn with_name(name: &str) -> AssistantResult<Self> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> AssistantResult<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The lookup happens before `new` is validated, so an unknown `old`
    /// reports `PhoneNotFound` even when `new` is malformed too.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AssistantResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| AssistantError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    pub fn remove_phone(&mut self, raw: &str) -> AssistantResult<Phone> {
        let index = self
            .position_of(raw)
            .ok_or_else(|| AssistantError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Find the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Parse `raw` as `DD.MM.YYYY` and store it, overwriting any previous birthday.
    pub fn add_birthday(&mut self, raw: &str) -> AssistantResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Human-readable single line, as shown by the `all` command.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
