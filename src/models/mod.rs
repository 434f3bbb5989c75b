//! Data models for the address book.
//!
//! This module contains the contact record and the keyed collection that
//! owns every record for the lifetime of the process.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, BirthdayWindow, UpcomingBirthday};
pub use record::Record;
