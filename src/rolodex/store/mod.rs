//! # Storage Layer
//!
//! [`AddressBook`] is the one store of the application: a name-keyed collection of
//! [`Record`]s living in memory for the duration of a session. Nothing is persisted.
//!
//! ## Ordering
//!
//! Records are kept in insertion order, and every listing (tables, pages, search
//! results) follows it. Overwriting a record or renaming it keeps its position.
//!
//! ## Keys
//!
//! The key of a record is always its current name. Renames go through
//! [`AddressBook::rename`], which re-keys the entry, so a lookup by the new name finds
//! the record and a lookup by the old name does not.
//!
//! ## Pagination
//!
//! [`AddressBook::pages`] yields fixed-size chunks over the records. It is lazy and
//! borrows the book, so each call starts a fresh pass.

use crate::model::Name;
use crate::record::Record;
use std::collections::HashMap;

pub mod pages;

pub use pages::{Chunk, Pages};

pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Result of [`AddressBook::rename`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    NotFound,
    /// Another record already uses the requested name.
    NameTaken,
}

#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name. An existing record with the same name is
    /// replaced in place and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name.as_str().to_string();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn delete_record(&mut self, name: &str) -> Option<Record> {
        let pos = self.index.remove(name)?;
        let removed = self.records.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.index.get(name).map(|&pos| &mut self.records[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Renames the record stored under `old` and re-keys it, keeping its position.
    pub fn rename(&mut self, old: &str, new_name: Name) -> RenameOutcome {
        let Some(&pos) = self.index.get(old) else {
            return RenameOutcome::NotFound;
        };
        if new_name.as_str() != old && self.index.contains_key(new_name.as_str()) {
            return RenameOutcome::NameTaken;
        }

        self.index.remove(old);
        self.index.insert(new_name.as_str().to_string(), pos);
        self.records[pos].change_name(new_name);
        RenameOutcome::Renamed
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Chunks of at most `size` records; a `size` of 0 is treated as 1.
    pub fn pages(&self, size: usize) -> Pages<'_> {
        Pages::new(&self.records, size)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = Chunk<'a>;
    type IntoIter = Pages<'a>;

    /// Iterates in chunks of [`DEFAULT_PAGE_SIZE`].
    fn into_iter(self) -> Self::IntoIter {
        self.pages(DEFAULT_PAGE_SIZE)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Birthday, Phone};

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        /// Adds `count` contacts named `Contact 1`.. with phones `0000000001`..
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 1..=count {
                let name = Name::new(format!("Contact {}", i)).unwrap();
                let phone = Phone::new(format!("{:010}", i)).unwrap();
                self.book.add_record(Record::new(name).with_phone(phone));
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            for phone in phones {
                record.add_phone(Phone::new(*phone).unwrap());
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday_contact(mut self, name: &str, phone: &str, birthday: &str) -> Self {
            let record = Record::new(Name::new(name).unwrap())
                .with_phone(Phone::new(phone).unwrap())
                .with_birthday(Some(Birthday::new(birthday).unwrap()));
            self.book.add_record(record);
            self
        }
    }
}
