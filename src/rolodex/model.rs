//! # Contact Fields
//!
//! The three value types a contact is built from: [`Name`], [`Phone`] and [`Birthday`].
//! Each one validates on construction, so holding a value means holding a valid one.
//! They are independent types: nothing about them is shared beyond the
//! validate-then-render contract (`new`/`FromStr` in, `Display` out).
//!
//! ## Formats
//!
//! - **Name**: any non-empty text.
//! - **Phone**: exactly ten ASCII digits, no separators (`0501234567`).
//! - **Birthday**: `dd-mm-yyyy`, zero-padded, and it must be a real calendar date.
//!   Stored as a [`NaiveDate`] and rendered back in the same pattern.

use crate::error::{Result, RolodexError};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone pattern"));

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("Failed to compile birthday pattern")
});

pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(RolodexError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(RolodexError::InvalidPhoneFormat);
        }
        Ok(Self(value))
    }

    /// Replaces the number, leaving the old one in place when `value` is invalid.
    pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
        *self = Self::new(value)?;
        Ok(())
    }

    fn is_valid(value: &str) -> bool {
        PHONE_PATTERN.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a `dd-mm-yyyy` date.
    pub fn new(value: &str) -> Result<Self> {
        if !BIRTHDAY_PATTERN.is_match(value) {
            return Err(RolodexError::InvalidBirthdayFormat);
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| RolodexError::InvalidBirthdayFormat)
    }

    pub fn set(&mut self, value: &str) -> Result<()> {
        *self = Self::new(value)?;
        Ok(())
    }

    /// The date this birthday falls on in `year`. A 29 February birthday falls on
    /// 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
