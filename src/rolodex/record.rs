use crate::model::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// One contact: a name, its distinct phones in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.add_phone(phone);
        self
    }

    pub fn with_birthday(mut self, birthday: Option<Birthday>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Appends `phone` unless an equal one is already listed. Returns whether it was added.
    pub fn add_phone(&mut self, phone: Phone) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }

    /// Replaces the first phone equal to `old`. Returns whether a phone was replaced.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> bool {
        match self.phones.iter_mut().find(|p| *p == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Swaps in a new name and returns the previous one. The owning store must re-key.
    pub fn change_name(&mut self, new_name: Name) -> Name {
        std::mem::replace(&mut self.name, new_name)
    }

    pub fn has_phone_containing(&self, needle: &str) -> bool {
        self.phones.iter().any(|p| p.as_str().contains(needle))
    }

    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Days from the local date to the next birthday, `None` without a birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` to the next occurrence of the birthday; 0 when it is today.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?;
        let next = match birthday.in_year(today.year()) {
            Some(date) if date >= today => date,
            _ => birthday.in_year(today.year() + 1)?,
        };
        Some((next - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_joined())?;
        if let Some(days) = self.days_to_birthday() {
            write!(f, ", Days to birthday: {}", days)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> Phone {
        Phone::new(s).unwrap()
    }

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_birthday(s: &str) -> Record {
        record("Jane").with_birthday(Some(Birthday::new(s).unwrap()))
    }

    #[test]
    fn add_phone_is_idempotent() {
        let mut rec = record("John");
        assert!(rec.add_phone(phone("1234567890")));
        assert!(!rec.add_phone(phone("1234567890")));
        assert_eq!(rec.phones, vec![phone("1234567890")]);
    }

    #[test]
    fn add_phone_keeps_insertion_order() {
        let rec = record("John")
            .with_phone(phone("1234567890"))
            .with_phone(phone("0987654321"));
        assert_eq!(rec.phones_joined(), "1234567890, 0987654321");
    }

    #[test]
    fn change_phone_replaces_in_place() {
        let mut rec = record("John")
            .with_phone(phone("1234567890"))
            .with_phone(phone("0987654321"));
        assert!(rec.change_phone(&phone("1234567890"), phone("1112223333")));
        assert_eq!(rec.phones_joined(), "1112223333, 0987654321");
    }

    #[test]
    fn change_phone_reports_missing_old_phone() {
        let mut rec = record("John").with_phone(phone("1234567890"));
        assert!(!rec.change_phone(&phone("9999999999"), phone("1112223333")));
        assert_eq!(rec.phones_joined(), "1234567890");
    }

    #[test]
    fn change_name_returns_previous_name() {
        let mut rec = record("John");
        let old = rec.change_name(Name::new("Johnny").unwrap());
        assert_eq!(old.as_str(), "John");
        assert_eq!(rec.name.as_str(), "Johnny");
    }

    #[test]
    fn days_to_birthday_is_none_without_birthday() {
        assert_eq!(record("John").days_to_birthday_from(date(2024, 5, 1)), None);
        assert_eq!(record("John").days_to_birthday(), None);
    }

    #[test]
    fn days_to_birthday_is_zero_on_the_day() {
        let rec = with_birthday("15-03-1990");
        assert_eq!(rec.days_to_birthday_from(date(2024, 3, 15)), Some(0));
    }

    #[test]
    fn days_to_birthday_later_this_year() {
        let rec = with_birthday("15-03-1990");
        assert_eq!(rec.days_to_birthday_from(date(2025, 3, 1)), Some(14));
    }

    #[test]
    fn days_to_birthday_rolls_over_to_next_year() {
        let rec = with_birthday("15-03-1990");
        // 2025-03-16 -> 2026-03-15
        assert_eq!(rec.days_to_birthday_from(date(2025, 3, 16)), Some(364));
        // crossing a leap February: 2023-03-16 -> 2024-03-15
        assert_eq!(rec.days_to_birthday_from(date(2023, 3, 16)), Some(365));
    }

    #[test]
    fn leap_day_birthday_in_common_year() {
        let rec = with_birthday("29-02-2000");
        assert_eq!(rec.days_to_birthday_from(date(2025, 2, 28)), Some(0));
        assert_eq!(rec.days_to_birthday_from(date(2025, 2, 1)), Some(27));
        assert_eq!(rec.days_to_birthday_from(date(2024, 2, 29)), Some(0));
        // 2024-03-01 -> 2025-02-28
        assert_eq!(rec.days_to_birthday_from(date(2024, 3, 1)), Some(364));
    }

    #[test]
    fn display_lists_phones() {
        let rec = record("John")
            .with_phone(phone("1234567890"))
            .with_phone(phone("0987654321"));
        assert_eq!(rec.to_string(), "John: 1234567890, 0987654321");
    }

    #[test]
    fn display_appends_days_to_birthday() {
        let rec = with_birthday("15-03-1990").with_phone(phone("5551234567"));
        let days = rec.days_to_birthday().unwrap();
        assert_eq!(
            rec.to_string(),
            format!("Jane: 5551234567, Days to birthday: {}", days)
        );
    }
}
