use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Birthday, Name, Phone};
use crate::record::Record;
use crate::store::AddressBook;

/// Creates a contact, or adds `phone` to the contact that already has `name`.
///
/// The birthday only applies to new contacts; for an existing one it is reported as
/// ignored and the stored birthday stays as it was.
pub fn run(
    book: &mut AddressBook,
    name: Name,
    phone: Phone,
    birthday: Option<Birthday>,
) -> Result<CmdResult> {
    if let Some(record) = book.get_mut(name.as_str()) {
        let mut result = CmdResult::default();
        if record.add_phone(phone.clone()) {
            result.add_message(CmdMessage::success(format!(
                "phone {} add to contact {}",
                phone, record.name
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "{} present in phones of contact {}",
                phone, record.name
            )));
        }
        if birthday.is_some() {
            result.add_message(CmdMessage::warning(format!(
                "Contact {} already exists, birthday ignored",
                record.name
            )));
        }
        return Ok(result.with_affected_records(vec![record.clone()]));
    }

    let record = Record::new(name).with_phone(phone).with_birthday(birthday);
    let message = CmdMessage::success(format!("Contact {} added", record));
    book.add_record(record.clone());
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    fn phone(s: &str) -> Phone {
        Phone::new(s).unwrap()
    }

    #[test]
    fn creates_new_contact() {
        let mut book = AddressBook::new();
        let result = run(&mut book, name("John"), phone("1234567890"), None).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Contact John: 1234567890 added");
        assert_eq!(book.get("John").unwrap().phones_joined(), "1234567890");
    }

    #[test]
    fn second_add_appends_phone() {
        let mut book = AddressBook::new();
        run(&mut book, name("John"), phone("1234567890"), None).unwrap();
        let result = run(&mut book, name("John"), phone("0987654321"), None).unwrap();

        assert_eq!(
            result.messages[0].content,
            "phone 0987654321 add to contact John"
        );
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.get("John").unwrap().phones_joined(),
            "1234567890, 0987654321"
        );
    }

    #[test]
    fn duplicate_phone_is_reported_not_added() {
        let mut book = AddressBook::new();
        run(&mut book, name("John"), phone("1234567890"), None).unwrap();
        let result = run(&mut book, name("John"), phone("1234567890"), None).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(
            result.messages[0].content,
            "1234567890 present in phones of contact John"
        );
        assert_eq!(book.get("John").unwrap().phones.len(), 1);
    }

    #[test]
    fn new_contact_keeps_birthday() {
        let mut book = AddressBook::new();
        let birthday = Birthday::new("15-03-1990").unwrap();
        let result = run(&mut book, name("Jane"), phone("5551234567"), Some(birthday)).unwrap();

        assert_eq!(book.get("Jane").unwrap().birthday, Some(birthday));
        assert!(result.messages[0].content.contains("Days to birthday"));
    }

    #[test]
    fn birthday_for_existing_contact_is_ignored() {
        let mut book = AddressBook::new();
        run(&mut book, name("Jane"), phone("5551234567"), None).unwrap();
        let birthday = Birthday::new("15-03-1990").unwrap();
        let result = run(&mut book, name("Jane"), phone("5559876543"), Some(birthday)).unwrap();

        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(book.get("Jane").unwrap().birthday, None);
        assert_eq!(book.get("Jane").unwrap().phones.len(), 2);
    }
}
