use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Name;
use crate::store::{AddressBook, RenameOutcome};

/// Renames a contact. The book is re-keyed so the contact is found under its new name.
pub fn run(book: &mut AddressBook, name: &Name, new_name: Name) -> Result<CmdResult> {
    let outcome = book.rename(name.as_str(), new_name.clone());
    let message = match outcome {
        RenameOutcome::Renamed => {
            CmdMessage::success(format!("Contact {} renamed to {}", name, new_name))
        }
        RenameOutcome::NotFound => {
            CmdMessage::warning(format!("No contact {} in address book", name))
        }
        RenameOutcome::NameTaken => {
            CmdMessage::warning(format!("Contact {} already exists", new_name))
        }
    };

    let affected = match outcome {
        RenameOutcome::Renamed => book.get(new_name.as_str()).cloned().into_iter().collect(),
        _ => Vec::new(),
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_records(affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fixtures::BookFixture;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    #[test]
    fn renames_and_rekeys() {
        let mut book = BookFixture::new()
            .with_contact("John", &["1234567890"])
            .book;
        let result = run(&mut book, &name("John"), name("Johnny")).unwrap();

        assert_eq!(result.messages[0].content, "Contact John renamed to Johnny");
        assert!(book.get("John").is_none());
        assert_eq!(book.get("Johnny").unwrap().phones_joined(), "1234567890");
        assert_eq!(result.affected_records.len(), 1);
    }

    #[test]
    fn unknown_contact_is_reported() {
        let mut book = AddressBook::new();
        let result = run(&mut book, &name("John"), name("Johnny")).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "No contact John in address book");
    }

    #[test]
    fn taken_name_is_refused() {
        let mut book = BookFixture::new()
            .with_contact("John", &["1234567890"])
            .with_contact("Jane", &["5551234567"])
            .book;
        let result = run(&mut book, &name("John"), name("Jane")).unwrap();

        assert_eq!(result.messages[0].content, "Contact Jane already exists");
        assert_eq!(book.get("John").unwrap().phones_joined(), "1234567890");
        assert_eq!(book.get("Jane").unwrap().phones_joined(), "5551234567");
        assert!(result.affected_records.is_empty());
    }
}
