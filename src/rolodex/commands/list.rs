use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::error::Result;
use crate::store::AddressBook;

pub const EMPTY_BOOK_MESSAGE: &str = "No contacts saved.";

/// Every contact, in insertion order.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK_MESSAGE)));
    }
    Ok(CmdResult::default().with_listing(Listing::All(book.records().to_vec())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::BookFixture;

    #[test]
    fn lists_everything_in_order() {
        let book = BookFixture::new().with_contacts(3).book;
        let result = run(&book).unwrap();
        match result.listing {
            Some(Listing::All(records)) => {
                let names: Vec<_> = records.iter().map(|r| r.name.to_string()).collect();
                assert_eq!(names, vec!["Contact 1", "Contact 2", "Contact 3"]);
            }
            other => panic!("expected full listing, got {:?}", other),
        }
    }

    #[test]
    fn empty_book_yields_message() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listing.is_none());
        assert_eq!(result.messages[0].content, EMPTY_BOOK_MESSAGE);
    }
}
