use crate::commands::list::EMPTY_BOOK_MESSAGE;
use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::error::Result;
use crate::store::AddressBook;

pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK_MESSAGE)));
    }
    let pages = book.pages(page_size).map(<[_]>::to_vec).collect();
    Ok(CmdResult::default().with_listing(Listing::Pages(pages)))
}
