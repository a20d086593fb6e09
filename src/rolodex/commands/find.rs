use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::error::Result;
use crate::record::Record;
use crate::store::AddressBook;

/// Case-insensitive substring search over names and phones, in book order.
pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let needle = query.to_lowercase();
    let matches: Vec<Record> = book
        .records()
        .iter()
        .filter(|record| {
            record.name.as_str().to_lowercase().contains(&needle)
                || record.has_phone_containing(&needle)
        })
        .cloned()
        .collect();

    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No records found for the query: {}",
            query
        ))));
    }
    Ok(CmdResult::default().with_listing(Listing::Matches(matches)))
}
