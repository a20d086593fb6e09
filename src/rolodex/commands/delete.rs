use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AddressBook;

pub fn run(book: &mut AddressBook, name: Option<&str>) -> Result<CmdResult> {
    let Some(name) = name else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "Please provide a name to delete the contact.",
        )));
    };

    let result = match book.delete_record(name) {
        Some(record) => CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Contact with name '{}' deleted successfully",
                name
            )))
            .with_affected_records(vec![record]),
        None => CmdResult::default().with_message(CmdMessage::warning(format!(
            "No contact with name '{}' in address book",
            name
        ))),
    };
    Ok(result)
}
