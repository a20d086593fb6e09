use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Phone};
use crate::store::AddressBook;

pub fn run(book: &mut AddressBook, name: &Name, old: &Phone, new: Phone) -> Result<CmdResult> {
    let Some(record) = book.get_mut(name.as_str()) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "No contact {} in address book",
            name
        ))));
    };

    let message = if record.change_phone(old, new.clone()) {
        CmdMessage::success(format!(
            "Phone {} changed to {} for contact {}",
            old, new, record.name
        ))
    } else {
        CmdMessage::warning(format!(
            "Phone {} not found for contact {}",
            old, record.name
        ))
    };

    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_records(vec![record.clone()]))
}
