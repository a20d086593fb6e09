//! Commands that don't touch the address book.

use crate::commands::{CmdMessage, CmdResult, HelpEntry, Listing};
use crate::parser::COMMANDS;

pub fn hello() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("How can I help you?"))
}

pub fn goodbye() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("Good bye!"))
}

pub fn help() -> CmdResult {
    let entries = COMMANDS
        .iter()
        .map(|(command, aliases)| HelpEntry {
            aliases: aliases.join(", "),
            usage: command.usage().to_string(),
            summary: command.summary().to_string(),
        })
        .collect();
    CmdResult::default().with_listing(Listing::Help(entries))
}
