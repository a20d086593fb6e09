//! # API Facade
//!
//! [`RolodexApi`] owns the [`AddressBook`] for a session and is the single entry point
//! for every operation. It is deliberately thin:
//!
//! - **Validates** raw text into field types (`Name`, `Phone`, `Birthday`)
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns** `Result<CmdResult>`; it never prints
//!
//! [`RolodexApi::dispatch`] takes a [`ParsedInput`] straight from the parser, pulls
//! positional arguments out of it, and reports a missing one as
//! [`RolodexError::MissingArgument`]. Extra arguments are ignored.
//!
//! Errors are returned, not displayed; the session loop decides how to show them.

use crate::commands;
use crate::error::{Result, RolodexError};
use crate::model::{Birthday, Name, Phone};
use crate::parser::{Command, ParsedInput};
use crate::store::{AddressBook, DEFAULT_PAGE_SIZE};
use tracing::debug;

pub struct RolodexApi {
    book: AddressBook,
    page_size: usize,
}

impl Default for RolodexApi {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl RolodexApi {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        let name = Name::new(name)?;
        let phone = Phone::new(phone)?;
        let birthday = birthday.map(Birthday::new).transpose()?;
        commands::add::run(&mut self.book, name, phone, birthday)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let name = Name::new(name)?;
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;
        commands::change::run(&mut self.book, &name, &old, new)
    }

    pub fn rename_contact(&mut self, name: &str, new_name: &str) -> Result<CmdResult> {
        let name = Name::new(name)?;
        let new_name = Name::new(new_name)?;
        commands::edit::run(&mut self.book, &name, new_name)
    }

    pub fn delete_contact(&mut self, name: Option<&str>) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn find_contacts(&self, query: &str) -> Result<CmdResult> {
        commands::find::run(&self.book, query)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn show_pages(&self) -> Result<CmdResult> {
        commands::page::run(&self.book, self.page_size)
    }

    /// Runs a parsed input line. Unknown commands produce an empty result.
    pub fn dispatch(&mut self, input: &ParsedInput) -> Result<CmdResult> {
        debug!(command = %input.command, args = ?input.args, "dispatching");
        let args = Args(&input.args);
        match input.command {
            Command::Add => self.add_contact(
                args.required(0, "name")?,
                args.required(1, "phone")?,
                args.optional(2),
            ),
            Command::Change => self.change_phone(
                args.required(0, "name")?,
                args.required(1, "old phone")?,
                args.required(2, "new phone")?,
            ),
            Command::Edit => {
                self.rename_contact(args.required(0, "name")?, args.required(1, "new name")?)
            }
            Command::Delete => self.delete_contact(args.optional(0)),
            Command::Find => self.find_contacts(args.required(0, "query")?),
            Command::ShowAll => self.show_all(),
            Command::Page => self.show_pages(),
            Command::Hello => Ok(commands::session::hello()),
            Command::Help => Ok(commands::session::help()),
            Command::Exit => Ok(commands::session::goodbye()),
            Command::Unknown => Ok(CmdResult::default()),
        }
    }
}

struct Args<'a>(&'a [String]);

impl<'a> Args<'a> {
    fn required(&self, position: usize, what: &'static str) -> Result<&'a str> {
        self.optional(position)
            .ok_or(RolodexError::MissingArgument(what))
    }

    fn optional(&self, position: usize) -> Option<&'a str> {
        self.0.get(position).map(String::as_str)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, HelpEntry, Listing, MessageLevel};
