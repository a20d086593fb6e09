use crate::record::Record;

pub mod add;
pub mod change;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod page;
pub mod session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Records a command wants displayed, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Search hits: name and phones.
    Matches(Vec<Record>),
    /// Every contact: name, phones and birthday.
    All(Vec<Record>),
    /// Every contact split into numbered pages.
    Pages(Vec<Vec<Record>>),
    /// Command reference: (aliases, usage, summary).
    Help(Vec<HelpEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub aliases: String,
    pub usage: String,
    pub summary: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listing: Option<Listing>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }
}
