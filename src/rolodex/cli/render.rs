//! # Rendering
//!
//! Turns a [`CmdResult`] into the text printed after each command. Everything here
//! returns strings; the session decides where they go.
//!
//! - Search hits: a two-column table (`Name`, `Phone number`).
//! - Full listing: adds a dimmed `Birthday` column, `N/A` when unset.
//! - Pages: one full-listing table per page, each titled `Page N:`.
//! - Messages: one line each, coloured by level.

use super::styles::{names, ROLODEX_THEME};
use boxtable::Table;
use colored::Colorize;
use rolodex::api::{CmdMessage, CmdResult, HelpEntry, Listing, MessageLevel};
use rolodex::record::Record;

const NO_BIRTHDAY: &str = "N/A";

pub(super) fn render_result(result: &CmdResult, use_color: bool) -> String {
    let mut out = String::new();
    if let Some(listing) = &result.listing {
        out.push_str(&render_listing(listing, use_color));
    }
    out.push_str(&render_messages(&result.messages, use_color));
    out
}

pub(super) fn render_error(error: &impl std::fmt::Display, use_color: bool) -> String {
    render_messages(&[CmdMessage::error(error.to_string())], use_color)
}

fn render_listing(listing: &Listing, use_color: bool) -> String {
    match listing {
        Listing::Matches(records) => render_matches(records, use_color),
        Listing::All(records) => render_contacts(records, use_color),
        Listing::Pages(pages) => render_pages(pages, use_color),
        Listing::Help(entries) => render_help(entries, use_color),
    }
}

fn render_matches(records: &[Record], use_color: bool) -> String {
    let mut table = Table::new().header_style(names::HEADER);
    table.add_column("Name").add_column("Phone number");
    for record in records {
        table.add_row([record.name.to_string(), record.phones_joined()]);
    }
    table.render_with_color(&ROLODEX_THEME, use_color)
}

fn render_contacts(records: &[Record], use_color: bool) -> String {
    let mut table = Table::new().header_style(names::HEADER);
    table
        .add_column("Name")
        .add_column("Phone number")
        .add_styled_column("Birthday", names::BIRTHDAY);
    for record in records {
        let birthday = record
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string());
        table.add_row([record.name.to_string(), record.phones_joined(), birthday]);
    }
    table.render_with_color(&ROLODEX_THEME, use_color)
}

fn render_pages(pages: &[Vec<Record>], use_color: bool) -> String {
    let mut out = String::new();
    for (i, page) in pages.iter().enumerate() {
        let title = format!("Page {}:", i + 1);
        out.push_str(&ROLODEX_THEME.paint(names::PAGE_TITLE, &title, use_color));
        out.push('\n');
        out.push_str(&render_contacts(page, use_color));
    }
    out
}

fn render_help(entries: &[HelpEntry], use_color: bool) -> String {
    let mut table = Table::new().header_style(names::HEADER);
    table
        .add_styled_column("Command", names::ALIASES)
        .add_column("Arguments")
        .add_column("Description");
    for entry in entries {
        table.add_row([
            entry.aliases.as_str(),
            entry.usage.as_str(),
            entry.summary.as_str(),
        ]);
    }
    table.render_with_color(&ROLODEX_THEME, use_color)
}

fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let line = if use_color {
            match message.level {
                MessageLevel::Info => message.content.dimmed().to_string(),
                MessageLevel::Success => message.content.green().to_string(),
                MessageLevel::Warning => message.content.yellow().to_string(),
                MessageLevel::Error => message.content.red().to_string(),
            }
        } else {
            message.content.clone()
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
