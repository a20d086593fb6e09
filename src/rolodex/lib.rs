//! # Rolodex Architecture
//!
//! Rolodex is an interactive address book: contacts with phone numbers and optional
//! birthdays, kept in memory for one session and driven by short typed commands
//! (`add John 1234567890`, `find jo`, `show all`, ...).
//!
//! The library holds everything except the terminal. The binary reads lines, hands
//! them to the library, and renders what comes back.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, config, logging, the prompt loop, table output    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  input line
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs)                                         │
//! │  - Alias table, prefix matching, positional arguments       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  ParsedInput
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook                                     │
//! │  - Validates text into Name / Phone / Birthday              │
//! │  - Returns Result<CmdResult>                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure logic over the book       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - AddressBook: name-keyed, insertion-ordered, paginated    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors Versus Outcomes
//!
//! Bad input (a malformed phone or birthday, a missing argument) is a
//! [`error::RolodexError`]. Looking for something that isn't there (no such contact,
//! no such phone) is not an error: the command succeeds with a warning message. The
//! session loop prints errors and keeps going, so no input can end a session except
//! the exit command.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`parser`]: Command aliases and input parsing
//! - [`commands`]: Business logic for each command
//! - [`store`]: The address book and its pagination
//! - [`record`]: A single contact
//! - [`model`]: Field value types (`Name`, `Phone`, `Birthday`)
//! - [`config`]: Session configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod record;
pub mod store;
