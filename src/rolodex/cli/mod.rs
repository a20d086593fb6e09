//! # CLI Behavior
//!
//! This is the terminal client for the rolodex library. It is the only place that
//! knows about stdin, stdout, colours and exit codes.
//!
//! ## Session
//!
//! `rolodex` starts an interactive session: it prints the prompt (`--->>> ` unless
//! configured otherwise), reads one line, runs it, prints the outcome, and repeats
//! until `bye`/`exit`/`end`/`0` or end of input. Type `help` for the command list.
//!
//! Errors from a command (bad phone, bad date, missing argument) are printed in red
//! and the session carries on.
//!
//! ## Module Structure
//!
//! - `commands`: Startup: flags, config, logging, then the session
//! - `session`: The read–dispatch–print loop
//! - `render`: Tables and messages as strings
//! - `setup`: Argument parsing via clap
//! - `styles`: Named table styles
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
mod session;
mod setup;
mod styles;

pub use commands::run;
