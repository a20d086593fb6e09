//! # Rolodex CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/rolodex/cli/)                               │
//! │  - clap flags (setup.rs)                                    │
//! │  - config + logging + context wiring (commands.rs)          │
//! │  - the prompt loop (session.rs)                             │
//! │  - tables and coloured messages (render.rs, styles.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!             rolodex::parser → rolodex::api → commands → store
//! ```
//!
//! Everything below the CLI takes plain values and returns plain values. The CLI owns
//! every user-facing concern: reading input, showing errors, choosing colours, and the
//! exit status (0 after `exit` or end of input, 1 when startup or terminal I/O fails).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
