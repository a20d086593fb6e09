//! # Startup
//!
//! `run()` resolves settings in this order, later wins:
//!
//! 1. Built-in defaults (`page_size` 2, prompt `--->>> `, colour on)
//! 2. `config.json` in `--config-dir`, or in the platform config directory
//! 3. Flags: `--page-size`, `--no-color`
//!
//! Colour is also switched off when stdout is not a terminal. Then the address book is
//! created, handed to the API facade, and the session runs on stdin/stdout.

use super::logging;
use super::session::Session;
use super::setup::Cli;
use boxtable::stdout_supports_color;
use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::RolodexApi;
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::store::AddressBook;
use std::io;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: RolodexApi,
    prompt: String,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;
    if !ctx.use_color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let mut session = Session::new(ctx.api, ctx.prompt, ctx.use_color);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli)?;
    debug!(dir = %config_dir.display(), "loading config");
    let config = RolodexConfig::load(&config_dir)?;

    let page_size = cli.page_size.unwrap_or(config.page_size).get();
    let use_color = config.color && !cli.no_color && stdout_supports_color();
    debug!(page_size, use_color, "session settings");

    let api = RolodexApi::new(AddressBook::new()).with_page_size(page_size);
    Ok(AppContext {
        api,
        prompt: config.prompt,
        use_color,
    })
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Config("Could not determine config dir".to_string()))
}
