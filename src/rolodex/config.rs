use crate::error::{Result, RolodexError};
use crate::store::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_PROMPT: &str = "--->>> ";

/// Session settings, stored in `config.json` inside the config directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Contacts per table for the `page` command
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,

    /// Text shown before each input line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to colour output when the terminal supports it
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            prompt: default_prompt(),
            color: default_color(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RolodexConfig = serde_json::from_str(&content).map_err(|e| {
            RolodexError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }
}
