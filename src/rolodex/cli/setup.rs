use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version)]
#[command(about = "Interactive command-line address book", long_about = None)]
pub struct Cli {
    /// Contacts per table for the `page` command
    #[arg(long, value_name = "N")]
    pub page_size: Option<NonZeroUsize>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["rolodex"]).unwrap();
        assert!(cli.page_size.is_none());
        assert!(!cli.no_color);
        assert!(!cli.verbose);
        assert!(cli.config_dir.is_none());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "rolodex",
            "--page-size",
            "5",
            "--no-color",
            "-v",
            "--config-dir",
            "/tmp/rolodex",
        ])
        .unwrap();
        assert_eq!(cli.page_size.map(NonZeroUsize::get), Some(5));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/rolodex")));
    }

    #[test]
    fn rejects_zero_page_size() {
        assert!(Cli::try_parse_from(["rolodex", "--page-size", "0"]).is_err());
    }
}
