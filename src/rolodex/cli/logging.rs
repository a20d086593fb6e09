use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never mix with the session on stdout. `RUST_LOG` wins
/// over `--verbose`.
pub(super) fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
