use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// The verbosity flag raises the default filter; an explicit `RUST_LOG`
/// wins. Logs stay on stderr so stdout carries only machine-readable
/// output (`--dry-run`, `version --json`).
pub fn init(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
