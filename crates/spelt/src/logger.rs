use tracing_subscriber::EnvFilter;

/// The environment variable controlling the diagnostics of the harness.
pub const LOG_ENV: &str = "SPELT_LOG";

/// Install a `tracing` subscriber writing the diagnostics of the harness to
/// the standard error stream.
///
/// The filter is read from `SPELT_LOG` and defaults to `warn`, so the
/// results written to the standard output stay clean. Nothing happens if a
/// global subscriber has already been set.
pub fn init_logger() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
