//! Logging setup.

/// Installs a stderr subscriber honouring `RUST_LOG` (default `info`).
///
/// `verbose` lowers the default to `debug` so engine search statistics show.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
