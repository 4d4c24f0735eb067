use tracing_subscriber::EnvFilter;

/// Installs the process-wide `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Records from the `log` facade (the
/// actix `Logger` middleware) are forwarded into the same subscriber. Safe to
/// call more than once; later calls are no-ops.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
