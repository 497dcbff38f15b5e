use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global diagnostics subscriber.
///
/// Diagnostics go to stderr so stdout carries only probe results.
pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = std::env::var("SIGSWEEP_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
