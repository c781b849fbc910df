use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Output goes to stderr and is filtered by
/// `RUST_LOG`, which defaults to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("DISABLE_COLOR").is_none())
        .init();
}
