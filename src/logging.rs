use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sumcheck=info";

/// Filter from `RUST_LOG`, or `sumcheck=info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Loads `.env` and installs the stderr subscriber.
///
/// `.env` must be read first so it can set `RUST_LOG`.
pub fn init() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .init();
}
