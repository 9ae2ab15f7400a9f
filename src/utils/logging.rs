use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Init logging from `RUST_LOG`, falling back to debug output for this crate.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "dex_scanner=debug,info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
