use hostd_domain::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
