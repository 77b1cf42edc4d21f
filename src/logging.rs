use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs a global fmt subscriber filtered by `config.log_filter`.
/// Returns `false` if a subscriber was already installed.
pub fn init(config: &Config) -> bool {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
