use kube_owners_domain::LoggingConfig;
use tracing::info;

/// Installs the global fmt subscriber. Returns `false` when a subscriber
/// was already installed by the host process.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let log_level = config.level.parse().unwrap_or(tracing::Level::INFO);

    let installed = tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .try_init()
        .is_ok();

    if installed {
        info!("Logging initialized at level: {}", config.level);
    }

    installed
}
