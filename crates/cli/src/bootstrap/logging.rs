use dnsrec_domain::config::LoggingConfig;
use tracing::info;

pub fn init_logging(config: &LoggingConfig) {
    let log_level = config.level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Logging initialized at level: {}", config.level);
}
