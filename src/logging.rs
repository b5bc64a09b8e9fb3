// src/logging.rs

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "hedaya_icons=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Warn,
        }
    }
}

static INIT: Once = Once::new();

/// Pick the filter string: an explicit filter wins over `env` (the value of
/// `RUST_LOG`), which wins over `default_level`.
pub fn resolve_filter(config: &LoggingConfig, env: Option<String>) -> String {
    config
        .env_filter
        .clone()
        .or(env)
        .unwrap_or_else(|| config.default_level.to_string().to_lowercase())
}

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.format_timestamp(None);
        builder.init();

        log::debug!("logging initialized with filter {:?}", filter);
    });
}
