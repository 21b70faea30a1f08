use anyhow::{Context, Result};
use packwise::domain::config::LoggingConfig;
use packwise_logger::{LevelFilter, Logger};

/// Installs the global subscriber described by the `logging` section.
///
/// # Errors
/// Returns an error for an unknown level or when the subscriber cannot be installed.
pub fn init_logging(name: &str, cfg: &LoggingConfig) -> Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid logging.level '{}'", cfg.level))?;

    let mut builder = Logger::builder().name(name).level(level).console(cfg.console).json(cfg.json);
    if let Some(directory) = &cfg.directory {
        builder = builder.directory(directory);
    }
    if let Some(filter) = &cfg.env_filter {
        builder = builder.env_filter(filter);
    }

    builder.init().context("Failed to initialize logging")
}
