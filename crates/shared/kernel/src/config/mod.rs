use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `PACKWISE__SERVER__PORT=9090`.
pub const ENV_PREFIX: &str = "PACKWISE";
/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "PACKWISE_CONFIG";
/// File stem used when nothing else is given; any supported extension matches.
pub const DEFAULT_CONFIG_STEM: &str = "server";

#[packwise_derive::packwise_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Resolves the configuration file: explicit path, then `PACKWISE_CONFIG`, then `server`.
#[must_use]
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(
        || std::env::var_os(CONFIG_PATH_VAR).map_or_else(|| DEFAULT_CONFIG_STEM.into(), PathBuf::from),
        Path::to_path_buf,
    )
}

/// Loads `T` from an optional file layered with `PACKWISE__*` environment variables.
///
/// The file is optional: a missing file leaves every field at its serde default.
/// Nested keys use a double underscore, so `PACKWISE__PACKING__MAX_ORDER` maps to
/// `packing.max_order`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is malformed or a value does not
/// fit the target type.
///
/// # Example
/// ```rust
/// use packwise_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("does/not/exist")).unwrap_or_default();
/// assert_eq!(cfg.port, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], reading overrides from `vars` instead of the process
/// environment when given.
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<HashMap<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = config_path(path.as_ref().map(AsRef::as_ref));
    info!(path = %path.display(), "Loading configuration");

    let overrides = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .source(vars);

    let config = Config::builder()
        .add_source(File::from(path.as_path()).required(false))
        .add_source(overrides)
        .build()
        .context("building configuration sources")?;

    debug!("Configuration sources merged");

    config.try_deserialize::<T>().context("deserializing configuration")
}
