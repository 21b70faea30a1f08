use crate::constants::{DEFAULT_MAX_ORDER, DEFAULT_PORT, DEFAULT_SHUTDOWN_GRACE_SECONDS};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Every configuration section of the service.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub packing: PackingConfig,
    pub logging: LoggingConfig,
}

/// Arc-wrapped configuration, cheap to clone into handlers and subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// How long in-flight requests may run after a shutdown signal.
    pub shutdown_grace_seconds: u64,
}

/// Solver limits. The pack catalog itself is fixed and not configurable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackingConfig {
    pub max_order: u64,
}

/// Subscriber settings handed to the logger at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive: `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub level: String,
    pub console: bool,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
    /// Explicit `EnvFilter` directives, taking precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            shutdown_grace_seconds: DEFAULT_SHUTDOWN_GRACE_SECONDS,
        }
    }
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self { max_order: DEFAULT_MAX_ORDER }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            directory: None,
            json: false,
            env_filter: None,
        }
    }
}
