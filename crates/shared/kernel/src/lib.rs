//! Kernel utilities shared by the packwise apps and feature slices.
//!
//! * [`config::load_config`] layers a TOML file with `PACKWISE__*` environment overrides.
//! * `server` (feature `server`) holds [`server::ApiState`] and the system router.

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use packwise_domain as domain;
