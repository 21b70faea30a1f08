//! Facade crate for packwise features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and holds no packing logic.
//!
//! ## Usage
//! - Add `packwise` with the `server` feature for the HTTP surface.
//! - Call `packwise::init` to build the feature slices registered in the API state.

pub use packwise_domain as domain;
use packwise_domain::config::ApiConfig;
pub use packwise_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use packwise_kernel::server::router::system_router;
        pub use packwise_packing::server::router as packing_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use packwise_packing as packing;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "packing",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::packing::init(&config.packing)?];

    Ok(slices)
}
