//! Fixed values shared across crates.

/// The fixed pack catalog, largest first.
pub const STANDARD_PACK_SIZES: [u32; 5] = [5000, 2000, 1000, 500, 250];

/// Orders above this quantity are rejected unless the configuration raises it.
pub const DEFAULT_MAX_ORDER: u64 = 1_000_000;

pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_SHUTDOWN_GRACE_SECONDS: u64 = 5;

/// `OpenAPI` tag for health and diagnostics routes.
pub const SYSTEM_TAG: &str = "System";

/// `OpenAPI` tag for the pack solver routes.
pub const PACKING_TAG: &str = "Packing";
