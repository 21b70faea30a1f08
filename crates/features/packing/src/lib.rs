//! Packing feature slice: pack catalog, order validation and the two packing
//! policies, plus the `/correct` and `/incorrect` routes behind the `server` feature.

mod catalog;
mod error;
mod order;
mod plan;
pub mod policy;
#[cfg(feature = "server")]
pub mod server;

pub use crate::catalog::PackCatalog;
pub use crate::error::{PackingError, PackingErrorExt};
pub use crate::order::Order;
pub use crate::plan::PackPlan;
pub use crate::policy::{CorrectPolicy, IncorrectPolicy, PackPolicy};

use packwise_kernel::domain::config::PackingConfig;
use packwise_kernel::domain::registry::InitializedSlice;

/// Packing feature state: the catalog and the order ceiling, shared read-only.
#[packwise_derive::packwise_slice]
pub struct Packing {
    pub catalog: PackCatalog,
    pub max_order: u64,
}

impl Packing {
    /// Builds the slice from configuration over the standard catalog.
    ///
    /// # Errors
    /// Returns [`PackingError::Config`] when `max_order` is zero.
    pub fn from_config(config: &PackingConfig) -> Result<Self, PackingError> {
        Self::with_catalog(PackCatalog::standard(), config.max_order)
    }

    /// # Errors
    /// Returns [`PackingError::Config`] when `max_order` is zero.
    pub fn with_catalog(catalog: PackCatalog, max_order: u64) -> Result<Self, PackingError> {
        if max_order == 0 {
            return Err(PackingError::Config {
                message: "max_order must be at least 1".into(),
                context: Some("packing.max_order".into()),
            });
        }
        Ok(Self::new(PackingInner { catalog, max_order }))
    }

    /// Validates a raw `x` value against the order rules and the ceiling.
    ///
    /// # Errors
    /// Returns [`PackingError::InvalidOrder`] with the client-facing message.
    pub fn order(&self, raw: Option<&str>) -> Result<Order, PackingError> {
        Order::parse(raw)?.at_most(self.max_order)
    }

    /// The greedy, consolidated plan for a raw `x`.
    ///
    /// # Errors
    /// See [`Packing::order`] and [`PackPolicy::solve`].
    pub fn correct(&self, raw: Option<&str>) -> Result<PackPlan, PackingError> {
        self.solve(&CorrectPolicy, raw)
    }

    /// The suboptimal single-size baseline for a raw `x`.
    ///
    /// # Errors
    /// See [`Packing::order`] and [`PackPolicy::solve`].
    pub fn incorrect(&self, raw: Option<&str>) -> Result<Vec<PackPlan>, PackingError> {
        self.solve(&IncorrectPolicy, raw)
    }

    /// Validates a raw `x` and runs any policy over this slice's catalog.
    ///
    /// # Errors
    /// See [`Packing::order`] and [`PackPolicy::solve`].
    pub fn solve<P: PackPolicy>(&self, policy: &P, raw: Option<&str>) -> Result<P::Output, PackingError> {
        let order = self.order(raw)?;
        tracing::debug!(policy = policy.name(), order = %order, "solving order");
        policy.solve(&self.catalog, order).context(policy.name())
    }
}

/// Initialize the packing feature.
///
/// # Errors
/// Returns [`PackingError::Config`] when the packing configuration is unusable.
pub fn init(config: &PackingConfig) -> Result<InitializedSlice, PackingError> {
    let slice = Packing::from_config(config)?;

    tracing::info!(
        sizes = ?slice.catalog.sizes(),
        max_order = slice.max_order,
        "Packing slice initialized"
    );

    Ok(InitializedSlice::new(slice))
}
