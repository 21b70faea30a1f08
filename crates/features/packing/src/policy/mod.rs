//! Packing policies: how an order is turned into packs.

mod correct;
mod incorrect;

pub use correct::CorrectPolicy;
pub use incorrect::IncorrectPolicy;

use crate::catalog::PackCatalog;
use crate::error::PackingError;
use crate::order::Order;

/// A way of packing an order from a catalog.
///
/// Implementations are stateless and cheap to share between requests.
pub trait PackPolicy: Send + Sync {
    type Output;

    /// Short name used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// # Errors
    /// Returns [`PackingError::Internal`] when the arithmetic cannot be carried out.
    fn solve(&self, catalog: &PackCatalog, order: Order) -> Result<Self::Output, PackingError>;

    /// Validates a raw quantity, then solves it.
    ///
    /// # Errors
    /// Returns [`PackingError::InvalidOrder`] for `quantity < 1`, or any error of
    /// [`PackPolicy::solve`].
    fn solve_quantity(
        &self,
        catalog: &PackCatalog,
        quantity: i64,
    ) -> Result<Self::Output, PackingError> {
        self.solve(catalog, Order::new(quantity)?)
    }
}
