use crate::error::PackingError;
use packwise_domain::constants::STANDARD_PACK_SIZES;
use serde::Serialize;

/// The pack sizes an order can be fulfilled with, largest first.
///
/// A catalog is never empty and never contains a zero size, so every order of at
/// least one item has a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackCatalog {
    sizes: Vec<u32>,
}

impl PackCatalog {
    /// The fixed catalog `{5000, 2000, 1000, 500, 250}`.
    #[must_use]
    pub fn standard() -> Self {
        Self { sizes: STANDARD_PACK_SIZES.to_vec() }
    }

    /// Builds a catalog from sizes in any order; duplicates are dropped.
    ///
    /// # Errors
    /// Returns [`PackingError::Catalog`] for an empty list or a zero size.
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> Result<Self, PackingError> {
        let mut sizes: Vec<u32> = sizes.into_iter().collect();
        if sizes.contains(&0) {
            return Err(PackingError::catalog("pack sizes must be positive"));
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();
        if sizes.is_empty() {
            return Err(PackingError::catalog("at least one pack size is required"));
        }
        Ok(Self { sizes })
    }

    /// Sizes in descending order.
    #[must_use]
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.sizes.iter().copied()
    }

    #[must_use]
    pub fn largest(&self) -> u32 {
        self.sizes.first().copied().expect("catalog is never empty")
    }

    #[must_use]
    pub fn smallest(&self) -> u32 {
        self.sizes.last().copied().expect("catalog is never empty")
    }

    #[must_use]
    pub fn contains(&self, size: u32) -> bool {
        self.sizes.contains(&size)
    }
}

impl Default for PackCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
