use crate::error::PackingError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A validated order quantity: at least one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Order(u64);

impl Order {
    /// # Errors
    /// Returns [`PackingError::InvalidOrder`] when `quantity < 1`.
    pub fn new(quantity: i64) -> Result<Self, PackingError> {
        u64::try_from(quantity)
            .ok()
            .filter(|&q| q >= 1)
            .map(Self)
            .ok_or_else(|| PackingError::invalid_order("'x' must be >= 1"))
    }

    /// Parses the raw `x` query value.
    ///
    /// # Errors
    /// Returns [`PackingError::InvalidOrder`] when the value is absent or empty,
    /// is not an integer, or is below one.
    pub fn parse(raw: Option<&str>) -> Result<Self, PackingError> {
        let raw = raw
            .filter(|value| !value.is_empty())
            .ok_or_else(|| PackingError::invalid_order("missing query param 'x'"))?;
        let quantity = raw
            .parse::<i64>()
            .map_err(|_| PackingError::invalid_order("'x' must be an integer"))?;
        Self::new(quantity)
    }

    /// Rejects orders above `max`.
    ///
    /// # Errors
    /// Returns [`PackingError::InvalidOrder`] when the quantity exceeds `max`.
    pub fn at_most(self, max: u64) -> Result<Self, PackingError> {
        if self.0 > max {
            return Err(PackingError::InvalidOrder {
                message: "'x' is too large".into(),
                context: Some(format!("limit is {max}").into()),
            });
        }
        Ok(self)
    }

    #[must_use]
    pub const fn quantity(self) -> u64 {
        self.0
    }
}

impl FromStr for Order {
    type Err = PackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl TryFrom<i64> for Order {
    type Error = PackingError;

    fn try_from(quantity: i64) -> Result<Self, Self::Error> {
        Self::new(quantity)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
