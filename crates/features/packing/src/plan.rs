use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Packs chosen for an order: pack size to number of packs.
///
/// Sizes with a zero count are never stored. Serializes as a JSON object keyed by
/// size, e.g. `{"250":1,"500":1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackPlan(BTreeMap<u32, u64>);

impl PackPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A plan made of `count` packs of one size.
    #[must_use]
    pub fn single(size: u32, count: u64) -> Self {
        let mut plan = Self::new();
        plan.add(size, count);
        plan
    }

    /// Adds `count` packs of `size`. Zero counts are ignored.
    pub fn add(&mut self, size: u32, count: u64) {
        if count > 0 {
            *self.0.entry(size).or_default() += count;
        }
    }

    /// Takes up to `count` packs of `size` out of the plan.
    pub fn remove(&mut self, size: u32, count: u64) {
        if let Some(current) = self.0.get_mut(&size) {
            *current = current.saturating_sub(count);
            if *current == 0 {
                self.0.remove(&size);
            }
        }
    }

    #[must_use]
    pub fn count_of(&self, size: u32) -> u64 {
        self.0.get(&size).copied().unwrap_or_default()
    }

    /// Items shipped.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(&size, &count)| u64::from(size) * count).sum()
    }

    /// Number of packs shipped.
    #[must_use]
    pub fn pack_count(&self) -> u64 {
        self.0.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the plan ships at least `quantity` items.
    #[must_use]
    pub fn covers(&self, quantity: u64) -> bool {
        self.total() >= quantity
    }

    /// Entries from the largest size down.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.0.iter().rev().map(|(&size, &count)| (size, count))
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<u32, u64> {
        self.0
    }
}

impl FromIterator<(u32, u64)> for PackPlan {
    fn from_iter<I: IntoIterator<Item = (u32, u64)>>(iter: I) -> Self {
        let mut plan = Self::new();
        for (size, count) in iter {
            plan.add(size, count);
        }
        plan
    }
}

impl<const N: usize> From<[(u32, u64); N]> for PackPlan {
    fn from(entries: [(u32, u64); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl fmt::Display for PackPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (size, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{size}: {count}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_and_counts() {
        let plan = PackPlan::from([(5000, 2), (2000, 1), (250, 1)]);
        assert_eq!(plan.total(), 12_250);
        assert_eq!(plan.pack_count(), 4);
        assert!(plan.covers(12_001));
        assert!(!plan.covers(12_251));
    }

    #[test]
    fn zero_counts_are_not_stored() {
        let plan = PackPlan::from([(500, 0), (250, 1)]);
        assert_eq!(plan, PackPlan::single(250, 1));
        assert_eq!(plan.count_of(500), 0);
    }

    #[test]
    fn repeated_sizes_accumulate() {
        let plan: PackPlan = [(250, 1), (250, 2)].into_iter().collect();
        assert_eq!(plan.count_of(250), 3);
    }

    #[test]
    fn removing_all_packs_drops_the_size() {
        let mut plan = PackPlan::from([(500, 1), (250, 2)]);
        plan.remove(250, 2);
        plan.remove(1000, 1);
        assert_eq!(plan, PackPlan::single(500, 1));

        plan.remove(500, 5);
        assert!(plan.is_empty());
    }

    #[test]
    fn iterates_largest_first_and_displays() {
        let plan = PackPlan::from([(250, 1), (500, 1)]);
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![(500, 1), (250, 1)]);
        assert_eq!(plan.to_string(), "{500: 1, 250: 1}");
    }

    #[test]
    fn json_keys_are_sizes() {
        let plan = PackPlan::from([(500, 1), (250, 1)]);
        let json = serde_json::to_value(&plan).expect("serialize");
        assert_eq!(json, serde_json::json!({ "250": 1, "500": 1 }));

        let back: PackPlan = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, plan);
    }
}
