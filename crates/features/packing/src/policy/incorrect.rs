use super::{CorrectPolicy, PackPolicy};
use crate::catalog::PackCatalog;
use crate::error::PackingError;
use crate::order::Order;
use crate::plan::PackPlan;

/// Single-size allocations, one per catalog size, largest first.
///
/// Each size proposes `{size: 1}` when it alone covers the order and
/// `{size: quantity / size + 1}` otherwise, even when the division is exact.
/// Candidates equal to the correct plan are dropped. Kept as a baseline to
/// compare against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncorrectPolicy;

impl IncorrectPolicy {
    fn candidate(size: u32, quantity: u64) -> PackPlan {
        let size_items = u64::from(size);
        let count = if size_items >= quantity { 1 } else { quantity / size_items + 1 };
        PackPlan::single(size, count)
    }
}

impl PackPolicy for IncorrectPolicy {
    type Output = Vec<PackPlan>;

    fn name(&self) -> &'static str {
        "incorrect"
    }

    fn solve(&self, catalog: &PackCatalog, order: Order) -> Result<Vec<PackPlan>, PackingError> {
        let correct = CorrectPolicy.solve(catalog, order)?;
        let allocations: Vec<PackPlan> = catalog
            .iter()
            .map(|size| Self::candidate(size, order.quantity()))
            .filter(|candidate| *candidate != correct)
            .collect();

        tracing::trace!(order = %order, allocations = allocations.len(), "incorrect allocations built");
        Ok(allocations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(quantity: i64) -> Vec<PackPlan> {
        IncorrectPolicy.solve_quantity(&PackCatalog::standard(), quantity).expect("solvable")
    }

    fn singles(entries: &[(u32, u64)]) -> Vec<PackPlan> {
        entries.iter().map(|&(size, count)| PackPlan::single(size, count)).collect()
    }

    #[test]
    fn reference_vectors() {
        let cases: [(i64, &[(u32, u64)]); 12] = [
            (1, &[(5000, 1), (2000, 1), (1000, 1), (500, 1)]),
            (249, &[(5000, 1), (2000, 1), (1000, 1), (500, 1)]),
            (251, &[(5000, 1), (2000, 1), (1000, 1), (250, 2)]),
            (501, &[(5000, 1), (2000, 1), (1000, 1), (500, 2), (250, 3)]),
            (1250, &[(5000, 1), (2000, 1), (1000, 2), (500, 3), (250, 6)]),
            (1750, &[(5000, 1), (2000, 1), (1000, 2), (500, 4), (250, 8)]),
            (3000, &[(5000, 1), (2000, 2), (1000, 4), (500, 7), (250, 13)]),
            (4999, &[(5000, 1), (2000, 3), (1000, 5), (500, 10), (250, 20)]),
            (5001, &[(5000, 2), (2000, 3), (1000, 6), (500, 11), (250, 21)]),
            (9999, &[(5000, 2), (2000, 5), (1000, 10), (500, 20), (250, 40)]),
            (10_000, &[(5000, 3), (2000, 6), (1000, 11), (500, 21), (250, 41)]),
            (12_001, &[(5000, 3), (2000, 7), (1000, 13), (500, 25), (250, 49)]),
        ];

        for (quantity, expected) in cases {
            assert_eq!(solve(quantity), singles(expected), "x = {quantity}");
        }
    }

    #[test]
    fn exact_multiples_still_round_up() {
        // 1000 / 250 + 1 = 5 packs of 250, although four would do. The single
        // 1000 pack is optimal and therefore dropped.
        assert_eq!(solve(1000), singles(&[(5000, 1), (2000, 1), (500, 3), (250, 5)]));
    }

    #[test]
    fn never_returns_the_correct_plan() {
        let catalog = PackCatalog::standard();
        for quantity in [1, 249, 250, 500, 750, 4999, 5000, 9999] {
            let correct = CorrectPolicy.solve_quantity(&catalog, quantity).expect("solvable");
            let allocations = IncorrectPolicy.solve_quantity(&catalog, quantity).expect("solvable");
            assert!(!allocations.contains(&correct), "x = {quantity}");
        }
    }

    #[test]
    fn rejects_non_positive_quantities() {
        assert!(IncorrectPolicy.solve_quantity(&PackCatalog::standard(), 0).is_err());
    }
}
