use super::PackPolicy;
use crate::catalog::PackCatalog;
use crate::error::PackingError;
use crate::order::Order;
use crate::plan::PackPlan;

/// Fills the order greedily from the largest size, rounds any remainder up
/// with one smallest pack, then consolidates runs of small packs into the next
/// larger size.
///
/// With the standard catalog every size is a multiple of the smallest, so the
/// plan always ships the fewest items possible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrectPolicy;

impl PackPolicy for CorrectPolicy {
    type Output = PackPlan;

    fn name(&self) -> &'static str {
        "correct"
    }

    fn solve(&self, catalog: &PackCatalog, order: Order) -> Result<PackPlan, PackingError> {
        let quantity = order.quantity();
        let mut remaining = quantity;
        let mut plan = PackPlan::new();

        for size in catalog.iter() {
            let size_items = u64::from(size);
            plan.add(size, remaining / size_items);
            remaining %= size_items;
        }
        if remaining > 0 {
            plan.add(catalog.smallest(), 1);
        }

        consolidate(catalog, &mut plan, quantity);

        tracing::trace!(
            order = %order,
            total = plan.total(),
            packs = plan.pack_count(),
            "correct plan solved"
        );
        Ok(plan)
    }
}

/// Trades `ceil(large / small)` packs of each size for one pack of the next
/// larger size, smallest pair first so merged packs can cascade upwards.
///
/// A trade that ships fewer items is capped so the plan still covers `quantity`.
fn consolidate(catalog: &PackCatalog, plan: &mut PackPlan, quantity: u64) {
    for pair in catalog.sizes().windows(2).rev() {
        let (large, small) = (pair[0], pair[1]);
        let (large_items, small_items) = (u64::from(large), u64::from(small));
        let required = large_items.div_ceil(small_items);

        let mut merges = plan.count_of(small) / required;
        let lost = required * small_items - large_items;
        if lost > 0 {
            merges = merges.min(plan.total().saturating_sub(quantity) / lost);
        }

        if merges > 0 {
            plan.remove(small, merges * required);
            plan.add(large, merges);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(quantity: i64) -> PackPlan {
        CorrectPolicy.solve_quantity(&PackCatalog::standard(), quantity).expect("solvable")
    }

    #[test]
    fn standard_scenarios() {
        assert_eq!(solve(1), PackPlan::from([(250, 1)]));
        assert_eq!(solve(250), PackPlan::from([(250, 1)]));
        assert_eq!(solve(500), PackPlan::from([(500, 1)]));
        assert_eq!(solve(750), PackPlan::from([(500, 1), (250, 1)]));
        assert_eq!(solve(1000), PackPlan::from([(1000, 1)]));
        assert_eq!(solve(4999), PackPlan::from([(2000, 2), (1000, 1)]));
        assert_eq!(solve(5001), PackPlan::from([(5000, 1), (250, 1)]));
        assert_eq!(solve(9999), PackPlan::from([(5000, 1), (2000, 2), (1000, 1)]));
        assert_eq!(solve(12_001), PackPlan::from([(5000, 2), (2000, 1), (250, 1)]));
    }

    #[test]
    fn reference_table() {
        let cases: [(i64, &[(u32, u64)]); 12] = [
            (23, &[(250, 1)]),
            (31, &[(250, 1)]),
            (53, &[(250, 1)]),
            (251, &[(500, 1)]),
            (501, &[(500, 1), (250, 1)]),
            (2250, &[(2000, 1), (250, 1)]),
            (3750, &[(2000, 1), (1000, 1), (500, 1), (250, 1)]),
            (10_000, &[(5000, 2)]),
            (12_500, &[(5000, 2), (2000, 1), (500, 1)]),
            (15_000, &[(5000, 3)]),
            (500_000, &[(5000, 100)]),
            (1500, &[(1000, 1), (500, 1)]),
        ];

        for (quantity, expected) in cases {
            let expected: PackPlan = expected.iter().copied().collect();
            assert_eq!(solve(quantity), expected, "x = {quantity}");
        }
    }

    #[test]
    fn remainders_cascade_into_larger_packs() {
        // Greedy gives {2000: 2, 500: 1, 250: 2}; the two 250s become a 500,
        // then the two 500s become a 1000.
        let plan = solve(4999);
        assert_eq!(plan.total(), 5000);
        assert_eq!(plan.count_of(250), 0);
        assert_eq!(plan.count_of(500), 0);
    }

    #[test]
    fn non_divisible_catalog_covers_the_order() {
        let catalog = PackCatalog::new([23, 31, 53]).expect("valid catalog");
        let plan = CorrectPolicy.solve_quantity(&catalog, 500_000).expect("solvable");
        assert!(plan.covers(500_000));
        assert_eq!(plan, PackPlan::from([(53, 9433), (31, 1), (23, 1)]));
    }

    #[test]
    fn lossy_consolidation_never_undershoots() {
        // Three 2s would become one 5 and ship one item less.
        let catalog = PackCatalog::new([5, 2]).expect("valid catalog");
        for quantity in 1..=40 {
            let plan = CorrectPolicy.solve_quantity(&catalog, quantity).expect("solvable");
            assert!(plan.covers(quantity.unsigned_abs()), "x = {quantity}: {plan}");
        }
    }

    #[test]
    fn single_size_catalog_rounds_up() {
        let catalog = PackCatalog::new([300]).expect("valid catalog");
        let plan = CorrectPolicy.solve_quantity(&catalog, 601).expect("solvable");
        assert_eq!(plan, PackPlan::from([(300, 3)]));
    }

    #[test]
    fn rejects_non_positive_quantities() {
        let catalog = PackCatalog::standard();
        assert!(CorrectPolicy.solve_quantity(&catalog, 0).is_err());
        assert!(CorrectPolicy.solve_quantity(&catalog, -5).is_err());
    }
}
