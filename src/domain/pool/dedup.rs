//! Pool list deduplication

use std::collections::HashSet;

use crate::shared::types::Pool;

/// Collapse a possibly-overlapping pool list into a unique-by-address list.
/// First occurrence wins; relative order of first occurrences is preserved.
pub fn dedup_pools(pools: Vec<Pool>) -> Vec<Pool> {
    let mut seen = HashSet::with_capacity(pools.len());
    pools
        .into_iter()
        .filter(|pool| seen.insert(pool.address))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pool::testing::pool;

    #[test]
    fn first_occurrence_wins_and_order_is_stable() {
        let a = pool("a");
        let b = pool("b");
        let c = pool("c");

        let mut a_dup = a.clone();
        a_dup.dex = "other-listing".to_string();

        let deduped = dedup_pools(vec![a.clone(), b.clone(), a_dup, c.clone(), b.clone()]);

        let addresses: Vec<_> = deduped.iter().map(|p| p.address).collect();
        assert_eq!(addresses, vec![a.address, b.address, c.address]);
        // first-seen record kept, not the duplicate
        assert_eq!(deduped[0].dex, a.dex);
    }

    #[test]
    fn idempotent_under_repeated_application() {
        let input = vec![pool("a"), pool("b"), pool("a")];
        let once = dedup_pools(input);
        let twice = dedup_pools(once.clone());
        assert_eq!(once.len(), twice.len());
        assert_eq!(
            once.iter().map(|p| p.address).collect::<Vec<_>>(),
            twice.iter().map(|p| p.address).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(dedup_pools(Vec::new()).is_empty());
    }
}
