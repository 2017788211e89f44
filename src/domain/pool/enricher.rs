//! Per-pool liquidity enrichment

use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

use crate::infrastructure::providers::DefiDataProvider;
use crate::shared::types::{EnrichedPool, Pool};
use crate::shared::utils::format_address;

/// Attaches liquidity metrics to each pool via concurrent detail fetches.
///
/// A failed fetch drops that pool from the output; the batch itself always
/// succeeds (an empty result is valid). Output order is input order minus
/// the dropped entries.
pub struct LiquidityEnricher<D> {
    provider: Arc<D>,
}

impl<D: DefiDataProvider> LiquidityEnricher<D> {
    pub fn new(provider: Arc<D>) -> Self {
        Self { provider }
    }

    pub async fn enrich(&self, pools: Vec<Pool>) -> Vec<EnrichedPool> {
        let lookups = pools
            .iter()
            .map(|pool| self.provider.get_liquidity_details(&pool.address));
        let results = join_all(lookups).await;

        let total = pools.len();
        let mut dropped = 0usize;
        let mut enriched = Vec::with_capacity(total);
        for (pool, result) in pools.into_iter().zip(results) {
            match result {
                Ok(liquidity) => enriched.push(EnrichedPool { pool, liquidity }),
                Err(e) => {
                    dropped += 1;
                    warn!(
                        pool = %format_address(&pool.address),
                        error = %e,
                        "liquidity fetch failed, dropping pool"
                    );
                }
            }
        }

        info!(total, dropped, enriched = enriched.len(), "liquidity enrichment complete");
        enriched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pool::testing::{liquidity, pool, MockDataProvider};

    #[tokio::test]
    async fn keeps_input_order_minus_drops() {
        let a = pool("a");
        let b = pool("b");
        let c = pool("c");

        let provider = MockDataProvider::default()
            .with_liquidity(a.address, liquidity(1_000.0, 10.0))
            .with_failing_liquidity(b.address)
            .with_liquidity(c.address, liquidity(2_000.0, 20.0));

        let enricher = LiquidityEnricher::new(Arc::new(provider));
        let enriched = enricher.enrich(vec![a.clone(), b, c.clone()]).await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].pool.address, a.address);
        assert_eq!(enriched[1].pool.address, c.address);
        assert_eq!(enriched[1].liquidity.apy, 20.0);
    }

    #[tokio::test]
    async fn all_failures_yield_empty_not_error() {
        let a = pool("a");
        let provider = MockDataProvider::default().with_failing_liquidity(a.address);
        let enricher = LiquidityEnricher::new(Arc::new(provider));
        assert!(enricher.enrich(vec![a]).await.is_empty());
    }
}
