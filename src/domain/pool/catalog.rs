//! Pool catalog aggregation across token mints

use futures::future::join_all;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::{info, warn};

use crate::infrastructure::providers::DefiDataProvider;
use crate::shared::errors::EngineError;
use crate::shared::types::{Pool, PoolQuery};

/// Aggregates pool listings for a set of token mints.
///
/// One upstream query per mint, all issued concurrently. A failed branch
/// contributes an empty list; the aggregate call only fails when the input
/// itself is invalid.
pub struct PoolCatalogFetcher<D> {
    provider: Arc<D>,
}

impl<D: DefiDataProvider> PoolCatalogFetcher<D> {
    pub fn new(provider: Arc<D>) -> Self {
        Self { provider }
    }

    /// Fetch and merge pool listings for every mint, preserving input order
    /// (then upstream order within each mint's listing).
    pub async fn fetch_catalog(
        &self,
        mints: &[Pubkey],
        query: &PoolQuery,
    ) -> Result<Vec<Pool>, EngineError> {
        if mints.is_empty() {
            return Err(EngineError::InvalidInput(
                "at least one token mint is required".to_string(),
            ));
        }

        let lookups = mints
            .iter()
            .map(|mint| self.provider.get_pools_by_token(mint, query));
        let results = join_all(lookups).await;

        let mut pools = Vec::new();
        for (mint, result) in mints.iter().zip(results) {
            match result {
                Ok(listing) => pools.extend(listing),
                Err(e) => {
                    // Absent data, not a batch failure: siblings keep their results.
                    warn!(mint = %mint, error = %e, "pool listing failed, skipping token");
                }
            }
        }

        info!(tokens = mints.len(), pools = pools.len(), "pool catalog assembled");
        Ok(pools)
    }
}
