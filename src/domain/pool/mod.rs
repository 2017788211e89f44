//! Pool domain - catalog aggregation, deduplication, liquidity enrichment

mod catalog;
mod dedup;
mod enricher;

pub use catalog::PoolCatalogFetcher;
pub use dedup::dedup_pools;
pub use enricher::LiquidityEnricher;

/// In-memory provider fake shared by pool, opportunity, and service tests
#[cfg(test)]
pub mod testing {
    use async_trait::async_trait;
    use solana_sdk::pubkey::Pubkey;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::infrastructure::providers::DefiDataProvider;
    use crate::shared::errors::ProviderError;
    use crate::shared::types::{LiquidityDetails, Pool, PoolQuery, Token};

    /// Deterministic pubkey derived from a short tag, so tests can name pools
    pub fn tagged_pubkey(tag: &str) -> Pubkey {
        let mut bytes = [0u8; 32];
        for (i, b) in tag.bytes().enumerate().take(32) {
            bytes[i] = b;
        }
        Pubkey::new_from_array(bytes)
    }

    pub fn pool(tag: &str) -> Pool {
        Pool {
            address: tagged_pubkey(tag),
            dex: "Raydium AMM".to_string(),
            token_a: Token {
                mint: tagged_pubkey(&format!("{tag}-mint-a")),
                symbol: "SOL".to_string(),
                decimals: 9,
            },
            token_b: Token {
                mint: tagged_pubkey(&format!("{tag}-mint-b")),
                symbol: "USDC".to_string(),
                decimals: 6,
            },
            tvl: None,
            apy: None,
            volume_24h: None,
        }
    }

    pub fn liquidity(tvl: f64, apy: f64) -> LiquidityDetails {
        LiquidityDetails {
            tvl,
            apy,
            volume_24h: tvl / 10.0,
            fee_24h: tvl / 1000.0,
        }
    }

    #[derive(Default)]
    pub struct MockDataProvider {
        listings: HashMap<Pubkey, Vec<Pool>>,
        failing_listings: HashSet<Pubkey>,
        liquidity: HashMap<Pubkey, LiquidityDetails>,
        failing_liquidity: HashSet<Pubkey>,
        /// Number of liquidity-detail fetches issued, across all pools
        pub liquidity_calls: AtomicUsize,
    }

    impl MockDataProvider {
        pub fn with_listing(mut self, mint: Pubkey, pools: Vec<Pool>) -> Self {
            self.listings.insert(mint, pools);
            self
        }

        pub fn with_failing_listing(mut self, mint: Pubkey) -> Self {
            self.failing_listings.insert(mint);
            self
        }

        pub fn with_liquidity(mut self, pool: Pubkey, details: LiquidityDetails) -> Self {
            self.liquidity.insert(pool, details);
            self
        }

        pub fn with_failing_liquidity(mut self, pool: Pubkey) -> Self {
            self.failing_liquidity.insert(pool);
            self
        }
    }

    #[async_trait]
    impl DefiDataProvider for MockDataProvider {
        async fn get_pools_by_token(
            &self,
            mint: &Pubkey,
            _query: &PoolQuery,
        ) -> Result<Vec<Pool>, ProviderError> {
            if self.failing_listings.contains(mint) {
                return Err(ProviderError::Status(502));
            }
            Ok(self.listings.get(mint).cloned().unwrap_or_default())
        }

        async fn get_liquidity_details(
            &self,
            pool_address: &Pubkey,
        ) -> Result<LiquidityDetails, ProviderError> {
            self.liquidity_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing_liquidity.contains(pool_address) {
                return Err(ProviderError::Status(502));
            }
            self.liquidity
                .get(pool_address)
                .copied()
                .ok_or_else(|| ProviderError::NotFound(pool_address.to_string()))
        }

        async fn get_pool_by_address(&self, pool_address: &Pubkey) -> Result<Pool, ProviderError> {
            self.listings
                .values()
                .flatten()
                .find(|p| p.address == *pool_address)
                .cloned()
                .ok_or_else(|| ProviderError::NotFound(pool_address.to_string()))
        }
    }
}
