//! Provider interface traits
//!
//! The engine consumes upstream data exclusively through these seams so the
//! domain components can be exercised against in-memory fakes.

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use crate::shared::errors::ProviderError;
use crate::shared::types::{LiquidityDetails, Pool, PoolQuery, PortfolioSnapshot};

/// Upstream DeFi market-data provider
#[async_trait]
pub trait DefiDataProvider: Send + Sync {
    /// List pools referencing the given token mint
    async fn get_pools_by_token(
        &self,
        mint: &Pubkey,
        query: &PoolQuery,
    ) -> Result<Vec<Pool>, ProviderError>;

    /// Fetch liquidity metrics for a single pool
    async fn get_liquidity_details(
        &self,
        pool_address: &Pubkey,
    ) -> Result<LiquidityDetails, ProviderError>;

    /// Fetch a single pool by address
    async fn get_pool_by_address(&self, pool_address: &Pubkey) -> Result<Pool, ProviderError>;
}

/// Wallet/portfolio provider
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Fetch a point-in-time snapshot of a wallet's holdings
    async fn get_portfolio(&self, wallet: &Pubkey) -> Result<PortfolioSnapshot, ProviderError>;
}
