//! Application services and use cases

use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::info;

use crate::domain::allocation::AllocationStrategist;
use crate::domain::opportunity::OpportunityRanker;
use crate::domain::pool::{dedup_pools, LiquidityEnricher, PoolCatalogFetcher};
use crate::domain::portfolio::PortfolioAnalyzer;
use crate::domain::risk::RiskClassifier;
use crate::infrastructure::providers::{DefiDataProvider, WalletProvider};
use crate::shared::config::EngineConfig;
use crate::shared::errors::EngineError;
use crate::shared::types::{
    InvestmentOpportunity, Pool, PoolQuery, PortfolioAnalysis, PortfolioSnapshot, RiskProfile,
    TokenAllocation,
};

/// Advisory surface over the pool pipeline, portfolio analysis, and the
/// allocation strategist. Stateless: every call recomputes from one batch of
/// upstream fetches and returns either a full result or a single error.
pub struct AdvisorService<D, W> {
    data_provider: Arc<D>,
    wallet_provider: Arc<W>,
    catalog: PoolCatalogFetcher<D>,
    enricher: LiquidityEnricher<D>,
    classifier: RiskClassifier,
    ranker: OpportunityRanker,
    analyzer: PortfolioAnalyzer,
    strategist: AllocationStrategist,
}

impl<D, W> AdvisorService<D, W>
where
    D: DefiDataProvider,
    W: WalletProvider,
{
    pub fn new(data_provider: Arc<D>, wallet_provider: Arc<W>, config: &EngineConfig) -> Self {
        Self {
            catalog: PoolCatalogFetcher::new(Arc::clone(&data_provider)),
            enricher: LiquidityEnricher::new(Arc::clone(&data_provider)),
            classifier: RiskClassifier::new(config.thresholds),
            ranker: OpportunityRanker,
            analyzer: PortfolioAnalyzer::new(config.portfolio.clone()),
            strategist: AllocationStrategist::new(config.allocation.clone()),
            data_provider,
            wallet_provider,
        }
    }

    /// Aggregate, deduplicate, enrich, classify, and rank yield opportunities
    /// for the given token mints.
    pub async fn rank_opportunities(
        &self,
        mints: &[Pubkey],
        profile: RiskProfile,
        limit: usize,
        query: &PoolQuery,
    ) -> Result<Vec<InvestmentOpportunity>, EngineError> {
        info!(tokens = mints.len(), profile = %profile, limit, "ranking yield opportunities");

        let catalog = self.catalog.fetch_catalog(mints, query).await?;
        let unique = dedup_pools(catalog);
        let enriched = self.enricher.enrich(unique).await;
        let classified = self.classifier.classify_all(enriched);
        Ok(self.ranker.rank(classified, profile, limit))
    }

    /// Fetch a wallet snapshot and analyze its composition
    pub async fn analyze_portfolio(&self, wallet: &str) -> Result<PortfolioAnalysis, EngineError> {
        let owner: Pubkey = wallet
            .trim()
            .parse()
            .map_err(|_| EngineError::InvalidInput(format!("invalid wallet address: {wallet}")))?;

        info!(wallet = %owner, "analyzing portfolio");
        let snapshot = self.wallet_provider.get_portfolio(&owner).await?;
        Ok(self.analyzer.analyze(&snapshot))
    }

    /// Analyze a snapshot the caller already holds
    pub fn analyze_snapshot(&self, snapshot: &PortfolioSnapshot) -> PortfolioAnalysis {
        self.analyzer.analyze(snapshot)
    }

    /// Compute the target allocation for a risk profile and investment amount
    pub fn build_allocation_strategy(
        &self,
        profile: RiskProfile,
        amount: f64,
    ) -> Result<Vec<TokenAllocation>, EngineError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "investment amount must be a non-negative number, got {amount}"
            )));
        }
        Ok(self.strategist.build_strategy(profile, amount))
    }

    /// Look up a single pool by address
    pub async fn lookup_pool(&self, address: &Pubkey) -> Result<Pool, EngineError> {
        Ok(self.data_provider.get_pool_by_address(address).await?)
    }
}
