//! Common types used across the application

use solana_sdk::pubkey::Pubkey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wrapped SOL mint, used for the synthetic native entry in portfolio views
pub const NATIVE_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub mint: Pubkey,
    pub symbol: String,
    pub decimals: u8,
}

/// Liquidity pool as returned by the upstream data provider.
///
/// Identity is the pool address. The trailing metrics are whatever the
/// listing endpoint happened to include; authoritative figures come from a
/// separate liquidity-details fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    pub address: Pubkey,
    pub dex: String,
    pub token_a: Token,
    pub token_b: Token,
    pub tvl: Option<f64>,
    pub apy: Option<f64>,
    pub volume_24h: Option<f64>,
}

impl Pool {
    /// "SOL/USDC" style pair label
    pub fn pair(&self) -> String {
        format!("{}/{}", self.token_a.symbol, self.token_b.symbol)
    }
}

/// Per-pool liquidity metrics, fetched independently of the listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidityDetails {
    pub tvl: f64,
    pub apy: f64,
    pub volume_24h: f64,
    pub fee_24h: f64,
}

/// Pool paired with its fetched liquidity metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedPool {
    pub pool: Pool,
    pub liquidity: LiquidityDetails,
}

/// Enriched pool with an assigned risk tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedPool {
    pub pool: Pool,
    pub liquidity: LiquidityDetails,
    pub tier: RiskTier,
}

/// Discrete risk classification derived from TVL/APY thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied investor risk appetite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Low,
    Medium,
    High,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Low => "low",
            RiskProfile::Medium => "medium",
            RiskProfile::High => "high",
        }
    }

    /// Tiers an investor with this profile is willing to hold.
    /// `low` keeps only low-tier pools, `medium` adds medium, `high` keeps all.
    pub fn allows(&self, tier: RiskTier) -> bool {
        match self {
            RiskProfile::Low => tier == RiskTier::Low,
            RiskProfile::Medium => tier == RiskTier::Low || tier == RiskTier::Medium,
            RiskProfile::High => true,
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(RiskProfile::Low),
            "medium" => Ok(RiskProfile::Medium),
            "high" => Ok(RiskProfile::High),
            other => Err(format!("unknown risk profile: {other} (expected low|medium|high)")),
        }
    }
}

/// Pagination and DEX filtering for pool listing queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolQuery {
    pub page: u32,
    pub limit: u32,
    /// DEX allow-list; `None` keeps everything
    pub dexes: Option<Vec<String>>,
}

impl Default for PoolQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            dexes: None,
        }
    }
}

/// Ranked yield opportunity, recomputed per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentOpportunity {
    pub pool: Pool,
    pub liquidity: LiquidityDetails,
    pub expected_yield: f64,
    pub risk_tier: RiskTier,
    pub recommendation: String,
}

/// One token's slice of a target allocation strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenAllocation {
    pub symbol: String,
    pub mint: String,
    pub percentage: f64,
    pub rationale: String,
}

/// Single fungible holding in a wallet snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioHolding {
    pub symbol: String,
    pub mint: Pubkey,
    pub balance: f64,
    /// USD value as reported by the wallet provider; absent when unpriced
    pub value_usd: Option<f64>,
}

/// Point-in-time wallet snapshot from the wallet provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// USD-denominated value of the native SOL balance, provider-reported
    pub sol_balance: f64,
    pub tokens: Vec<PortfolioHolding>,
    /// Opaque pass-through; NFTs are not modeled further
    pub nft_count: usize,
}

/// One holding's share of the portfolio total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub symbol: String,
    pub mint: String,
    pub value_usd: f64,
    pub percentage: f64,
}

/// Heuristic advice category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationKind {
    Diversification,
    RiskManagement,
    NetworkToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

/// Single portfolio recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: RecommendationPriority,
    pub message: String,
}

/// Full portfolio composition analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    pub total_value: f64,
    pub token_count: usize,
    pub nft_count: usize,
    pub allocations: Vec<PortfolioAllocation>,
    pub recommendations: Vec<Recommendation>,
}
