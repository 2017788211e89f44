//! Engine configuration
//!
//! All fixed tables the engine computes over (risk thresholds, allocation
//! category weights and memberships, the stablecoin symbol set) live here as
//! plain data with defaults, so components stay pure and testable with
//! alternate tables. A TOML file can override any section.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::shared::types::{RiskProfile, NATIVE_SOL_MINT};

/// Upstream endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersCfg {
    pub raydium_url: String,
    pub helius_url: String,
    pub helius_api_key: Option<String>,
}

impl Default for ProvidersCfg {
    fn default() -> Self {
        Self {
            raydium_url: "https://api-v3.raydium.io".to_string(),
            helius_url: "https://mainnet.helius-rpc.com".to_string(),
            helius_api_key: None,
        }
    }
}

/// TVL/APY cutoffs for risk classification.
///
/// Comparisons are strict (`>` on TVL, `<` on APY): a pool at exactly
/// 1,000,000 TVL does not qualify as low risk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low_min_tvl: f64,
    pub low_max_apy: f64,
    pub medium_min_tvl: f64,
    pub medium_max_apy: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_min_tvl: 1_000_000.0,
            low_max_apy: 30.0,
            medium_min_tvl: 500_000.0,
            medium_max_apy: 100.0,
        }
    }
}

/// Heuristic cutoffs for portfolio recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRules {
    /// A single asset above this share of total value flags over-concentration
    pub concentration_limit_pct: f64,
    /// Combined stablecoin share below this flags missing downside buffer
    pub min_stablecoin_pct: f64,
    /// Native SOL share below this flags a fee-token shortfall
    pub min_native_pct: f64,
    pub stablecoin_symbols: Vec<String>,
}

impl Default for PortfolioRules {
    fn default() -> Self {
        Self {
            concentration_limit_pct: 50.0,
            min_stablecoin_pct: 10.0,
            min_native_pct: 5.0,
            stablecoin_symbols: ["USDC", "USDT", "BUSD", "DAI", "TUSD", "USDD"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Asset bucket used by the allocation strategist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    Stablecoin,
    BlueChip,
    MidCap,
    HighRisk,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Stablecoin => "stablecoin",
            AssetCategory::BlueChip => "blue-chip",
            AssetCategory::MidCap => "mid-cap",
            AssetCategory::HighRisk => "high-risk",
        }
    }
}

/// Percent of the portfolio assigned to each category; rows sum to 100
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub stablecoin: f64,
    pub blue_chip: f64,
    pub mid_cap: f64,
    pub high_risk: f64,
}

/// Fixed member of an allocation category.
/// `weight` is the share of the category and sums to 100 within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryToken {
    pub symbol: String,
    pub mint: String,
    pub weight: f64,
}

impl CategoryToken {
    fn new(symbol: &str, mint: &str, weight: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            mint: mint.to_string(),
            weight,
        }
    }
}

/// Category weight rows per risk profile plus fixed category memberships
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationTables {
    pub low: CategoryWeights,
    pub medium: CategoryWeights,
    pub high: CategoryWeights,
    pub stablecoins: Vec<CategoryToken>,
    pub blue_chips: Vec<CategoryToken>,
    pub mid_caps: Vec<CategoryToken>,
    pub high_risk: Vec<CategoryToken>,
}

impl AllocationTables {
    pub fn weights_for(&self, profile: RiskProfile) -> CategoryWeights {
        match profile {
            RiskProfile::Low => self.low,
            RiskProfile::Medium => self.medium,
            RiskProfile::High => self.high,
        }
    }

    /// Categories in presentation order with their member tokens
    pub fn categories(&self) -> [(AssetCategory, &[CategoryToken]); 4] {
        [
            (AssetCategory::Stablecoin, self.stablecoins.as_slice()),
            (AssetCategory::BlueChip, self.blue_chips.as_slice()),
            (AssetCategory::MidCap, self.mid_caps.as_slice()),
            (AssetCategory::HighRisk, self.high_risk.as_slice()),
        ]
    }
}

impl Default for AllocationTables {
    fn default() -> Self {
        Self {
            low: CategoryWeights {
                stablecoin: 60.0,
                blue_chip: 30.0,
                mid_cap: 10.0,
                high_risk: 0.0,
            },
            medium: CategoryWeights {
                stablecoin: 40.0,
                blue_chip: 30.0,
                mid_cap: 20.0,
                high_risk: 10.0,
            },
            high: CategoryWeights {
                stablecoin: 20.0,
                blue_chip: 30.0,
                mid_cap: 30.0,
                high_risk: 20.0,
            },
            stablecoins: vec![
                CategoryToken::new("USDC", "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", 70.0),
                CategoryToken::new("USDT", "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", 30.0),
            ],
            blue_chips: vec![
                CategoryToken::new("SOL", NATIVE_SOL_MINT, 40.0),
                CategoryToken::new("ETH", "7vfCXTUXx5WJV5JADk17DUJ4ksgau7utNKj4b963voxs", 30.0),
                CategoryToken::new("BTC", "3NZ9JMVBmGAqocybic2c7LQCJScmgsAZ6vQqTDzcqmJh", 30.0),
            ],
            mid_caps: vec![
                CategoryToken::new("RAY", "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R", 25.0),
                CategoryToken::new("ORCA", "orcaEKTdK7LKz57vaAYr9QeNsVEPfiu6QeMU1kektZE", 25.0),
                CategoryToken::new("JTO", "jtojtomepa8beP8AuQc6eXt5FriJwfFMwQx2v2f9mCL", 25.0),
                CategoryToken::new("PYTH", "HZ1JovNiVvGrGNiiYvEozEVgZ58xaU3RKwX8eACQBCt3", 25.0),
            ],
            high_risk: vec![
                CategoryToken::new("BONK", "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", 30.0),
                CategoryToken::new("WIF", "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm", 40.0),
                CategoryToken::new("JUP", "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN", 30.0),
            ],
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub providers: ProvidersCfg,
    pub thresholds: RiskThresholds,
    pub portfolio: PortfolioRules,
    pub allocation: AllocationTables,
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())?;
        let cfg: Self = toml::from_str(&s).context("parse engine config")?;
        Ok(cfg)
    }
}
