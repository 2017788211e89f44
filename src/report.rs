// src/report.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::types::{
    InvestmentOpportunity, PortfolioAnalysis, RiskProfile, TokenAllocation,
};
use crate::shared::utils::format_address;

/// CLI-facing view of one ranked opportunity, with display-friendly fields
#[derive(Debug, Serialize, Deserialize)]
pub struct OpportunityEntry {
    pub pool_address: String,
    pub dex: String,
    pub pair: String,
    pub tvl: f64,
    pub expected_yield: f64,
    pub volume_24h: f64,
    pub fee_24h: f64,
    pub risk_tier: String,
    pub recommendation: String,
}

impl From<&InvestmentOpportunity> for OpportunityEntry {
    fn from(o: &InvestmentOpportunity) -> Self {
        Self {
            pool_address: o.pool.address.to_string(),
            dex: o.pool.dex.clone(),
            pair: o.pool.pair(),
            tvl: o.liquidity.tvl,
            expected_yield: o.expected_yield,
            volume_24h: o.liquidity.volume_24h,
            fee_24h: o.liquidity.fee_24h,
            risk_tier: o.risk_tier.to_string(),
            recommendation: o.recommendation.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpportunitiesReport {
    pub risk_profile: String,
    pub tokens: Vec<String>,
    pub opportunities: Vec<OpportunityEntry>,
    pub timestamp: DateTime<Utc>,
}

impl OpportunitiesReport {
    pub fn new(
        profile: RiskProfile,
        tokens: &[solana_sdk::pubkey::Pubkey],
        opportunities: &[InvestmentOpportunity],
    ) -> Self {
        Self {
            risk_profile: profile.to_string(),
            tokens: tokens.iter().map(|t| format_address(t)).collect(),
            opportunities: opportunities.iter().map(OpportunityEntry::from).collect(),
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub wallet: String,
    #[serde(flatten)]
    pub analysis: PortfolioAnalysis,
    pub timestamp: DateTime<Utc>,
}

impl PortfolioReport {
    pub fn new(wallet: &str, analysis: PortfolioAnalysis) -> Self {
        Self {
            wallet: wallet.to_string(),
            analysis,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StrategyReport {
    pub risk_profile: String,
    pub amount: f64,
    pub allocations: Vec<TokenAllocation>,
    pub timestamp: DateTime<Utc>,
}

impl StrategyReport {
    pub fn new(profile: RiskProfile, amount: f64, allocations: Vec<TokenAllocation>) -> Self {
        Self {
            risk_profile: profile.to_string(),
            amount,
            allocations,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
