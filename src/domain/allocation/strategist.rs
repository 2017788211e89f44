//! Target allocation strategy over weighted asset categories

use tracing::debug;

use crate::shared::config::{AllocationTables, AssetCategory};
use crate::shared::types::{RiskProfile, TokenAllocation};
use crate::shared::utils::format_usd;

/// Computes a target allocation across the four weighted asset categories.
///
/// Pure computation over the configured tables; the investment amount only
/// feeds the per-token rationale text, never the percentage math.
pub struct AllocationStrategist {
    tables: AllocationTables,
}

impl AllocationStrategist {
    pub fn new(tables: AllocationTables) -> Self {
        Self { tables }
    }

    pub fn build_strategy(&self, profile: RiskProfile, amount: f64) -> Vec<TokenAllocation> {
        let weights = self.tables.weights_for(profile);
        let mut allocations = Vec::new();

        for (category, tokens) in self.tables.categories() {
            let category_weight = match category {
                AssetCategory::Stablecoin => weights.stablecoin,
                AssetCategory::BlueChip => weights.blue_chip,
                AssetCategory::MidCap => weights.mid_cap,
                AssetCategory::HighRisk => weights.high_risk,
            };

            for token in tokens {
                let percentage = category_weight * token.weight / 100.0;
                let rationale = format!(
                    "Allocate {:.1}% ({}) to {} as a {} holding under a {} risk profile",
                    percentage,
                    format_usd(amount * percentage / 100.0),
                    token.symbol,
                    category.as_str(),
                    profile,
                );
                allocations.push(TokenAllocation {
                    symbol: token.symbol.clone(),
                    mint: token.mint.clone(),
                    percentage,
                    rationale,
                });
            }
        }

        debug!(profile = %profile, entries = allocations.len(), "allocation strategy built");
        allocations
    }
}

impl Default for AllocationStrategist {
    fn default() -> Self {
        Self::new(AllocationTables::default())
    }
}
