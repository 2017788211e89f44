//! Risk classification from liquidity metrics

use crate::shared::config::RiskThresholds;
use crate::shared::types::{ClassifiedPool, EnrichedPool, LiquidityDetails, RiskTier};

/// Maps liquidity metrics to a discrete risk tier via fixed thresholds
pub struct RiskClassifier {
    thresholds: RiskThresholds,
}

impl RiskClassifier {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Strict comparisons on both axes: a pool at exactly the TVL cutoff
    /// falls through to the next tier.
    pub fn classify(&self, liquidity: &LiquidityDetails) -> RiskTier {
        let t = &self.thresholds;
        if liquidity.tvl > t.low_min_tvl && liquidity.apy < t.low_max_apy {
            RiskTier::Low
        } else if liquidity.tvl > t.medium_min_tvl && liquidity.apy < t.medium_max_apy {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn classify_all(&self, pools: Vec<EnrichedPool>) -> Vec<ClassifiedPool> {
        pools
            .into_iter()
            .map(|e| {
                let tier = self.classify(&e.liquidity);
                ClassifiedPool {
                    pool: e.pool,
                    liquidity: e.liquidity,
                    tier,
                }
            })
            .collect()
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new(RiskThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(tvl: f64, apy: f64) -> LiquidityDetails {
        LiquidityDetails {
            tvl,
            apy,
            volume_24h: 0.0,
            fee_24h: 0.0,
        }
    }

    #[test]
    fn tvl_boundary_is_exclusive() {
        let classifier = RiskClassifier::default();
        // exactly 1,000,000 TVL does not qualify for low
        assert_eq!(classifier.classify(&details(1_000_000.0, 29.0)), RiskTier::Medium);
        assert_eq!(classifier.classify(&details(1_000_001.0, 29.0)), RiskTier::Low);
    }

    #[test]
    fn apy_boundary_is_exclusive() {
        let classifier = RiskClassifier::default();
        // exactly 30 APY falls through to the medium rule
        assert_eq!(classifier.classify(&details(1_000_001.0, 30.0)), RiskTier::Medium);
        assert_eq!(classifier.classify(&details(1_000_001.0, 29.999)), RiskTier::Low);
    }

    #[test]
    fn falls_through_to_high() {
        let classifier = RiskClassifier::default();
        assert_eq!(classifier.classify(&details(500_000.0, 10.0)), RiskTier::High);
        assert_eq!(classifier.classify(&details(2_000_000.0, 150.0)), RiskTier::High);
        assert_eq!(classifier.classify(&details(600_000.0, 99.0)), RiskTier::Medium);
    }
}
