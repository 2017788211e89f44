//! Opportunity filtering, ranking, and recommendation text

use std::cmp::Ordering;
use tracing::debug;

use crate::shared::types::{ClassifiedPool, InvestmentOpportunity, RiskProfile};
use crate::shared::utils::format_usd;

pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Filters classified pools by the requested risk profile, ranks them by
/// expected yield, and renders a per-result recommendation.
pub struct OpportunityRanker;

impl OpportunityRanker {
    pub fn rank(
        &self,
        pools: Vec<ClassifiedPool>,
        profile: RiskProfile,
        limit: usize,
    ) -> Vec<InvestmentOpportunity> {
        let mut candidates: Vec<ClassifiedPool> = pools
            .into_iter()
            .filter(|p| profile.allows(p.tier))
            .collect();

        // Stable sort: equal yields keep their post-filter order.
        candidates.sort_by(|a, b| {
            b.liquidity
                .apy
                .partial_cmp(&a.liquidity.apy)
                .unwrap_or(Ordering::Equal)
        });
        candidates.truncate(limit);

        debug!(profile = %profile, results = candidates.len(), "opportunities ranked");

        candidates
            .into_iter()
            .map(|c| {
                let recommendation = render_recommendation(&c);
                InvestmentOpportunity {
                    expected_yield: c.liquidity.apy,
                    risk_tier: c.tier,
                    recommendation,
                    pool: c.pool,
                    liquidity: c.liquidity,
                }
            })
            .collect()
    }
}

fn render_recommendation(c: &ClassifiedPool) -> String {
    format!(
        "{} pool on {}: TVL {}, APY {:.2}%, 24h volume {}, 24h fees {} ({} risk)",
        c.pool.pair(),
        c.pool.dex,
        format_usd(c.liquidity.tvl),
        c.liquidity.apy,
        format_usd(c.liquidity.volume_24h),
        format_usd(c.liquidity.fee_24h),
        c.tier,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pool::testing::{liquidity, pool};
    use crate::shared::types::RiskTier;

    fn classified(tag: &str, apy: f64, tier: RiskTier) -> ClassifiedPool {
        let mut l = liquidity(750_000.0, apy);
        l.volume_24h = 120_000.0;
        l.fee_24h = 350.0;
        ClassifiedPool {
            pool: pool(tag),
            liquidity: l,
            tier,
        }
    }

    #[test]
    fn filters_by_profile_and_sorts_by_yield() {
        let pools = vec![
            classified("a", 5.0, RiskTier::High),
            classified("b", 50.0, RiskTier::Medium),
            classified("c", 20.0, RiskTier::Low),
        ];

        let ranked = OpportunityRanker.rank(pools, RiskProfile::Medium, DEFAULT_RESULT_LIMIT);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].expected_yield, 50.0);
        assert_eq!(ranked[1].expected_yield, 20.0);
        assert!(ranked.iter().all(|o| o.risk_tier != RiskTier::High));
    }

    #[test]
    fn low_profile_keeps_only_low_tier() {
        let pools = vec![
            classified("a", 5.0, RiskTier::Low),
            classified("b", 80.0, RiskTier::Medium),
        ];
        let ranked = OpportunityRanker.rank(pools, RiskProfile::Low, DEFAULT_RESULT_LIMIT);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].risk_tier, RiskTier::Low);
    }

    #[test]
    fn truncates_to_limit() {
        let pools = (0..8)
            .map(|i| classified(&format!("p{i}"), i as f64, RiskTier::Low))
            .collect();
        let ranked = OpportunityRanker.rank(pools, RiskProfile::High, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].expected_yield, 7.0);
    }

    #[test]
    fn equal_yields_keep_post_filter_order() {
        let first = classified("first", 12.0, RiskTier::Low);
        let second = classified("second", 12.0, RiskTier::Low);
        let ranked = OpportunityRanker.rank(
            vec![first.clone(), second.clone()],
            RiskProfile::High,
            DEFAULT_RESULT_LIMIT,
        );
        assert_eq!(ranked[0].pool.address, first.pool.address);
        assert_eq!(ranked[1].pool.address, second.pool.address);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(OpportunityRanker
            .rank(Vec::new(), RiskProfile::High, DEFAULT_RESULT_LIMIT)
            .is_empty());
    }

    #[test]
    fn recommendation_mentions_venue_pair_and_grouped_figures() {
        let ranked = OpportunityRanker.rank(
            vec![classified("a", 42.5, RiskTier::Medium)],
            RiskProfile::High,
            1,
        );
        let text = &ranked[0].recommendation;
        assert!(text.contains("SOL/USDC"));
        assert!(text.contains("Raydium AMM"));
        assert!(text.contains("$750,000.00"));
        assert!(text.contains("42.50%"));
        assert!(text.contains("$120,000.00"));
        assert!(text.contains("$350.00"));
    }
}
