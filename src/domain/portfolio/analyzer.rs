//! Portfolio composition analysis

use std::cmp::Ordering;
use tracing::debug;

use crate::shared::config::PortfolioRules;
use crate::shared::types::{
    PortfolioAllocation, PortfolioAnalysis, PortfolioSnapshot, Recommendation,
    RecommendationKind, RecommendationPriority, NATIVE_SOL_MINT,
};
use crate::shared::utils::format_usd;

/// Computes total value, per-asset allocation shares, and heuristic
/// diversification/risk recommendations from a wallet snapshot.
pub struct PortfolioAnalyzer {
    rules: PortfolioRules,
}

impl PortfolioAnalyzer {
    pub fn new(rules: PortfolioRules) -> Self {
        Self { rules }
    }

    pub fn analyze(&self, snapshot: &PortfolioSnapshot) -> PortfolioAnalysis {
        let token_total: f64 = snapshot
            .tokens
            .iter()
            .map(|t| t.value_usd.unwrap_or(0.0))
            .sum();
        let total_value = snapshot.sol_balance + token_total;

        // Empty portfolio: shares are defined as zero and no advice fires,
        // instead of dividing by zero.
        if total_value == 0.0 {
            let allocations = self.build_allocations(snapshot, None);
            return PortfolioAnalysis {
                total_value,
                token_count: snapshot.tokens.len(),
                nft_count: snapshot.nft_count,
                allocations,
                recommendations: Vec::new(),
            };
        }

        let mut allocations = self.build_allocations(snapshot, Some(total_value));
        allocations.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(Ordering::Equal)
        });

        let recommendations = self.recommendations(&allocations);
        debug!(
            total_value,
            holdings = allocations.len(),
            advice = recommendations.len(),
            "portfolio analyzed"
        );

        PortfolioAnalysis {
            total_value,
            token_count: snapshot.tokens.len(),
            nft_count: snapshot.nft_count,
            allocations,
            recommendations,
        }
    }

    fn build_allocations(
        &self,
        snapshot: &PortfolioSnapshot,
        total_value: Option<f64>,
    ) -> Vec<PortfolioAllocation> {
        let share = |value: f64| match total_value {
            Some(total) => value / total * 100.0,
            None => 0.0,
        };

        let mut allocations: Vec<PortfolioAllocation> = snapshot
            .tokens
            .iter()
            .map(|t| {
                let value = t.value_usd.unwrap_or(0.0);
                PortfolioAllocation {
                    symbol: t.symbol.clone(),
                    mint: t.mint.to_string(),
                    value_usd: value,
                    percentage: share(value),
                }
            })
            .collect();

        // Synthetic entry for the native asset
        allocations.push(PortfolioAllocation {
            symbol: "SOL".to_string(),
            mint: NATIVE_SOL_MINT.to_string(),
            value_usd: snapshot.sol_balance,
            percentage: share(snapshot.sol_balance),
        });

        allocations
    }

    /// Rules are independent; zero, one, or several may fire.
    fn recommendations(&self, allocations: &[PortfolioAllocation]) -> Vec<Recommendation> {
        let mut out = Vec::new();

        if let Some(top) = allocations.first() {
            if top.percentage > self.rules.concentration_limit_pct {
                out.push(Recommendation {
                    kind: RecommendationKind::Diversification,
                    priority: RecommendationPriority::High,
                    message: format!(
                        "{} makes up {:.1}% of the portfolio ({}); consider spreading \
                         the position across more assets",
                        top.symbol,
                        top.percentage,
                        format_usd(top.value_usd),
                    ),
                });
            }
        }

        let stablecoin_pct: f64 = allocations
            .iter()
            .filter(|a| {
                self.rules
                    .stablecoin_symbols
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(&a.symbol))
            })
            .map(|a| a.percentage)
            .sum();
        if stablecoin_pct < self.rules.min_stablecoin_pct {
            out.push(Recommendation {
                kind: RecommendationKind::RiskManagement,
                priority: RecommendationPriority::Medium,
                message: format!(
                    "Stablecoins are only {:.1}% of the portfolio; holding at least \
                     {:.0}% cushions drawdowns",
                    stablecoin_pct, self.rules.min_stablecoin_pct,
                ),
            });
        }

        let native_pct: f64 = allocations
            .iter()
            .filter(|a| a.mint == NATIVE_SOL_MINT)
            .map(|a| a.percentage)
            .sum();
        if native_pct < self.rules.min_native_pct {
            out.push(Recommendation {
                kind: RecommendationKind::NetworkToken,
                priority: RecommendationPriority::Low,
                message: format!(
                    "SOL is only {:.1}% of the portfolio; keep some on hand for \
                     transaction fees",
                    native_pct,
                ),
            });
        }

        out
    }
}

impl Default for PortfolioAnalyzer {
    fn default() -> Self {
        Self::new(PortfolioRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::PortfolioHolding;
    use solana_sdk::pubkey::Pubkey;

    fn holding(symbol: &str, value_usd: Option<f64>) -> PortfolioHolding {
        PortfolioHolding {
            symbol: symbol.to_string(),
            mint: Pubkey::new_unique(),
            balance: 1.0,
            value_usd,
        }
    }

    #[test]
    fn computes_shares_and_fires_concentration_and_stablecoin_rules() {
        let snapshot = PortfolioSnapshot {
            sol_balance: 10.0,
            tokens: vec![holding("BONK", Some(90.0))],
            nft_count: 3,
        };

        let analysis = PortfolioAnalyzer::default().analyze(&snapshot);
        assert_eq!(analysis.total_value, 100.0);
        assert_eq!(analysis.token_count, 1);
        assert_eq!(analysis.nft_count, 3);

        // sorted descending: BONK 90%, SOL 10%
        assert_eq!(analysis.allocations[0].symbol, "BONK");
        assert_eq!(analysis.allocations[0].percentage, 90.0);
        assert_eq!(analysis.allocations[1].symbol, "SOL");
        assert_eq!(analysis.allocations[1].percentage, 10.0);

        let kinds: Vec<_> = analysis.recommendations.iter().map(|r| r.kind).collect();
        assert!(kinds.contains(&RecommendationKind::Diversification));
        assert!(kinds.contains(&RecommendationKind::RiskManagement));
        // SOL at 10% is above the 5% fee-token floor
        assert!(!kinds.contains(&RecommendationKind::NetworkToken));
    }

    #[test]
    fn percentages_sum_to_100() {
        let snapshot = PortfolioSnapshot {
            sol_balance: 33.0,
            tokens: vec![
                holding("USDC", Some(120.0)),
                holding("RAY", Some(47.5)),
                holding("UNPRICED", None),
            ],
            nft_count: 0,
        };

        let analysis = PortfolioAnalyzer::default().analyze(&snapshot);
        let sum: f64 = analysis.allocations.iter().map(|a| a.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_value_usd_counts_as_zero() {
        let snapshot = PortfolioSnapshot {
            sol_balance: 50.0,
            tokens: vec![holding("MYSTERY", None), holding("USDC", Some(50.0))],
            nft_count: 0,
        };
        let analysis = PortfolioAnalyzer::default().analyze(&snapshot);
        assert_eq!(analysis.total_value, 100.0);
        let mystery = analysis
            .allocations
            .iter()
            .find(|a| a.symbol == "MYSTERY")
            .unwrap();
        assert_eq!(mystery.percentage, 0.0);
    }

    #[test]
    fn zero_total_value_is_guarded() {
        let snapshot = PortfolioSnapshot {
            sol_balance: 0.0,
            tokens: vec![holding("DUST", None)],
            nft_count: 1,
        };

        let analysis = PortfolioAnalyzer::default().analyze(&snapshot);
        assert_eq!(analysis.total_value, 0.0);
        assert!(analysis.allocations.iter().all(|a| a.percentage == 0.0));
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn balanced_portfolio_fires_nothing() {
        let snapshot = PortfolioSnapshot {
            sol_balance: 30.0,
            tokens: vec![holding("USDC", Some(40.0)), holding("RAY", Some(30.0))],
            nft_count: 0,
        };
        let analysis = PortfolioAnalyzer::default().analyze(&snapshot);
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn low_native_share_flags_fee_token() {
        let snapshot = PortfolioSnapshot {
            sol_balance: 2.0,
            tokens: vec![holding("USDC", Some(49.0)), holding("RAY", Some(49.0))],
            nft_count: 0,
        };
        let analysis = PortfolioAnalyzer::default().analyze(&snapshot);
        let kinds: Vec<_> = analysis.recommendations.iter().map(|r| r.kind).collect();
        assert!(kinds.contains(&RecommendationKind::NetworkToken));
        assert!(!kinds.contains(&RecommendationKind::Diversification));
    }
}
