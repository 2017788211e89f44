//! Yieldscope - Solana DeFi Yield Advisor
//! Built with Domain-Driven Design principles

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod report;
pub mod shared;

// Re-export main types for convenience
pub use application::AdvisorService;
pub use domain::allocation::AllocationStrategist;
pub use domain::opportunity::OpportunityRanker;
pub use domain::pool::{dedup_pools, LiquidityEnricher, PoolCatalogFetcher};
pub use domain::portfolio::PortfolioAnalyzer;
pub use domain::risk::RiskClassifier;
