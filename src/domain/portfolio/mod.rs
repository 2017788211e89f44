//! Portfolio domain - holdings composition analysis

mod analyzer;

pub use analyzer::PortfolioAnalyzer;
