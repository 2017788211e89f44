//! Opportunity domain - yield ranking and recommendations

mod ranker;

pub use ranker::{OpportunityRanker, DEFAULT_RESULT_LIMIT};
