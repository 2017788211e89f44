//! Allocation domain - target strategy over weighted asset categories

mod strategist;

pub use strategist::AllocationStrategist;
