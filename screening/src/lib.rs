// Stock Screening
// Filter criteria, candidate records, and the screening pass that retags them

pub mod candidate;
pub mod criteria;
pub mod engine;
pub mod screener;

pub use candidate::{parse_compact_amount, ScreeningCandidate, StrategyTag};
pub use criteria::{BoundedRange, CriterionUpdate, ScreeningCriteria};
pub use engine::{ScreeningEngine, ScreeningReport};
pub use screener::{CriteriaScreener, Screener, SimulatedScreener};
