// Signal Engine
// Owns the trading-signal collection, the periodic live-update task,
// and the derived dashboard aggregates

pub mod signal;
pub mod store;

pub use signal::{SignalAction, TradingSignal};
pub use store::{
    ActionStats, LiveUpdateConfig, SignalStore, SignalSummary, CONFIDENCE_CEILING,
    CONFIDENCE_FLOOR, HIGH_CONFIDENCE_THRESHOLD,
};
