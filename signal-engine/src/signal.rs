use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recommended trading action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for SignalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalAction::Buy => write!(f, "BUY"),
            SignalAction::Sell => write!(f, "SELL"),
            SignalAction::Hold => write!(f, "HOLD"),
        }
    }
}

/// Model-generated trading recommendation with supporting context
///
/// `action`, `rationale`, and `indicators` are fixed at creation; the live
/// update loop mutates `price`, `change`, `change_percent`, `confidence`,
/// and `timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingSignal {
    pub id: String,
    pub symbol: String,
    pub company: String,
    pub action: SignalAction,
    /// Model certainty, 0 to 100
    pub confidence: f64,
    pub price: f64,
    /// Absolute move since the session reference price
    pub change: f64,
    pub change_percent: f64,
    pub rationale: String,
    pub indicators: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
