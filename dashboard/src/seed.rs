// Seed data for the dashboard
// Fixed demo sets the engines are initialized from at process start

use chrono::Utc;
use screening::{ScreeningCandidate, ScreeningCriteria, StrategyTag};
use signal_engine::{SignalAction, TradingSignal};

/// The demo signal set
pub fn demo_signals() -> Vec<TradingSignal> {
    let now = Utc::now();
    vec![
        TradingSignal {
            id: "1".to_string(),
            symbol: "AAPL".to_string(),
            company: "Apple Inc.".to_string(),
            action: SignalAction::Buy,
            confidence: 87.0,
            price: 185.42,
            change: 3.25,
            change_percent: 1.78,
            rationale: "RSI oversold + bullish MACD crossover + positive earnings sentiment"
                .to_string(),
            indicators: vec![
                "RSI".to_string(),
                "MACD".to_string(),
                "Volume".to_string(),
                "Sentiment".to_string(),
            ],
            timestamp: now,
        },
        TradingSignal {
            id: "2".to_string(),
            symbol: "TSLA".to_string(),
            company: "Tesla Inc.".to_string(),
            action: SignalAction::Sell,
            confidence: 92.0,
            price: 248.73,
            change: -12.45,
            change_percent: -4.77,
            rationale: "Bearish divergence + resistance break failure + negative news flow"
                .to_string(),
            indicators: vec![
                "Divergence".to_string(),
                "Support/Resistance".to_string(),
                "News".to_string(),
            ],
            timestamp: now,
        },
        TradingSignal {
            id: "3".to_string(),
            symbol: "NVDA".to_string(),
            company: "NVIDIA Corp.".to_string(),
            action: SignalAction::Buy,
            confidence: 94.0,
            price: 722.15,
            change: 18.92,
            change_percent: 2.69,
            rationale: "AI sector momentum + volume breakout + institutional accumulation"
                .to_string(),
            indicators: vec![
                "Volume".to_string(),
                "Momentum".to_string(),
                "Institutional".to_string(),
            ],
            timestamp: now,
        },
    ]
}

/// The demo screening candidate set, pre-tagged from a previous pass
pub fn demo_candidates() -> Vec<ScreeningCandidate> {
    vec![
        ScreeningCandidate {
            symbol: "NVDA".to_string(),
            price: 722.15,
            volume: "45.2M".to_string(),
            market_cap: "1.78T".to_string(),
            sector: "Technology".to_string(),
            signals: vec![StrategyTag::Momentum, StrategyTag::Breakout],
        },
        ScreeningCandidate {
            symbol: "AAPL".to_string(),
            price: 185.42,
            volume: "89.3M".to_string(),
            market_cap: "2.87T".to_string(),
            sector: "Technology".to_string(),
            signals: vec![StrategyTag::Reversal],
        },
        ScreeningCandidate {
            symbol: "JNJ".to_string(),
            price: 164.73,
            volume: "12.8M".to_string(),
            market_cap: "428.9B".to_string(),
            sector: "Healthcare".to_string(),
            signals: vec![StrategyTag::Momentum],
        },
    ]
}

/// Initial screening criteria: the documented defaults plus the two starter
/// sectors. Note this differs from the reset target, which clears sectors.
pub fn demo_criteria() -> ScreeningCriteria {
    let mut criteria = ScreeningCriteria::default();
    criteria.add_sector("Technology");
    criteria.add_sector("Healthcare");
    criteria
}
