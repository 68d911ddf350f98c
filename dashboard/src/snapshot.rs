use chrono::{DateTime, Utc};
use screening::{ScreeningCandidate, ScreeningCriteria, ScreeningEngine};
use serde::Serialize;
use signal_engine::{SignalStore, SignalSummary, TradingSignal};

use crate::market::{
    backtest_reports, index_snapshots, monthly_returns, sector_performance, BacktestMetrics,
    IndexSnapshot, MonthlyReturn, SectorPerformance,
};

/// Everything a renderer needs to draw the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub live: bool,
    pub signals: Vec<TradingSignal>,
    pub summary: SignalSummary,
    pub criteria: ScreeningCriteria,
    pub candidates: Vec<ScreeningCandidate>,
    pub indices: Vec<IndexSnapshot>,
    pub sectors: Vec<SectorPerformance>,
    pub backtests: Vec<BacktestMetrics>,
    pub monthly_returns: Vec<MonthlyReturn>,
}

impl DashboardSnapshot {
    /// Assemble a snapshot from both engines plus the static overview data
    pub async fn gather(store: &SignalStore, engine: &ScreeningEngine) -> Self {
        Self {
            generated_at: Utc::now(),
            live: store.is_live().await,
            signals: store.signals().await,
            summary: store.summary().await,
            criteria: engine.criteria().clone(),
            candidates: engine.candidates().to_vec(),
            indices: index_snapshots(),
            sectors: sector_performance(),
            backtests: backtest_reports(),
            monthly_returns: monthly_returns(),
        }
    }
}
