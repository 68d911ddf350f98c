// Market overview and backtest display data
// Static display constants: the dashboard performs no market ingestion or
// backtest computation

use serde::Serialize;

/// Broad-market index snapshot for the overview tab
#[derive(Debug, Clone, Serialize)]
pub struct IndexSnapshot {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: &'static str,
    pub market_cap: &'static str,
}

/// Day-over-day sector move, percent
#[derive(Debug, Clone, Serialize)]
pub struct SectorPerformance {
    pub sector: &'static str,
    pub change_percent: f64,
}

/// Headline metrics for one backtested strategy
#[derive(Debug, Clone, Serialize)]
pub struct BacktestMetrics {
    pub strategy: &'static str,
    pub period: &'static str,
    pub total_return: f64,
    pub annualized_return: f64,
    pub win_rate: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub total_trades: u32,
    pub avg_holding_period: &'static str,
    pub profit_factor: f64,
}

/// One bar of the monthly-returns chart
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReturn {
    pub month: &'static str,
    pub return_percent: f64,
}

pub fn index_snapshots() -> Vec<IndexSnapshot> {
    vec![
        IndexSnapshot {
            symbol: "SPY",
            name: "SPDR S&P 500 ETF",
            price: 428.73,
            change: 2.45,
            change_percent: 0.57,
            volume: "89.2M",
            market_cap: "394.2B",
        },
        IndexSnapshot {
            symbol: "QQQ",
            name: "Invesco QQQ Trust",
            price: 367.12,
            change: -1.82,
            change_percent: -0.49,
            volume: "42.8M",
            market_cap: "196.7B",
        },
        IndexSnapshot {
            symbol: "IWM",
            name: "iShares Russell 2000 ETF",
            price: 198.45,
            change: 3.21,
            change_percent: 1.64,
            volume: "28.3M",
            market_cap: "31.2B",
        },
    ]
}

pub fn sector_performance() -> Vec<SectorPerformance> {
    [
        ("Technology", 1.23),
        ("Healthcare", 0.87),
        ("Financial", -0.45),
        ("Energy", 2.14),
        ("Consumer", -1.12),
    ]
    .into_iter()
    .map(|(sector, change_percent)| SectorPerformance {
        sector,
        change_percent,
    })
    .collect()
}

pub fn backtest_reports() -> Vec<BacktestMetrics> {
    vec![
        BacktestMetrics {
            strategy: "AI Momentum + Sentiment",
            period: "2022-2024",
            total_return: 187.3,
            annualized_return: 31.2,
            win_rate: 68.4,
            sharpe_ratio: 1.84,
            max_drawdown: -12.7,
            total_trades: 342,
            avg_holding_period: "5.2 days",
            profit_factor: 2.31,
        },
        BacktestMetrics {
            strategy: "RSI + MACD Crossover",
            period: "2022-2024",
            total_return: 94.7,
            annualized_return: 18.3,
            win_rate: 61.2,
            sharpe_ratio: 1.42,
            max_drawdown: -18.3,
            total_trades: 567,
            avg_holding_period: "8.1 days",
            profit_factor: 1.67,
        },
        BacktestMetrics {
            strategy: "Volume Breakout",
            period: "2022-2024",
            total_return: 156.2,
            annualized_return: 26.8,
            win_rate: 59.8,
            sharpe_ratio: 1.63,
            max_drawdown: -15.9,
            total_trades: 428,
            avg_holding_period: "6.7 days",
            profit_factor: 1.94,
        },
    ]
}

pub fn monthly_returns() -> Vec<MonthlyReturn> {
    [
        ("Jan", 4.2),
        ("Feb", -2.1),
        ("Mar", 7.8),
        ("Apr", 3.4),
        ("May", -1.7),
        ("Jun", 8.9),
        ("Jul", 5.6),
        ("Aug", -3.2),
        ("Sep", 6.1),
        ("Oct", 9.3),
        ("Nov", 2.8),
        ("Dec", 4.7),
    ]
    .into_iter()
    .map(|(month, return_percent)| MonthlyReturn {
        month,
        return_percent,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_data_is_complete() {
        assert_eq!(index_snapshots().len(), 3);
        assert_eq!(sector_performance().len(), 5);
        assert_eq!(backtest_reports().len(), 3);
        assert_eq!(monthly_returns().len(), 12);
    }

    #[test]
    fn backtest_drawdowns_are_negative() {
        for report in backtest_reports() {
            assert!(report.max_drawdown < 0.0, "{}", report.strategy);
        }
    }
}
