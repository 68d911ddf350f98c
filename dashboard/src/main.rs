use anyhow::Result;
use dashboard::{seed, DashboardConfig, DashboardSnapshot};
use screening::{CriteriaScreener, ScreeningEngine};
use signal_engine::SignalStore;
use tracing::{info, Level};
use tracing_subscriber::fmt;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    fmt().with_max_level(Level::INFO).init();

    let config = DashboardConfig::load()?;

    info!("AI Trading Dashboard");
    info!("====================");

    let store = SignalStore::new(seed::demo_signals(), config.live_update_config())?;
    let mut engine =
        ScreeningEngine::new(seed::demo_candidates()).with_criteria(seed::demo_criteria());
    if config.deterministic_screening {
        engine = engine.with_screener(Box::new(CriteriaScreener));
    }

    // Live signal updates for a few refresh cycles
    store.start().await;
    for cycle in 1..=config.refresh_cycles {
        tokio::time::sleep(config.tick_interval()).await;

        let summary = store.summary().await;
        info!(
            "Cycle {}/{}: {} active signals, {} high confidence",
            cycle, config.refresh_cycles, summary.total, summary.high_confidence
        );
        info!(
            "  Buy: {} (avg confidence {:.1}%)  Sell: {} (avg confidence {:.1}%)",
            summary.buy.count,
            summary.buy.avg_confidence,
            summary.sell.count,
            summary.sell.avg_confidence
        );
    }
    store.stop().await;
    info!("Applied {} live ticks", store.tick_count());

    // One screening pass over the candidate list
    let report = engine.run();
    info!(
        "Screening matched {} of {} candidates",
        report.matched, report.screened
    );
    for candidate in engine.candidates() {
        let tags: Vec<String> = candidate.signals.iter().map(|t| t.to_string()).collect();
        info!(
            "  {} ({}) ${:.2} [{}]",
            candidate.symbol,
            candidate.sector,
            candidate.price,
            tags.join(", ")
        );
    }

    // Final snapshot for the presentation layer
    let snapshot = DashboardSnapshot::gather(&store, &engine).await;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
