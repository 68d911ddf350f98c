use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use signal_engine::LiveUpdateConfig;

/// Host configuration for the dashboard process
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds between live signal updates
    pub tick_interval_secs: u64,
    /// Summary refresh cycles the demo host runs before exiting
    pub refresh_cycles: u32,
    /// Use the deterministic criteria backend instead of the simulated one
    pub deterministic_screening: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 3,
            refresh_cycles: 3,
            deterministic_screening: false,
        }
    }
}

impl DashboardConfig {
    /// Load from an optional `dashboard.toml` plus `DASHBOARD_*` environment
    /// overrides; missing sources fall back to the defaults
    pub fn load() -> Result<Self> {
        let source = config::Config::builder()
            .add_source(config::File::with_name("dashboard").required(false))
            .add_source(config::Environment::with_prefix("DASHBOARD"))
            .build()
            .context("Failed to read dashboard configuration")?;
        source
            .try_deserialize()
            .context("Invalid dashboard configuration")
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    /// Live-update settings for the signal store
    pub fn live_update_config(&self) -> LiveUpdateConfig {
        LiveUpdateConfig {
            tick_interval: self.tick_interval(),
            ..LiveUpdateConfig::default()
        }
    }
}
