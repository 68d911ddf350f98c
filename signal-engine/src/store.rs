// Signal Store
// In-memory signal collection with a timer-driven live update loop
// and read-only dashboard aggregates

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::signal::{SignalAction, TradingSignal};

/// Live-update rule keeps confidence inside this band
pub const CONFIDENCE_FLOOR: f64 = 70.0;
pub const CONFIDENCE_CEILING: f64 = 99.0;

/// Signals at or above this confidence count as high confidence
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 85.0;

/// Configuration for the live update loop
#[derive(Debug, Clone)]
pub struct LiveUpdateConfig {
    /// Fixed period between ticks
    pub tick_interval: Duration,
    /// Maximum absolute price move per tick
    pub price_jitter: f64,
    /// Maximum absolute change move per tick
    pub change_jitter: f64,
    /// Maximum absolute confidence move per tick, before clamping
    pub confidence_jitter: f64,
}

impl Default for LiveUpdateConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(3),
            price_jitter: 1.0,
            change_jitter: 0.25,
            confidence_jitter: 2.5,
        }
    }
}

/// Count and average confidence for one action subset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionStats {
    pub count: usize,
    /// 0.0 when the subset is empty
    pub avg_confidence: f64,
}

/// Aggregate view over the current signal collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSummary {
    pub total: usize,
    pub high_confidence: usize,
    pub buy: ActionStats,
    pub sell: ActionStats,
    pub hold: ActionStats,
}

impl SignalSummary {
    /// Compute the summary for a signal slice without mutating it
    pub fn from_signals(signals: &[TradingSignal]) -> Self {
        Self {
            total: signals.len(),
            high_confidence: signals
                .iter()
                .filter(|s| s.confidence >= HIGH_CONFIDENCE_THRESHOLD)
                .count(),
            buy: ActionStats::for_action(signals, SignalAction::Buy),
            sell: ActionStats::for_action(signals, SignalAction::Sell),
            hold: ActionStats::for_action(signals, SignalAction::Hold),
        }
    }
}

impl ActionStats {
    fn for_action(signals: &[TradingSignal], action: SignalAction) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0f64;
        for signal in signals.iter().filter(|s| s.action == action) {
            count += 1;
            sum += signal.confidence;
        }
        let avg_confidence = if count > 0 { sum / count as f64 } else { 0.0 };
        Self {
            count,
            avg_confidence,
        }
    }
}

struct StoreState {
    signals: Vec<TradingSignal>,
    rng: fastrand::Rng,
}

struct Updater {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

struct Inner {
    state: RwLock<StoreState>,
    updater: Mutex<Option<Updater>>,
    config: LiveUpdateConfig,
    ticks: AtomicU64,
}

/// Owns the trading-signal collection and the periodic live-update task
///
/// Cloning is cheap and shares the underlying store. At most one updater
/// task is ever registered; `start` on a running store is a no-op.
#[derive(Clone)]
pub struct SignalStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SignalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalStore")
            .field("ticks", &self.inner.ticks.load(Ordering::Relaxed))
            .finish()
    }
}

impl SignalStore {
    /// Create a store from seed signals. Fails on duplicate signal ids.
    pub fn new(seed: Vec<TradingSignal>, config: LiveUpdateConfig) -> Result<Self> {
        Self::with_rng(seed, config, fastrand::Rng::new())
    }

    /// Create a store with an explicit RNG, for reproducible simulation
    pub fn with_rng(
        seed: Vec<TradingSignal>,
        config: LiveUpdateConfig,
        rng: fastrand::Rng,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for signal in &seed {
            if !seen.insert(signal.id.as_str()) {
                bail!("duplicate signal id in seed data: {}", signal.id);
            }
        }

        Ok(Self {
            inner: Arc::new(Inner {
                state: RwLock::new(StoreState { signals: seed, rng }),
                updater: Mutex::new(None),
                config,
                ticks: AtomicU64::new(0),
            }),
        })
    }

    /// Register the periodic update task
    ///
    /// Returns false if an updater is already running; a second call never
    /// registers a second timer.
    pub async fn start(&self) -> bool {
        let mut slot = self.inner.updater.lock().await;
        if slot.is_some() {
            debug!("Live updates already running, start ignored");
            return false;
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let store = self.clone();
        let period = self.inner.config.tick_interval;

        let task = tokio::spawn(async move {
            let first = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(first, period);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        store.tick().await;
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            debug!("Live update loop exited");
        });

        *slot = Some(Updater { shutdown_tx, task });
        info!("Live signal updates started ({:?} interval)", period);
        true
    }

    /// Cancel the update task and wait for it to finish
    ///
    /// An in-flight tick completes; no further ticks fire. Returns false if
    /// no updater was running.
    pub async fn stop(&self) -> bool {
        let updater = self.inner.updater.lock().await.take();
        match updater {
            Some(Updater { shutdown_tx, task }) => {
                let _ = shutdown_tx.send(true);
                if let Err(e) = task.await {
                    warn!("Live update task ended abnormally: {}", e);
                }
                info!("Live signal updates stopped");
                true
            }
            None => false,
        }
    }

    /// Flip live mode, returning the new state
    pub async fn toggle_live(&self) -> bool {
        if self.stop().await {
            false
        } else {
            self.start().await;
            true
        }
    }

    /// Whether the update task is currently registered
    pub async fn is_live(&self) -> bool {
        self.inner.updater.lock().await.is_some()
    }

    /// Apply one live-update step to every signal as a single atomic batch
    ///
    /// Readers never observe a partially updated collection; all timestamps
    /// written by one tick are identical.
    pub async fn tick(&self) {
        let now = Utc::now();
        let mut guard = self.inner.state.write().await;
        let StoreState { signals, rng } = &mut *guard;
        for signal in signals.iter_mut() {
            perturb(signal, &self.inner.config, rng, now);
        }
        let updated = signals.len();
        drop(guard);

        self.inner.ticks.fetch_add(1, Ordering::Relaxed);
        debug!("Applied live tick to {} signals", updated);
    }

    /// Total ticks applied since construction
    pub fn tick_count(&self) -> u64 {
        self.inner.ticks.load(Ordering::Relaxed)
    }

    /// Snapshot of the ordered signal collection
    pub async fn signals(&self) -> Vec<TradingSignal> {
        self.inner.state.read().await.signals.clone()
    }

    /// Signals at or above the high-confidence threshold
    pub async fn high_confidence_signals(&self) -> Vec<TradingSignal> {
        let state = self.inner.state.read().await;
        state
            .signals
            .iter()
            .filter(|s| s.confidence >= HIGH_CONFIDENCE_THRESHOLD)
            .cloned()
            .collect()
    }

    /// Signals carrying the given action
    pub async fn signals_with_action(&self, action: SignalAction) -> Vec<TradingSignal> {
        let state = self.inner.state.read().await;
        state
            .signals
            .iter()
            .filter(|s| s.action == action)
            .cloned()
            .collect()
    }

    /// Derived aggregates over the current collection
    pub async fn summary(&self) -> SignalSummary {
        let state = self.inner.state.read().await;
        SignalSummary::from_signals(&state.signals)
    }

    pub async fn len(&self) -> usize {
        self.inner.state.read().await.signals.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// One live-update step for a single signal
///
/// Pure in the previous value and the random draws; no cross-signal
/// dependency. `change_percent` is kept consistent with `change` and the
/// session reference price, retaining its previous value when the reference
/// is ~0.
fn perturb(
    signal: &mut TradingSignal,
    config: &LiveUpdateConfig,
    rng: &mut fastrand::Rng,
    now: DateTime<Utc>,
) {
    signal.price += jitter(rng, config.price_jitter);
    signal.change += jitter(rng, config.change_jitter);
    signal.confidence = (signal.confidence + jitter(rng, config.confidence_jitter))
        .clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

    let reference = signal.price - signal.change;
    if reference.abs() > f64::EPSILON {
        signal.change_percent = signal.change / reference * 100.0;
    }

    signal.timestamp = now;
}

/// Uniform draw from [-half_width, half_width]
fn jitter(rng: &mut fastrand::Rng, half_width: f64) -> f64 {
    (rng.f64() - 0.5) * 2.0 * half_width
}
