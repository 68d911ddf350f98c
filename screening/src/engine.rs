// Screening Engine
// Owns the criteria and candidate list and runs screening passes over them

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::candidate::ScreeningCandidate;
use crate::criteria::{CriterionUpdate, ScreeningCriteria};
use crate::screener::{Screener, SimulatedScreener};

/// Outcome of one screening pass
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub run_id: Uuid,
    pub completed_at: DateTime<Utc>,
    /// Candidates evaluated; always the full candidate list
    pub screened: usize,
    /// Candidates that matched at least one strategy
    pub matched: usize,
    pub tag_counts: HashMap<String, usize>,
}

/// Evaluates screening criteria over a candidate list
///
/// The candidate list is seed-injected and stable: a run retags candidates
/// in place, never adds or removes them.
pub struct ScreeningEngine {
    criteria: ScreeningCriteria,
    candidates: Vec<ScreeningCandidate>,
    screener: Box<dyn Screener>,
    rng: fastrand::Rng,
}

impl ScreeningEngine {
    /// Create an engine over the seed candidates with default criteria and
    /// the simulated screening backend
    pub fn new(seed: Vec<ScreeningCandidate>) -> Self {
        Self {
            criteria: ScreeningCriteria::default(),
            candidates: seed,
            screener: Box::new(SimulatedScreener),
            rng: fastrand::Rng::new(),
        }
    }

    /// Start from explicit criteria instead of the defaults
    pub fn with_criteria(mut self, criteria: ScreeningCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Swap in a different screening backend
    pub fn with_screener(mut self, screener: Box<dyn Screener>) -> Self {
        info!("Using {} screening backend", screener.name());
        self.screener = screener;
        self
    }

    /// Use an explicit RNG, for reproducible runs
    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    pub fn criteria(&self) -> &ScreeningCriteria {
        &self.criteria
    }

    pub fn candidates(&self) -> &[ScreeningCandidate] {
        &self.candidates
    }

    /// Replace a single criteria field with a validated value
    pub fn apply(&mut self, update: CriterionUpdate) {
        debug!("Applying criteria update: {:?}", update);
        self.criteria.apply(update);
    }

    /// Add a sector to the filter set; no-op if already present
    pub fn add_sector(&mut self, sector: impl Into<String>) -> bool {
        self.criteria.add_sector(sector)
    }

    /// Remove a sector from the filter set
    pub fn remove_sector(&mut self, sector: &str) -> bool {
        self.criteria.remove_sector(sector)
    }

    /// Restore the documented default criteria
    pub fn reset(&mut self) {
        self.criteria.reset();
        info!("Screening criteria reset to defaults");
    }

    /// Run one screening pass, replacing every candidate's tag list
    ///
    /// Completes synchronously and produces exactly one tag list per
    /// candidate; identity fields are untouched.
    pub fn run(&mut self) -> ScreeningReport {
        let Self {
            criteria,
            candidates,
            screener,
            rng,
        } = self;

        let mut tag_counts: HashMap<String, usize> = HashMap::new();
        let mut matched = 0usize;
        for candidate in candidates.iter_mut() {
            let tags = screener.screen(criteria, candidate, rng);
            if !tags.is_empty() {
                matched += 1;
            }
            for tag in &tags {
                *tag_counts.entry(tag.to_string()).or_insert(0) += 1;
            }
            candidate.signals = tags;
        }

        let report = ScreeningReport {
            run_id: Uuid::new_v4(),
            completed_at: Utc::now(),
            screened: candidates.len(),
            matched,
            tag_counts,
        };
        info!(
            "Screening run {} ({} backend) matched {} of {} candidates",
            report.run_id,
            screener.name(),
            report.matched,
            report.screened
        );
        report
    }
}
