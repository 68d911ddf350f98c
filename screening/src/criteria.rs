use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Inclusive numeric range; bounds are ordered at construction
///
/// A pair supplied out of order is swapped, never stored as-is, so
/// `low() <= high()` always holds. Serializes as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct BoundedRange {
    low: f64,
    high: f64,
}

impl BoundedRange {
    pub fn new(a: f64, b: f64) -> Self {
        let a = sanitize_amount(a);
        let b = sanitize_amount(b);
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl From<(f64, f64)> for BoundedRange {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl From<BoundedRange> for (f64, f64) {
    fn from(range: BoundedRange) -> Self {
        (range.low, range.high)
    }
}

/// Single-field edit to the screening criteria
#[derive(Debug, Clone, PartialEq)]
pub enum CriterionUpdate {
    MinPrice(f64),
    MaxPrice(f64),
    MinVolume(f64),
    MinMarketCap(f64),
    VolatilityRange(f64, f64),
    RsiRange(f64, f64),
    Momentum(bool),
    Breakout(bool),
    Reversal(bool),
}

/// Desired stock characteristics for a screening pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningCriteria {
    pub min_price: f64,
    pub max_price: f64,
    pub min_volume: f64,
    pub min_market_cap: f64,
    pub sectors: BTreeSet<String>,
    /// Annualized volatility band, percent
    pub volatility_range: BoundedRange,
    pub rsi_range: BoundedRange,
    pub enable_momentum: bool,
    pub enable_breakout: bool,
    pub enable_reversal: bool,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            min_price: 10.0,
            max_price: 500.0,
            min_volume: 1_000_000.0,
            min_market_cap: 1_000_000_000.0,
            sectors: BTreeSet::new(),
            volatility_range: BoundedRange::new(15.0, 40.0),
            rsi_range: BoundedRange::new(20.0, 80.0),
            enable_momentum: true,
            enable_breakout: true,
            enable_reversal: false,
        }
    }
}

impl ScreeningCriteria {
    /// Replace a single field with a validated value
    ///
    /// Non-finite or negative numeric input is coerced to 0; range bounds
    /// are re-ordered when supplied low > high.
    pub fn apply(&mut self, update: CriterionUpdate) {
        match update {
            CriterionUpdate::MinPrice(value) => self.min_price = sanitize_amount(value),
            CriterionUpdate::MaxPrice(value) => self.max_price = sanitize_amount(value),
            CriterionUpdate::MinVolume(value) => self.min_volume = sanitize_amount(value),
            CriterionUpdate::MinMarketCap(value) => self.min_market_cap = sanitize_amount(value),
            CriterionUpdate::VolatilityRange(low, high) => {
                self.volatility_range = BoundedRange::new(low, high)
            }
            CriterionUpdate::RsiRange(low, high) => self.rsi_range = BoundedRange::new(low, high),
            CriterionUpdate::Momentum(enabled) => self.enable_momentum = enabled,
            CriterionUpdate::Breakout(enabled) => self.enable_breakout = enabled,
            CriterionUpdate::Reversal(enabled) => self.enable_reversal = enabled,
        }
    }

    /// Add a sector to the filter set; returns false if it was already present
    pub fn add_sector(&mut self, sector: impl Into<String>) -> bool {
        self.sectors.insert(sector.into())
    }

    /// Remove a sector from the filter set; returns false if it was absent
    pub fn remove_sector(&mut self, sector: &str) -> bool {
        self.sectors.remove(sector)
    }

    /// An empty sector set admits every sector
    pub fn matches_sector(&self, sector: &str) -> bool {
        self.sectors.is_empty() || self.sectors.contains(sector)
    }

    /// Restore the documented default criteria, discarding all prior edits
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Numeric criterion inputs must be finite and non-negative; anything else
/// is coerced to 0
fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let criteria = ScreeningCriteria::default();
        assert_eq!(criteria.min_price, 10.0);
        assert_eq!(criteria.max_price, 500.0);
        assert_eq!(criteria.min_volume, 1_000_000.0);
        assert_eq!(criteria.min_market_cap, 1_000_000_000.0);
        assert!(criteria.sectors.is_empty());
        assert_eq!(criteria.volatility_range, BoundedRange::new(15.0, 40.0));
        assert_eq!(criteria.rsi_range, BoundedRange::new(20.0, 80.0));
        assert!(criteria.enable_momentum);
        assert!(criteria.enable_breakout);
        assert!(!criteria.enable_reversal);
    }

    #[test]
    fn reset_discards_prior_mutation_history() {
        let mut criteria = ScreeningCriteria::default();
        criteria.apply(CriterionUpdate::MinPrice(42.0));
        criteria.apply(CriterionUpdate::Reversal(true));
        criteria.add_sector("Energy");

        criteria.reset();
        assert_eq!(criteria, ScreeningCriteria::default());

        // idempotent
        criteria.reset();
        assert_eq!(criteria, ScreeningCriteria::default());
    }

    #[test]
    fn adding_a_sector_twice_keeps_one_entry() {
        let mut criteria = ScreeningCriteria::default();
        assert!(criteria.add_sector("Technology"));
        assert!(!criteria.add_sector("Technology"));
        assert_eq!(criteria.sectors.len(), 1);

        assert!(criteria.remove_sector("Technology"));
        assert!(!criteria.remove_sector("Technology"));
        assert!(criteria.sectors.is_empty());
    }

    #[test]
    fn empty_sector_set_admits_everything() {
        let mut criteria = ScreeningCriteria::default();
        assert!(criteria.matches_sector("Utilities"));

        criteria.add_sector("Healthcare");
        assert!(criteria.matches_sector("Healthcare"));
        assert!(!criteria.matches_sector("Utilities"));
    }

    #[test]
    fn out_of_order_range_bounds_are_swapped() {
        let mut criteria = ScreeningCriteria::default();
        criteria.apply(CriterionUpdate::RsiRange(80.0, 20.0));
        assert_eq!(criteria.rsi_range.low(), 20.0);
        assert_eq!(criteria.rsi_range.high(), 80.0);

        criteria.apply(CriterionUpdate::VolatilityRange(55.0, 5.0));
        assert_eq!(criteria.volatility_range.low(), 5.0);
        assert_eq!(criteria.volatility_range.high(), 55.0);
    }

    #[test]
    fn invalid_numeric_input_coerces_to_zero() {
        let mut criteria = ScreeningCriteria::default();
        criteria.apply(CriterionUpdate::MinPrice(-25.0));
        assert_eq!(criteria.min_price, 0.0);

        criteria.apply(CriterionUpdate::MinVolume(f64::NAN));
        assert_eq!(criteria.min_volume, 0.0);

        criteria.apply(CriterionUpdate::MinMarketCap(f64::INFINITY));
        assert_eq!(criteria.min_market_cap, 0.0);
    }

    #[test]
    fn range_contains_is_inclusive() {
        let range = BoundedRange::new(20.0, 80.0);
        assert!(range.contains(20.0));
        assert!(range.contains(80.0));
        assert!(!range.contains(19.9));
        assert!(!range.contains(80.1));
    }
}
