use crate::candidate::{ScreeningCandidate, StrategyTag};
use crate::criteria::ScreeningCriteria;

/// Screening backend: recomputes one candidate's matched-strategy tags
///
/// Implementations are pure in (criteria, candidate, random source). They
/// decide tags only; the engine owns writing them back, so identity fields
/// and candidate count can never change during a run.
pub trait Screener: Send + Sync {
    fn screen(
        &self,
        criteria: &ScreeningCriteria,
        candidate: &ScreeningCandidate,
        rng: &mut fastrand::Rng,
    ) -> Vec<StrategyTag>;

    fn name(&self) -> &'static str;
}

/// Simulated screening pass
///
/// Stands in for a screening backend that is not modeled here: each
/// candidate independently draws {Momentum, Breakout} or {Reversal} on a
/// fair coin flip, ignoring the criteria values.
pub struct SimulatedScreener;

impl Screener for SimulatedScreener {
    fn screen(
        &self,
        _criteria: &ScreeningCriteria,
        _candidate: &ScreeningCandidate,
        rng: &mut fastrand::Rng,
    ) -> Vec<StrategyTag> {
        if rng.bool() {
            vec![StrategyTag::Momentum, StrategyTag::Breakout]
        } else {
            vec![StrategyTag::Reversal]
        }
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

/// Deterministic screening pass over the criteria fields candidates carry
///
/// A candidate outside the price bounds, below the volume or market-cap
/// minimums (unparseable display amounts count as 0), or outside the sector
/// set gets no tags; a passing candidate gets the tags of the enabled
/// strategies. The volatility and RSI bands describe inputs to an upstream
/// data provider and are not evaluated against candidates.
pub struct CriteriaScreener;

impl Screener for CriteriaScreener {
    fn screen(
        &self,
        criteria: &ScreeningCriteria,
        candidate: &ScreeningCandidate,
        _rng: &mut fastrand::Rng,
    ) -> Vec<StrategyTag> {
        if !passes_bounds(criteria, candidate) {
            return Vec::new();
        }

        let mut tags = Vec::new();
        if criteria.enable_momentum {
            tags.push(StrategyTag::Momentum);
        }
        if criteria.enable_breakout {
            tags.push(StrategyTag::Breakout);
        }
        if criteria.enable_reversal {
            tags.push(StrategyTag::Reversal);
        }
        tags
    }

    fn name(&self) -> &'static str {
        "criteria"
    }
}

fn passes_bounds(criteria: &ScreeningCriteria, candidate: &ScreeningCandidate) -> bool {
    if candidate.price < criteria.min_price || candidate.price > criteria.max_price {
        return false;
    }
    if candidate.volume_value().unwrap_or(0.0) < criteria.min_volume {
        return false;
    }
    if candidate.market_cap_value().unwrap_or(0.0) < criteria.min_market_cap {
        return false;
    }
    criteria.matches_sector(&candidate.sector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriterionUpdate;

    fn make_candidate(symbol: &str, price: f64, sector: &str) -> ScreeningCandidate {
        ScreeningCandidate {
            symbol: symbol.to_string(),
            price,
            volume: "45.2M".to_string(),
            market_cap: "1.78T".to_string(),
            sector: sector.to_string(),
            signals: Vec::new(),
        }
    }

    #[test]
    fn simulated_screener_picks_one_of_two_tag_sets() {
        let criteria = ScreeningCriteria::default();
        let candidate = make_candidate("NVDA", 722.15, "Technology");
        let mut rng = fastrand::Rng::with_seed(3);

        let momentum_breakout = vec![StrategyTag::Momentum, StrategyTag::Breakout];
        let reversal = vec![StrategyTag::Reversal];

        let mut saw_momentum = false;
        let mut saw_reversal = false;
        for _ in 0..100 {
            let tags = SimulatedScreener.screen(&criteria, &candidate, &mut rng);
            assert!(tags == momentum_breakout || tags == reversal);
            saw_momentum |= tags == momentum_breakout;
            saw_reversal |= tags == reversal;
        }
        // both outcomes show up over 100 fair flips
        assert!(saw_momentum && saw_reversal);
    }

    #[test]
    fn criteria_screener_tags_enabled_strategies_for_passing_candidates() {
        let mut criteria = ScreeningCriteria::default();
        criteria.apply(CriterionUpdate::MaxPrice(1000.0));
        let candidate = make_candidate("NVDA", 722.15, "Technology");
        let mut rng = fastrand::Rng::with_seed(0);

        let tags = CriteriaScreener.screen(&criteria, &candidate, &mut rng);
        assert_eq!(tags, vec![StrategyTag::Momentum, StrategyTag::Breakout]);

        criteria.apply(CriterionUpdate::Breakout(false));
        criteria.apply(CriterionUpdate::Reversal(true));
        let tags = CriteriaScreener.screen(&criteria, &candidate, &mut rng);
        assert_eq!(tags, vec![StrategyTag::Momentum, StrategyTag::Reversal]);
    }

    #[test]
    fn criteria_screener_rejects_out_of_bounds_candidates() {
        let criteria = ScreeningCriteria::default();
        let mut rng = fastrand::Rng::with_seed(0);

        // default max_price is 500
        let pricey = make_candidate("NVDA", 722.15, "Technology");
        assert!(CriteriaScreener.screen(&criteria, &pricey, &mut rng).is_empty());

        let mut thin = make_candidate("AAPL", 185.42, "Technology");
        thin.volume = "300K".to_string();
        assert!(CriteriaScreener.screen(&criteria, &thin, &mut rng).is_empty());

        let mut unreadable = make_candidate("AAPL", 185.42, "Technology");
        unreadable.market_cap = "n/a".to_string();
        assert!(CriteriaScreener
            .screen(&criteria, &unreadable, &mut rng)
            .is_empty());
    }

    #[test]
    fn criteria_screener_applies_sector_membership() {
        let mut criteria = ScreeningCriteria::default();
        criteria.add_sector("Healthcare");
        let mut rng = fastrand::Rng::with_seed(0);

        let tech = make_candidate("AAPL", 185.42, "Technology");
        assert!(CriteriaScreener.screen(&criteria, &tech, &mut rng).is_empty());

        let health = make_candidate("JNJ", 164.73, "Healthcare");
        assert!(!CriteriaScreener
            .screen(&criteria, &health, &mut rng)
            .is_empty());
    }
}
