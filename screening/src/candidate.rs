use serde::{Deserialize, Serialize};

/// Strategy family a candidate matched during a screening pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyTag {
    Momentum,
    Breakout,
    Reversal,
}

impl std::fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyTag::Momentum => write!(f, "Momentum"),
            StrategyTag::Breakout => write!(f, "Breakout"),
            StrategyTag::Reversal => write!(f, "Reversal"),
        }
    }
}

/// Stock record under consideration during a screening pass
///
/// `volume` and `market_cap` carry the display form the feed provides
/// ("45.2M", "1.78T"); `signals` is replaced wholesale by each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningCandidate {
    pub symbol: String,
    pub price: f64,
    pub volume: String,
    pub market_cap: String,
    pub sector: String,
    pub signals: Vec<StrategyTag>,
}

impl ScreeningCandidate {
    /// Share volume as a number, if the display form parses
    pub fn volume_value(&self) -> Option<f64> {
        parse_compact_amount(&self.volume)
    }

    /// Market cap as a number, if the display form parses
    pub fn market_cap_value(&self) -> Option<f64> {
        parse_compact_amount(&self.market_cap)
    }
}

/// Parse a compact display amount ("45.2M", "1.78T", "12,800") into a number
///
/// Recognizes K/M/B/T suffixes, case-insensitive, and ignores thousands
/// separators. Returns None for anything else.
pub fn parse_compact_amount(text: &str) -> Option<f64> {
    let text = text.trim().replace(',', "");
    if text.is_empty() {
        return None;
    }

    let (digits, multiplier) = match text.as_bytes()[text.len() - 1] {
        b'K' | b'k' => (&text[..text.len() - 1], 1e3),
        b'M' | b'm' => (&text[..text.len() - 1], 1e6),
        b'B' | b'b' => (&text[..text.len() - 1], 1e9),
        b'T' | b't' => (&text[..text.len() - 1], 1e12),
        _ => (text.as_str(), 1.0),
    };

    let value: f64 = digits.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value * multiplier)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suffixed_amounts() {
        assert_eq!(parse_compact_amount("45.2M"), Some(45_200_000.0));
        assert_eq!(parse_compact_amount("428.9B"), Some(428_900_000_000.0));
        assert_eq!(parse_compact_amount("1.78T"), Some(1_780_000_000_000.0));
        assert_eq!(parse_compact_amount("950k"), Some(950_000.0));
    }

    #[test]
    fn parses_plain_and_separated_amounts() {
        assert_eq!(parse_compact_amount("1250"), Some(1250.0));
        assert_eq!(parse_compact_amount("12,800"), Some(12800.0));
        assert_eq!(parse_compact_amount(" 64.5 "), Some(64.5));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_compact_amount(""), None);
        assert_eq!(parse_compact_amount("n/a"), None);
        assert_eq!(parse_compact_amount("M"), None);
        assert_eq!(parse_compact_amount("-12M"), None);
    }

    #[test]
    fn candidate_exposes_numeric_amounts() {
        let candidate = ScreeningCandidate {
            symbol: "NVDA".to_string(),
            price: 722.15,
            volume: "45.2M".to_string(),
            market_cap: "1.78T".to_string(),
            sector: "Technology".to_string(),
            signals: Vec::new(),
        };
        assert_eq!(candidate.volume_value(), Some(45_200_000.0));
        assert_eq!(candidate.market_cap_value(), Some(1_780_000_000_000.0));
    }
}
