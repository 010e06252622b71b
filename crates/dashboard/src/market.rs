//! Market overview analytics.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use types::{Quote, Symbol};

// =============================================================================
// MarketStatistics
// =============================================================================

/// Aggregate view over a set of quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatistics {
    pub total_stocks: usize,
    /// Mean percentage change, rounded to 2 decimals.
    pub avg_change: f64,
    pub gainers: usize,
    pub losers: usize,
    pub unchanged: usize,
}

impl MarketStatistics {
    /// Summarise `quotes`. Returns `None` when there is nothing to summarise.
    pub fn from_quotes(quotes: &[Quote]) -> Option<Self> {
        if quotes.is_empty() {
            return None;
        }

        let total: f64 = quotes.iter().map(|q| q.change_percent).sum();
        let avg = total / quotes.len() as f64;
        let gainers = quotes.iter().filter(|q| q.is_gainer()).count();
        let losers = quotes.iter().filter(|q| q.is_loser()).count();

        Some(Self {
            total_stocks: quotes.len(),
            avg_change: (avg * 100.0).round() / 100.0,
            gainers,
            losers,
            unchanged: quotes.len() - gainers - losers,
        })
    }
}

/// The `n` quotes with the largest absolute percentage move, largest first.
pub fn top_movers(quotes: &[Quote], n: usize) -> Vec<&Quote> {
    let mut sorted: Vec<&Quote> = quotes.iter().collect();
    sorted.sort_by(|a, b| b.change_percent.abs().total_cmp(&a.change_percent.abs()));
    sorted.truncate(n);
    sorted
}

// =============================================================================
// Sentiment
// =============================================================================

/// Upper bound on any sentiment score.
const MAX_SENTIMENT: f64 = 0.95;

/// Per-ticker pipeline-strength bonus added on top of momentum sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineStrength(HashMap<Symbol, f64>);

impl PipelineStrength {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn with(mut self, ticker: impl Into<Symbol>, bonus: f64) -> Self {
        self.0.insert(ticker.into(), bonus);
        self
    }

    /// Bonus for a ticker; zero when unknown.
    pub fn bonus(&self, ticker: &str) -> f64 {
        self.0.get(ticker).copied().unwrap_or(0.0)
    }
}

impl Default for PipelineStrength {
    fn default() -> Self {
        Self::new()
            .with("LLY", 0.10) // Orforglipron + Retatrutide
            .with("AMGN", 0.08)
            .with("VKTX", 0.05)
            .with("NVO", 0.03)
            .with("RHHBY", 0.05)
            .with("PFE", 0.00)
    }
}

/// Sentiment in `[0.55, 0.95]` from price momentum plus pipeline strength.
pub fn sentiment_score(ticker: &str, change_percent: f64, strength: &PipelineStrength) -> f64 {
    let base = if change_percent > 5.0 {
        0.85
    } else if change_percent > 2.0 {
        0.75
    } else if change_percent > -2.0 {
        0.65
    } else {
        0.55
    };
    (base + strength.bonus(ticker)).min(MAX_SENTIMENT)
}

/// Display bucket for a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryBullish,
    Bullish,
    Neutral,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            SentimentLabel::VeryBullish
        } else if score >= 0.65 {
            SentimentLabel::Bullish
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::VeryBullish => write!(f, "Very Bullish"),
            SentimentLabel::Bullish => write!(f, "Bullish"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Format a market capitalisation with a T/B/M suffix.
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= 1e12 {
        format!("{:.1}T", market_cap / 1e12)
    } else if market_cap >= 1e9 {
        format!("{:.1}B", market_cap / 1e9)
    } else if market_cap >= 1e6 {
        format!("{:.1}M", market_cap / 1e6)
    } else {
        format!("{market_cap:.0}")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(ticker: &str, change_percent: f64) -> Quote {
        Quote {
            ticker: ticker.to_string(),
            company: ticker.to_string(),
            price: 100.0,
            change: change_percent,
            change_percent,
            market_cap: "1B".to_string(),
            sentiment: 0.7,
        }
    }

    #[test]
    fn test_statistics_empty_is_none() {
        assert!(MarketStatistics::from_quotes(&[]).is_none());
    }

    #[test]
    fn test_statistics_counts() {
        let quotes = vec![
            quote("A", 2.16),
            quote("B", -0.72),
            quote("C", 0.0),
            quote("D", 1.20),
        ];
        let stats = MarketStatistics::from_quotes(&quotes).unwrap();
        assert_eq!(stats.total_stocks, 4);
        assert_eq!(stats.gainers, 2);
        assert_eq!(stats.losers, 1);
        assert_eq!(stats.unchanged, 1);
        assert_eq!(stats.avg_change, 0.66);
    }

    #[test]
    fn test_top_movers_by_absolute_change() {
        let quotes = vec![quote("A", 0.5), quote("B", -3.0), quote("C", 2.0)];
        let movers: Vec<_> = top_movers(&quotes, 2).iter().map(|q| q.ticker.as_str()).collect();
        assert_eq!(movers, vec!["B", "C"]);
    }

    #[test]
    fn test_top_movers_more_than_available() {
        let quotes = vec![quote("A", 0.5)];
        assert_eq!(top_movers(&quotes, 5).len(), 1);
    }

    #[test]
    fn test_sentiment_score_buckets() {
        let strength = PipelineStrength::new();
        assert_eq!(sentiment_score("X", 6.0, &strength), 0.85);
        assert_eq!(sentiment_score("X", 3.0, &strength), 0.75);
        assert_eq!(sentiment_score("X", 0.0, &strength), 0.65);
        assert_eq!(sentiment_score("X", -2.0, &strength), 0.55);
    }

    #[test]
    fn test_sentiment_score_capped() {
        let strength = PipelineStrength::default().with("MOON", 0.5);
        assert_eq!(sentiment_score("MOON", 10.0, &strength), 0.95);
        assert!((sentiment_score("AMGN", 0.0, &strength) - 0.73).abs() < 1e-12);
        assert_eq!(sentiment_score("UNKNOWN", 0.0, &strength), 0.65);
    }

    #[test]
    fn test_sentiment_label() {
        assert_eq!(SentimentLabel::from_score(0.85), SentimentLabel::VeryBullish);
        assert_eq!(SentimentLabel::from_score(0.65), SentimentLabel::Bullish);
        assert_eq!(SentimentLabel::from_score(0.64), SentimentLabel::Neutral);
    }

    #[test]
    fn test_format_market_cap() {
        assert_eq!(format_market_cap(962.2e9), "962.2B");
        assert_eq!(format_market_cap(1.34e12), "1.3T");
        assert_eq!(format_market_cap(3.61e9), "3.6B");
        assert_eq!(format_market_cap(45e6), "45.0M");
        assert_eq!(format_market_cap(999.0), "999");
    }
}
