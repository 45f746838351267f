//! Recommendation heuristic and the derivation stage
//!
//! Everything here is a total function over already-fetched entries.

use std::cmp::Ordering;

use super::types::MarketEntry;

/// 24h drop (in percent) beyond which an entry becomes a buy recommendation
pub const BUY_THRESHOLD_PCT: f64 = -5.0;

/// Number of entries in each movers list
pub const MOVERS_LEN: usize = 3;

/// Label derived solely from the 24h percentage change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Buy,
    Hold,
    NotBuy,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::NotBuy => "Not Buy",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// change < -5 → Buy, change > 0 → NotBuy, otherwise Hold
pub fn recommendation(change: f64) -> Recommendation {
    if change < BUY_THRESHOLD_PCT {
        Recommendation::Buy
    } else if change > 0.0 {
        Recommendation::NotBuy
    } else {
        Recommendation::Hold
    }
}

/// Lists derived once from a freshly fetched set of entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Derived {
    /// Entries down more than 5% in 24h, original order
    pub recommendations: Vec<MarketEntry>,
    /// Top 3 by 24h change, best first
    pub gainers: Vec<MarketEntry>,
    /// Bottom 3 by 24h change, worst first
    pub losers: Vec<MarketEntry>,
}

pub fn derive(entries: &[MarketEntry]) -> Derived {
    let recommendations = entries
        .iter()
        .filter(|entry| entry.change_24h() < BUY_THRESHOLD_PCT)
        .cloned()
        .collect();

    let mut sorted: Vec<&MarketEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| by_change_desc(a, b));

    let gainers = sorted.iter().take(MOVERS_LEN).map(|e| (*e).clone()).collect();
    let losers = sorted
        .iter()
        .rev()
        .take(MOVERS_LEN)
        .map(|e| (*e).clone())
        .collect();

    Derived {
        recommendations,
        gainers,
        losers,
    }
}

/// Descending by 24h change; total so NaN never panics the sort
fn by_change_desc(a: &MarketEntry, b: &MarketEntry) -> Ordering {
    b.change_24h().total_cmp(&a.change_24h())
}

/// Min/max of a price series
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Min/max over a series; zero range for an empty series
pub fn price_range(prices: &[f64]) -> PriceRange {
    let mut finite = prices.iter().copied().filter(|p| p.is_finite());
    let Some(first) = finite.next() else {
        return PriceRange::default();
    };

    finite.fold(PriceRange { min: first, max: first }, |range, price| PriceRange {
        min: range.min.min(price),
        max: range.max.max(price),
    })
}
