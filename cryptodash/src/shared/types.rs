/// Core data types for market entries
///
/// These types match the JSON records returned by the CoinGecko
/// `/coins/markets` endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of one asset as returned by the markets endpoint
///
/// Entries are immutable once received; the dashboard replaces the whole
/// list on every successful fetch.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarketEntry {
    /// API identifier (e.g., "bitcoin")
    pub id: String,
    /// Display name (e.g., "Bitcoin")
    pub name: String,
    /// Ticker symbol, lower-case as served (e.g., "btc")
    pub symbol: String,
    /// Market capitalisation rank (None for unranked assets)
    #[serde(rename = "market_cap_rank", alias = "rank", default)]
    pub rank: Option<u32>,
    /// Market capitalisation in the quote currency
    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap: f64,
    /// Current price in the quote currency
    #[serde(default, deserialize_with = "null_as_zero")]
    pub current_price: f64,
    /// 24h trading volume in the quote currency
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_volume: f64,
    /// Total supply (None when the asset has no fixed supply)
    #[serde(default)]
    pub total_supply: Option<f64>,
    /// 24h price change in percent (e.g., -6.2 for a 6.2% drop)
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price_change_percentage_24h: f64,
    /// Icon URL
    #[serde(default)]
    pub image: String,
    /// 7-day price samples, present when the request asked for sparklines
    #[serde(default)]
    pub sparkline_in_7d: Option<SparklineIn7d>,
    /// Time the API last refreshed this entry
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// 7-day price sample series
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SparklineIn7d {
    #[serde(default)]
    pub price: Vec<f64>,
}

impl MarketEntry {
    /// Upper-case ticker symbol for display
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// 7-day sample prices, empty when the entry carries none
    pub fn sample_prices(&self) -> &[f64] {
        self.sparkline_in_7d
            .as_ref()
            .map(|sparkline| sparkline.price.as_slice())
            .unwrap_or(&[])
    }

    /// 24h change in percent
    pub fn change_24h(&self) -> f64 {
        self.price_change_percentage_24h
    }
}

/// The markets endpoint reports `null` for numbers it does not know
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}
