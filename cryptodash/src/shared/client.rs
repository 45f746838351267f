/// REST client for the CoinGecko markets endpoint
///
/// One GET per session: no timeout, no retry, no pagination past page 1

use crate::shared::{error::FetchError, types::MarketEntry};
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

/// Default public API root
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Markets request configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketClientConfig {
    /// API root, the markets path is appended to it
    pub base_url: String,
    /// Quote currency symbol
    pub vs_currency: String,
    /// Sort order of the ranked list
    pub order: String,
    /// Entries per page
    pub per_page: u32,
    /// Page number (1-based)
    pub page: u32,
    /// Ask for embedded 7-day sample series
    pub sparkline: bool,
}

impl Default for MarketClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            vs_currency: "usd".to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 100,
            page: 1,
            sparkline: true,
        }
    }
}

impl MarketClientConfig {
    /// Create a new configuration with custom API root
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set quote currency
    pub fn with_currency(mut self, vs_currency: impl Into<String>) -> Self {
        self.vs_currency = vs_currency.into();
        self
    }

    /// Set page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set whether 7-day sample series are requested
    pub fn with_sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = sparkline;
        self
    }

    /// Full markets URL including query parameters
    pub fn markets_url(&self) -> Result<Url, FetchError> {
        // Url::join drops the last path segment unless the base ends with '/'
        let base = if self.base_url.ends_with('/') {
            Url::parse(&self.base_url)?
        } else {
            Url::parse(&format!("{}/", self.base_url))?
        };

        let mut url = base.join("coins/markets")?;
        url.query_pairs_mut()
            .append_pair("vs_currency", &self.vs_currency)
            .append_pair("order", &self.order)
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("page", &self.page.to_string())
            .append_pair("sparkline", if self.sparkline { "true" } else { "false" });

        Ok(url)
    }
}

/// Source of the ranked market list
#[async_trait]
pub trait MarketSource: Send + Sync {
    async fn fetch_markets(&self) -> Result<Vec<MarketEntry>, FetchError>;
}

/// HTTP implementation of [`MarketSource`]
#[derive(Debug, Clone)]
pub struct MarketClient {
    config: MarketClientConfig,
    http: reqwest::Client,
}

impl MarketClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(MarketClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: MarketClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &MarketClientConfig {
        &self.config
    }
}

impl Default for MarketClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketSource for MarketClient {
    async fn fetch_markets(&self) -> Result<Vec<MarketEntry>, FetchError> {
        let url = self.config.markets_url()?;
        info!("Fetching market entries from {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let entries = decode_markets(&body)?;
        debug!("Decoded {} market entries", entries.len());
        Ok(entries)
    }
}

/// Decode a markets response body, preserving server order
pub fn decode_markets(body: &str) -> Result<Vec<MarketEntry>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
