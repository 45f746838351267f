//! One-shot market feed: runs the single fetch of a session on a tokio task

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::client::MarketSource;
use super::state::DashboardEvent;

/// Spawn the session fetch.
///
/// Sends exactly one event: `FetchSucceeded` with the raw entries, or
/// `FetchFailed` after logging the failure. Fire-and-forget, no retry.
pub fn spawn_market_feed(
    source: Arc<dyn MarketSource>,
    event_tx: mpsc::UnboundedSender<DashboardEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let event = match source.fetch_markets().await {
            Ok(entries) => {
                info!("Fetched {} market entries", entries.len());
                DashboardEvent::FetchSucceeded(entries)
            }
            Err(e) => {
                if e.is_transport() {
                    error!("Error fetching cryptocurrency data (network): {}", e);
                } else {
                    error!("Error fetching cryptocurrency data: {}", e);
                }
                DashboardEvent::FetchFailed(e)
            }
        };

        if event_tx.send(event).is_err() {
            warn!("Dashboard dropped before market data arrived");
        }
    })
}
