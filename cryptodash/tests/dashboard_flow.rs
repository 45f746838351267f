use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cryptodash::{
    spawn_market_feed, Dashboard, DashboardEvent, FetchError, ManualClock, MarketEntry,
    MarketSource, RotatorConfig,
};
use tokio::sync::mpsc;

const MARKETS_BODY: &str = r#"[
    { "id": "bitcoin", "symbol": "btc", "name": "Bitcoin", "image": "https://img/btc.png",
      "current_price": 60000.0, "market_cap": 1200000000000, "market_cap_rank": 1,
      "total_volume": 30000000000, "total_supply": 21000000,
      "price_change_percentage_24h": 2.0,
      "sparkline_in_7d": { "price": [58000.0, 59000.0, 60000.0] } },
    { "id": "ethereum", "symbol": "eth", "name": "Ethereum", "image": "https://img/eth.png",
      "current_price": 3000.0, "market_cap": 360000000000, "market_cap_rank": 2,
      "total_volume": 15000000000, "total_supply": null,
      "price_change_percentage_24h": -6.5 },
    { "id": "solana", "symbol": "sol", "name": "Solana", "image": "https://img/sol.png",
      "current_price": 150.0, "market_cap": 70000000000, "market_cap_rank": 3,
      "total_volume": 2000000000, "total_supply": 580000000,
      "price_change_percentage_24h": -11.0 },
    { "id": "tether", "symbol": "usdt", "name": "Tether", "image": "https://img/usdt.png",
      "current_price": 1.0, "market_cap": 110000000000, "market_cap_rank": 4,
      "total_volume": 50000000000, "total_supply": 110000000000,
      "price_change_percentage_24h": 0.0 }
]"#;

struct StaticSource(Result<Vec<MarketEntry>, FetchError>);

#[async_trait]
impl MarketSource for StaticSource {
    async fn fetch_markets(&self) -> Result<Vec<MarketEntry>, FetchError> {
        self.0.clone()
    }
}

fn names(entries: &[MarketEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

fn banner(dashboard: &Dashboard<ManualClock>) -> Option<String> {
    dashboard.state().notification().map(|n| n.message.clone())
}

async fn loaded_dashboard(config: RotatorConfig) -> (Dashboard<ManualClock>, ManualClock) {
    let entries = cryptodash::shared::client::decode_markets(MARKETS_BODY).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_market_feed(Arc::new(StaticSource(Ok(entries))), tx);

    let clock = ManualClock::new();
    let mut dashboard = Dashboard::with_clock(config, clock.clone());
    let event = rx.recv().await.expect("feed sends one event");
    dashboard.dispatch(event);
    (dashboard, clock)
}

#[tokio::test]
async fn test_session_load_derives_views() {
    let (dashboard, _clock) = loaded_dashboard(RotatorConfig::default()).await;
    let state = dashboard.state();

    assert_eq!(names(&state.entries), vec!["Bitcoin", "Ethereum", "Solana", "Tether"]);
    assert_eq!(names(&state.recommendations), vec!["Ethereum", "Solana"]);
    assert_eq!(names(&state.gainers), vec!["Bitcoin", "Tether", "Ethereum"]);
    assert_eq!(names(&state.losers), vec!["Solana", "Ethereum", "Tether"]);
    assert_eq!(state.carousel_entries().len(), 4);
}

#[tokio::test]
async fn test_rotation_over_virtual_time() {
    let (mut dashboard, clock) = loaded_dashboard(RotatorConfig::default()).await;
    assert_eq!(banner(&dashboard).as_deref(), Some("Buy Ethereum now!"));

    clock.advance(Duration::from_secs(3));
    dashboard.dispatch(DashboardEvent::Tick);
    assert_eq!(banner(&dashboard), None, "auto-hidden after 3s");

    clock.advance(Duration::from_secs(7));
    dashboard.dispatch(DashboardEvent::Tick);
    assert_eq!(dashboard.state().rotator.current_index(), Some(1));
    assert_eq!(banner(&dashboard).as_deref(), Some("Buy Solana now!"));

    clock.advance(Duration::from_secs(10));
    dashboard.dispatch(DashboardEvent::Tick);
    assert_eq!(dashboard.state().rotator.current_index(), Some(0));
    assert_eq!(banner(&dashboard).as_deref(), Some("Buy Ethereum now!"));
}

#[tokio::test]
async fn test_dismissed_banner_returns_on_next_rotation() {
    let (mut dashboard, clock) = loaded_dashboard(RotatorConfig::default()).await;

    clock.advance(Duration::from_secs(1));
    dashboard.dispatch(DashboardEvent::NotificationDismissed);
    assert_eq!(banner(&dashboard), None);

    clock.advance(Duration::from_secs(9));
    dashboard.dispatch(DashboardEvent::Tick);
    assert_eq!(banner(&dashboard).as_deref(), Some("Buy Solana now!"));
}

#[tokio::test]
async fn test_dismissal_with_reset_policy_delays_rotation() {
    let config = RotatorConfig::default().with_reset_on_dismiss(true);
    let (mut dashboard, clock) = loaded_dashboard(config).await;

    clock.advance(Duration::from_secs(5));
    dashboard.dispatch(DashboardEvent::NotificationDismissed);

    clock.advance(Duration::from_secs(5));
    dashboard.dispatch(DashboardEvent::Tick);
    assert_eq!(banner(&dashboard), None);

    clock.advance(Duration::from_secs(5));
    dashboard.dispatch(DashboardEvent::Tick);
    assert_eq!(banner(&dashboard).as_deref(), Some("Buy Solana now!"));
}

#[tokio::test]
async fn test_search_select_and_dismiss() {
    let (mut dashboard, _clock) = loaded_dashboard(RotatorConfig::default()).await;

    dashboard.dispatch(DashboardEvent::QueryChanged("E".to_string()));
    assert_eq!(
        names(&dashboard.state().search.suggestions),
        vec!["Ethereum", "Tether"]
    );

    dashboard.dispatch(DashboardEvent::HighlightNext);
    dashboard.select_highlighted();

    let state = dashboard.state();
    let selection = state.selection.as_ref().unwrap();
    assert_eq!(selection.entry.name, "Tether");
    assert!(selection.history.is_empty());
    assert!(state.search.query.is_empty());
    assert!(state.search.suggestions.is_empty());

    dashboard.dispatch(DashboardEvent::SelectionCleared);
    assert!(dashboard.state().selection.is_none());
}

#[tokio::test]
async fn test_failed_fetch_keeps_dashboard_empty_and_interactive() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_market_feed(Arc::new(StaticSource(Err(FetchError::Status(429)))), tx);

    let clock = ManualClock::new();
    let mut dashboard = Dashboard::with_clock(RotatorConfig::default(), clock.clone());
    dashboard.dispatch(rx.recv().await.unwrap());

    clock.advance(Duration::from_secs(30));
    dashboard.dispatch(DashboardEvent::Tick);
    dashboard.dispatch(DashboardEvent::QueryChanged("bit".to_string()));

    let state = dashboard.state();
    assert!(state.entries.is_empty());
    assert!(state.recommendations.is_empty());
    assert!(state.notification().is_none());
    assert!(state.search.suggestions.is_empty());
    assert!(state.loaded_at.is_none());
}
