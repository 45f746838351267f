/// CryptoDash - Shared Library
///
/// Everything behind the `cryptodash` terminal except the terminal itself:
/// - Market entry types and the CoinGecko markets client
/// - Derivation of recommendations, gainers and losers
/// - Search/selection state and the notification rotator
/// - The dashboard reducer and the ratatui widgets that draw it
pub mod shared;

// Re-export commonly used types for convenience
pub use shared::types::{MarketEntry, SparklineIn7d};

pub use shared::client::{MarketClient, MarketClientConfig, MarketSource};
pub use shared::error::FetchError;
pub use shared::feed::spawn_market_feed;

pub use shared::calc::{derive, price_range, recommendation, Derived, PriceRange, Recommendation};

pub use shared::clock::{Clock, ManualClock, SystemClock};
pub use shared::rotator::{Notification, NotificationRotator, RotatorConfig, RotatorPhase};
pub use shared::search::SearchState;

// Reducer
pub use shared::state::{Dashboard, DashboardEvent, DashboardState, Selection};

pub use shared::widget::render_dashboard;
