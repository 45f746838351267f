//! Dashboard state and its reducer
//!
//! Every change goes through [`DashboardState::apply`], one named event at a
//! time. Derived lists are computed when a fetch lands, never on render.

use std::time::Instant;

use tracing::{debug, warn};

use super::calc::{derive, Derived};
use super::clock::{Clock, SystemClock};
use super::error::FetchError;
use super::rotator::{Notification, NotificationRotator, RotatorConfig};
use super::search::SearchState;
use super::types::MarketEntry;

/// Number of leading entries shown in the carousel
pub const CAROUSEL_LEN: usize = 10;

/// Inputs of the reducer
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// The session fetch returned entries in rank order
    FetchSucceeded(Vec<MarketEntry>),
    /// The session fetch failed; already logged at the boundary
    FetchFailed(FetchError),
    /// Timer check, fired by the event loop
    Tick,
    /// Search text changed (raw, not yet lower-cased)
    QueryChanged(String),
    HighlightNext,
    HighlightPrev,
    /// User picked an entry, usually from the suggestions
    EntrySelected(MarketEntry),
    /// Detail panel closed
    SelectionCleared,
    NotificationDismissed,
    CarouselNext,
    CarouselPrev,
}

/// Selected entry plus the price series shown in the detail panel
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub entry: MarketEntry,
    pub history: Vec<f64>,
}

impl Selection {
    /// History comes from the entry's 7-day samples, empty when absent
    pub fn from_entry(entry: MarketEntry) -> Self {
        let history = entry.sample_prices().to_vec();
        Self { entry, history }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub entries: Vec<MarketEntry>,
    pub recommendations: Vec<MarketEntry>,
    pub gainers: Vec<MarketEntry>,
    pub losers: Vec<MarketEntry>,
    pub selection: Option<Selection>,
    pub search: SearchState,
    pub rotator: NotificationRotator,
    pub carousel_offset: usize,
    /// Set once the first fetch succeeded
    pub loaded_at: Option<Instant>,
}

impl DashboardState {
    pub fn new(rotator_config: RotatorConfig) -> Self {
        Self {
            entries: Vec::new(),
            recommendations: Vec::new(),
            gainers: Vec::new(),
            losers: Vec::new(),
            selection: None,
            search: SearchState::default(),
            rotator: NotificationRotator::new(rotator_config),
            carousel_offset: 0,
            loaded_at: None,
        }
    }

    /// Apply one event and return the next state
    pub fn apply(mut self, event: DashboardEvent, now: Instant) -> Self {
        match event {
            DashboardEvent::FetchSucceeded(entries) => {
                let Derived {
                    recommendations,
                    gainers,
                    losers,
                } = derive(&entries);
                debug!(
                    entries = entries.len(),
                    recommendations = recommendations.len(),
                    "Market entries loaded"
                );

                self.entries = entries;
                self.recommendations = recommendations;
                self.gainers = gainers;
                self.losers = losers;
                self.carousel_offset = 0;
                self.loaded_at = Some(now);
                self.rotator.start(&self.recommendations, now);

                // Keep an in-progress search consistent with the new list
                if !self.search.query.is_empty() {
                    let query = self.search.query.clone();
                    self.search.on_query_change(&query, &self.entries);
                }
            }
            DashboardEvent::FetchFailed(error) => {
                debug!("Fetch failed, keeping current entries: {}", error);
            }
            DashboardEvent::Tick => {
                self.rotator.tick(now);
            }
            DashboardEvent::QueryChanged(query) => {
                self.search.on_query_change(&query, &self.entries);
            }
            DashboardEvent::HighlightNext => self.search.highlight_next(),
            DashboardEvent::HighlightPrev => self.search.highlight_prev(),
            DashboardEvent::EntrySelected(entry) => {
                debug!("Selected {}", entry.id);
                self.selection = Some(Selection::from_entry(entry));
                self.search.clear();
            }
            DashboardEvent::SelectionCleared => {
                self.selection = None;
            }
            DashboardEvent::NotificationDismissed => {
                self.rotator.dismiss(now);
            }
            DashboardEvent::CarouselNext => {
                let len = self.carousel_len();
                if len > 0 {
                    self.carousel_offset = (self.carousel_offset + 1) % len;
                }
            }
            DashboardEvent::CarouselPrev => {
                let len = self.carousel_len();
                if len > 0 {
                    self.carousel_offset = (self.carousel_offset + len - 1) % len;
                }
            }
        }
        self
    }

    /// Leading entries shown in the carousel
    pub fn carousel_entries(&self) -> &[MarketEntry] {
        &self.entries[..self.carousel_len()]
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.rotator.visible()
    }

    fn carousel_len(&self) -> usize {
        self.entries.len().min(CAROUSEL_LEN)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(RotatorConfig::default())
    }
}

/// Dashboard state paired with the clock its timers read
pub struct Dashboard<C: Clock = SystemClock> {
    state: DashboardState,
    clock: C,
}

impl Dashboard<SystemClock> {
    pub fn new(rotator_config: RotatorConfig) -> Self {
        Self::with_clock(rotator_config, SystemClock)
    }
}

impl<C: Clock> Dashboard<C> {
    pub fn with_clock(rotator_config: RotatorConfig, clock: C) -> Self {
        Self {
            state: DashboardState::new(rotator_config),
            clock,
        }
    }

    /// Run one event through the reducer at the clock's current time
    pub fn dispatch(&mut self, event: DashboardEvent) {
        let now = self.clock.now();
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event, now);
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Select the highlighted suggestion, if any
    pub fn select_highlighted(&mut self) {
        match self.state.search.highlighted_entry().cloned() {
            Some(entry) => self.dispatch(DashboardEvent::EntrySelected(entry)),
            None => warn!("Select requested with no highlighted suggestion"),
        }
    }
}
