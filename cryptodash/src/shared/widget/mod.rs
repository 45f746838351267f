//! Ratatui widgets for the dashboard regions
//!
//! Each region is a pure function of the state slice it is given.

mod carousel;
mod detail;
mod movers;
mod notification;
mod search;
mod status;
mod ticker;

pub use carousel::{cards_per_view, render_carousel};
pub use detail::render_detail;
pub use movers::render_movers;
pub use notification::render_notification;
pub use search::render_search;
pub use status::render_status_bar;
pub use ticker::{render_ticker, ticker_spans};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

use super::calc::Recommendation;
use super::state::DashboardState;

pub(crate) const C_BUY: Color = Color::Rgb(100, 220, 100);
pub(crate) const C_SELL: Color = Color::Rgb(220, 100, 100);
pub(crate) const C_NEUTRAL: Color = Color::Rgb(180, 180, 100);
pub(crate) const C_DIM: Color = Color::Rgb(120, 120, 120);
pub(crate) const C_BRIGHT: Color = Color::Rgb(220, 220, 220);
pub(crate) const C_ACCENT: Color = Color::Rgb(100, 180, 220);

/// Green for gains, red for losses (zero counts as a gain)
pub(crate) fn change_color(change: f64) -> Color {
    if change >= 0.0 {
        C_BUY
    } else {
        C_SELL
    }
}

pub(crate) fn recommendation_color(recommendation: Recommendation) -> Color {
    match recommendation {
        Recommendation::Buy => C_BUY,
        Recommendation::Hold => C_NEUTRAL,
        Recommendation::NotBuy => C_SELL,
    }
}

/// Lay out and draw every region.
///
/// `ticker_offset` scrolls the marquee; the caller advances it per frame.
pub fn render_dashboard(f: &mut Frame, state: &DashboardState, ticker_offset: usize) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(3),
        ])
        .split(area);

    render_status_bar(f, chunks[0], state);
    render_search(f, chunks[1], &state.search);
    render_carousel(f, chunks[2], state.carousel_entries(), state.carousel_offset);
    render_movers(f, chunks[3], &state.gainers, &state.losers);
    render_ticker(f, chunks[4], &state.entries, ticker_offset);

    // Overlays, drawn last so they sit on top
    if let Some(selection) = &state.selection {
        render_detail(f, centered_rect(60, 70, area), selection);
    }
    if !state.search.suggestions.is_empty() {
        search::render_suggestions(f, chunks[1], area, &state.search);
    }
    if let Some(notification) = state.notification() {
        render_notification(f, top_right_rect(44, 4, area), notification);
    }
}

/// Rect centred in `area`, sized in percent of it
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Fixed-size rect in the top-right corner, clipped to `area`
pub(crate) fn top_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::DashboardEvent;
    use crate::shared::types::test_util::entry;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_render_empty_dashboard() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let state = DashboardState::default();

        terminal.draw(|f| render_dashboard(f, &state, 0)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("CryptoDash"));
        assert!(text.contains("No cryptocurrency data available."));
    }

    #[test]
    fn test_render_loaded_dashboard_with_overlays() {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        let now = Instant::now();
        let state = DashboardState::default()
            .apply(
                DashboardEvent::FetchSucceeded(vec![
                    entry("Bitcoin", 2.5),
                    entry("Dropcoin", -9.0),
                    entry("Flat", 0.0),
                ]),
                now,
            )
            .apply(DashboardEvent::EntrySelected(entry("Bitcoin", 2.5)), now);

        terminal.draw(|f| render_dashboard(f, &state, 0)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Buy Dropcoin now!"));
        assert!(text.contains("Not Buy"));
        assert!(text.contains("GAINERS"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        let state = DashboardState::default().apply(
            DashboardEvent::FetchSucceeded(vec![entry("Dropcoin", -9.0)]),
            Instant::now(),
        );

        terminal.draw(|f| render_dashboard(f, &state, 3)).unwrap();
    }

    #[test]
    fn test_change_color() {
        assert_eq!(change_color(0.0), C_BUY);
        assert_eq!(change_color(-0.01), C_SELL);
    }
}
