//! Title and status line

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{C_ACCENT, C_BUY, C_DIM, C_NEUTRAL};
use crate::shared::state::DashboardState;

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let (status_symbol, status_text, status_color) = if state.loaded_at.is_some() {
        ("●", format!("{} ASSETS", state.entries.len()), C_BUY)
    } else {
        ("○", "WAITING FOR MARKET DATA".to_string(), C_NEUTRAL)
    };

    let status = Span::styled(
        format!(" {} {} ", status_symbol, status_text),
        Style::default().fg(status_color).add_modifier(Modifier::BOLD),
    );

    // Freshest API timestamp across the list
    let as_of = state
        .entries
        .iter()
        .filter_map(|entry| entry.last_updated)
        .max()
        .map(|time| format!(" as of {} UTC ", time.format("%H:%M:%S")))
        .unwrap_or_default();
    let time = Span::styled(as_of, Style::default().fg(C_ACCENT));

    let title = Span::styled(
        " ◆ CryptoDash ◆ ",
        Style::default()
            .fg(Color::Rgb(255, 215, 0))
            .add_modifier(Modifier::BOLD),
    );

    let help = Span::styled(
        " [type] search  [Esc] close  [Ctrl-D] dismiss  [Ctrl-C] quit ",
        Style::default().fg(C_DIM),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(138, 43, 226)));

    let paragraph = Paragraph::new(Line::from(vec![title, status, time, help]))
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
