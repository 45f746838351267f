//! Detail panel for the selected entry

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Sparkline},
    Frame,
};

use super::carousel::scaled_samples;
use super::{change_color, recommendation_color, C_ACCENT, C_BRIGHT, C_DIM};
use crate::shared::calc::{price_range, recommendation};
use crate::shared::format::{format_change, format_grouped, format_usd};
use crate::shared::state::Selection;

pub fn render_detail(f: &mut Frame, area: Rect, selection: &Selection) {
    let entry = &selection.entry;
    let advice = recommendation(entry.change_24h());

    f.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ({}) ", entry.name, entry.display_symbol()))
        .title_bottom(Line::from(" [Esc] close ").right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let rank = entry
        .rank
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| "--".to_string());

    let lines = vec![
        Line::from(Span::styled(
            advice.to_string(),
            Style::default()
                .fg(recommendation_color(advice))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Rank:", rank),
        field("Market Cap:", format!("${}", format_grouped(entry.market_cap, 0))),
        field("24h Volume:", format!("${}", format_grouped(entry.total_volume, 0))),
        field("Price:", format_usd(entry.current_price)),
        Line::from(vec![
            Span::styled(format!("{:<13}", "24h Change:"), Style::default().fg(C_DIM)),
            Span::styled(
                format_change(entry.change_24h()),
                Style::default()
                    .fg(change_color(entry.change_24h()))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let range = price_range(&selection.history);
    let label = if selection.history.is_empty() {
        "7d: no price history".to_string()
    } else {
        format!(
            "7d  low {}  high {}",
            format_usd(range.min),
            format_usd(range.max)
        )
    };
    f.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(C_DIM))),
        chunks[1],
    );

    let data = scaled_samples(&selection.history);
    if !data.is_empty() {
        // Keep the most recent samples when the panel is narrower than the series
        let width = chunks[2].width as usize;
        let recent = &data[data.len().saturating_sub(width)..];
        let sparkline = Sparkline::default()
            .data(recent)
            .style(Style::default().fg(C_ACCENT))
            .max(100);
        f.render_widget(sparkline, chunks[2]);
    }
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<13}", label), Style::default().fg(C_DIM)),
        Span::styled(value, Style::default().fg(C_BRIGHT)),
    ])
}
