//! Carousel of market cards for the leading entries

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

use super::{change_color, recommendation_color, C_ACCENT, C_BRIGHT, C_DIM};
use crate::shared::calc::{price_range, recommendation};
use crate::shared::format::{format_change, format_compact_usd, format_supply, format_usd};
use crate::shared::types::MarketEntry;

/// Cards visible at once for a terminal width
pub fn cards_per_view(width: u16) -> usize {
    match width {
        160.. => 4,
        120..=159 => 3,
        80..=119 => 2,
        _ => 1,
    }
}

/// Render cards starting at `offset`, wrapping around `entries`
pub fn render_carousel(f: &mut Frame, area: Rect, entries: &[MarketEntry], offset: usize) {
    let block = Block::default()
        .title(" TOP 10 [←/→] ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if entries.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No cryptocurrency data available.",
            Style::default().fg(C_DIM),
        )))
        .alignment(Alignment::Center);
        f.render_widget(placeholder, inner);
        return;
    }

    let visible = cards_per_view(area.width).min(entries.len());
    let constraints = vec![Constraint::Ratio(1, visible as u32); visible];
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (i, slot) in slots.iter().enumerate() {
        let entry = &entries[(offset + i) % entries.len()];
        render_card(f, *slot, entry);
    }
}

fn render_card(f: &mut Frame, area: Rect, entry: &MarketEntry) {
    let advice = recommendation(entry.change_24h());

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", entry.display_symbol()),
                Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", advice),
                Style::default().fg(recommendation_color(advice)),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(inner);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format_usd(entry.current_price),
                Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format_change(entry.change_24h()),
                Style::default()
                    .fg(change_color(entry.change_24h()))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(entry.name.clone(), Style::default().fg(C_DIM))),
        Line::from(vec![
            Span::styled("MCap   ", Style::default().fg(C_DIM)),
            Span::raw(format_compact_usd(entry.market_cap)),
        ]),
        Line::from(vec![
            Span::styled("Supply ", Style::default().fg(C_DIM)),
            Span::raw(format_supply(entry.total_supply)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let data = scaled_samples(entry.sample_prices());
    if !data.is_empty() && chunks[1].height > 0 {
        let sparkline = Sparkline::default()
            .data(&data)
            .style(Style::default().fg(change_color(entry.change_24h())))
            .max(100);
        f.render_widget(sparkline, chunks[1]);
    }
}

/// Map prices onto 1..=100 so flat stretches still draw a baseline
pub(crate) fn scaled_samples(prices: &[f64]) -> Vec<u64> {
    let range = price_range(prices);
    let span = range.span();
    prices
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| {
            if span > 0.0 {
                1 + ((p - range.min) / span * 99.0).round() as u64
            } else {
                50
            }
        })
        .collect()
}
