//! Top gainers and losers by 24h change

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use super::{change_color, C_BRIGHT, C_BUY, C_DIM, C_SELL};
use crate::shared::format::{format_change, format_usd};
use crate::shared::types::MarketEntry;

pub fn render_movers(f: &mut Frame, area: Rect, gainers: &[MarketEntry], losers: &[MarketEntry]) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_table(f, columns[0], " GAINERS 24h ", C_BUY, gainers);
    render_table(f, columns[1], " LOSERS 24h ", C_SELL, losers);
}

fn render_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    entries: &[MarketEntry],
) {
    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Span::styled(
                    entry.display_symbol(),
                    Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(entry.name.clone(), Style::default().fg(C_DIM)),
                Span::raw(format_usd(entry.current_price)),
                Span::styled(
                    format_change(entry.change_24h()),
                    Style::default().fg(change_color(entry.change_24h())),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Min(10),
            Constraint::Length(14),
            Constraint::Length(9),
        ],
    )
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(table, area);
}
