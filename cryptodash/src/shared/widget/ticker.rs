//! Scrolling ticker of every entry's 24h change

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{change_color, C_BRIGHT, C_DIM};
use crate::shared::format::format_change;
use crate::shared::types::MarketEntry;

const SEPARATOR: &str = "   ";

/// One styled segment per entry: `Name (SYM) (+1.23%)`
pub fn ticker_spans(entries: &[MarketEntry]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        spans.push(Span::styled(
            format!("{} ({}) ", entry.name, entry.display_symbol()),
            Style::default().fg(C_BRIGHT),
        ));
        spans.push(Span::styled(
            format!("({}){}", format_change(entry.change_24h()), SEPARATOR),
            Style::default()
                .fg(change_color(entry.change_24h()))
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

/// Render the ticker rotated left by `offset` characters
pub fn render_ticker(f: &mut Frame, area: Rect, entries: &[MarketEntry], offset: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM));

    let cells: Vec<(char, Style)> = ticker_spans(entries)
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();

    let line = if cells.is_empty() {
        Line::from("")
    } else {
        let width = area.width.saturating_sub(2) as usize;
        let start = offset % cells.len();
        let rotated = cells.iter().cycle().skip(start).take(width.min(cells.len()));
        Line::from(group_by_style(rotated))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Merge consecutive same-style characters back into spans
fn group_by_style<'a>(cells: impl Iterator<Item = &'a (char, Style)>) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_style: Option<Style> = None;

    for (c, style) in cells {
        if current_style != Some(*style) {
            if let Some(prev) = current_style {
                spans.push(Span::styled(std::mem::take(&mut current), prev));
            }
            current_style = Some(*style);
        }
        current.push(*c);
    }
    if let Some(style) = current_style {
        spans.push(Span::styled(current, style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::test_util::entry;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_ticker_spans() {
        let spans = ticker_spans(&[entry("Bitcoin", 1.5), entry("Ether", -2.0)]);
        assert_eq!(spans.len(), 4);
        assert_eq!(
            text(&spans),
            "Bitcoin (BIT) (+1.50%)   Ether (ETH) (-2.00%)   "
        );
        assert_eq!(spans[1].style.fg, Some(change_color(1.5)));
        assert_eq!(spans[3].style.fg, Some(change_color(-2.0)));
    }

    #[test]
    fn test_group_by_style_merges_runs() {
        let a = Style::default().fg(C_BRIGHT);
        let b = Style::default().fg(C_DIM);
        let cells = vec![('x', a), ('y', a), ('z', b), ('w', a)];
        let spans = group_by_style(cells.iter());
        assert_eq!(text(&spans), "xyzw");
        assert_eq!(spans.len(), 3);
    }
}
