//! Search box and its suggestion dropdown

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::{change_color, C_ACCENT, C_BRIGHT, C_DIM};
use crate::shared::format::format_change;
use crate::shared::search::SearchState;

/// Rows shown in the dropdown before it scrolls
const MAX_SUGGESTION_ROWS: usize = 8;

pub fn render_search(f: &mut Frame, area: Rect, search: &SearchState) {
    let block = Block::default()
        .title(" SEARCH ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_ACCENT));

    let line = if search.query.is_empty() {
        Line::from(Span::styled("Search coin...", Style::default().fg(C_DIM)))
    } else {
        Line::from(vec![
            Span::styled(search.query.clone(), Style::default().fg(C_BRIGHT)),
            Span::styled("▏", Style::default().fg(C_ACCENT)),
        ])
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Dropdown under the search box, clipped to `bounds`
pub(crate) fn render_suggestions(f: &mut Frame, anchor: Rect, bounds: Rect, search: &SearchState) {
    let top = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    if top >= bottom {
        return;
    }

    let rows = search.suggestions.len().min(MAX_SUGGESTION_ROWS) as u16;
    let area = Rect {
        x: anchor.x,
        y: top,
        width: anchor.width.min(48),
        height: (rows + 2).min(bottom - top),
    };

    // Scroll so the highlighted row stays visible
    let visible = (area.height.saturating_sub(2) as usize).max(1);
    let first = search.highlighted.saturating_sub(visible - 1);

    let items: Vec<ListItem> = search
        .suggestions
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(i, entry)| {
            let style = if i == search.highlighted {
                Style::default().fg(C_BRIGHT).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(C_BRIGHT)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", entry.name), style),
                Span::styled(format!("({}) ", entry.display_symbol()), Style::default().fg(C_DIM)),
                Span::styled(
                    format_change(entry.change_24h()),
                    Style::default().fg(change_color(entry.change_24h())),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} matches [↑/↓ Enter] ", search.suggestions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM));

    f.render_widget(Clear, area);
    f.render_widget(List::new(items).block(block), area);
}
