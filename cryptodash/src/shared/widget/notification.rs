//! Recommendation banner

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{C_BRIGHT, C_BUY, C_DIM};
use crate::shared::rotator::Notification;

pub fn render_notification(f: &mut Frame, area: Rect, notification: &Notification) {
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_BUY));

    let lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(C_BUY)),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(icon_name(&notification.icon), Style::default().fg(C_DIM)),
            Span::styled("  [Ctrl-D] dismiss", Style::default().fg(C_DIM)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Last path segment of the icon URL, without query string
fn icon_name(icon: &str) -> String {
    let path = icon.split('?').next().unwrap_or(icon);
    path.rsplit('/').next().unwrap_or(path).to_string()
}
