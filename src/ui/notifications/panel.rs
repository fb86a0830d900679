use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::feed::NotificationFeed;
use super::state::NotificationPanelState;
use crate::i18n::{Language, Localizer, TextKey};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

pub fn render_notification_panel(
    frame: &mut Frame,
    area: Rect,
    state: &NotificationPanelState,
    feed: &NotificationFeed,
    localizer: &dyn Localizer,
    language: Language,
) {
    let Some(selected) = state.selected() else {
        return;
    };

    let mut lines = Vec::new();
    if feed.is_empty() {
        lines.push(Line::from(Span::styled(
            localizer.translate(TextKey::NotificationsEmpty, language),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    for (index, item) in feed.items().iter().enumerate() {
        let title_style = if item.read {
            Style::default().fg(MUTED_TEXT)
        } else {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
        };
        let dot = if item.read { "  " } else { "● " };
        let mut title = Line::from(vec![
            Span::styled(dot, Style::default().fg(ACCENT)),
            Span::styled(item.title.clone(), title_style),
        ]);
        let mut body = Line::from(Span::styled(
            format!("  {}", item.body),
            Style::default().fg(MUTED_TEXT),
        ));
        if index == selected {
            title = title.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            body = body.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(title);
        lines.push(body);
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            localizer.translate(TextKey::NotificationsTitle, language),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
