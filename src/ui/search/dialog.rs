use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::state::SearchState;
use crate::catalog::Product;
use crate::i18n::{Language, Localizer, TextKey};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use crate::wishlist::Wishlist;

pub struct SearchView<'a> {
    pub state: &'a SearchState,
    pub catalog: &'a [Product],
    pub wishlist: &'a dyn Wishlist,
    pub localizer: &'a dyn Localizer,
    pub language: Language,
}

pub fn render_search_dialog(frame: &mut Frame, area: Rect, view: &SearchView<'_>) {
    if !view.state.is_visible() {
        return;
    }
    let t = |key| view.localizer.translate(key, view.language);

    let mut lines = Vec::new();
    let input = view.state.input();
    if input.is_empty() {
        lines.push(Line::from(Span::styled(
            t(TextKey::SearchPlaceholder),
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        let marker = if view.state.is_pending() { " …" } else { "" };
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT)),
            Span::styled(input.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled(marker, Style::default().fg(MUTED_TEXT)),
        ]));
    }
    lines.push(Line::from(""));

    let results = view.state.results(view.catalog);
    let visible_rows = area.height.saturating_sub(5) as usize;
    if results.is_empty() && !input.trim().is_empty() && !view.state.is_pending() {
        lines.push(Line::from(Span::styled(
            t(TextKey::SearchNoResults),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let selected = view.state.selected();
    let skip = selected.saturating_sub(visible_rows.saturating_sub(1));
    for (index, product) in results.iter().enumerate().skip(skip).take(visible_rows) {
        let heart = if view.wishlist.is_favorited(&product.id) {
            Span::styled("♥ ", Style::default().fg(FAVORITE))
        } else {
            Span::styled("♡ ", Style::default().fg(MUTED_TEXT))
        };
        let mut line = Line::from(vec![
            heart,
            Span::styled(product.name.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("  {}", product.category),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(
                format!("  {}", product.price_label()),
                Style::default().fg(ACCENT),
            ),
        ]);
        if index == selected {
            line = line.style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            );
        }
        lines.push(line);
    }

    while lines.len() < area.height.saturating_sub(3) as usize {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        t(TextKey::SearchHint),
        Style::default().fg(MUTED_TEXT),
    )));

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            t(TextKey::SearchTitle),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
