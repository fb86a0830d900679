use crate::i18n::{Language, Localizer, TextKey};
use crate::ui::theme::{ACCENT, FAVORITE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Everything the header shows, gathered fresh each frame.
pub struct HeaderInfo<'a> {
    pub route: &'a str,
    pub language: Language,
    pub signed_in: bool,
    pub wishlist_count: usize,
    pub unread_notifications: usize,
}

pub struct Header<'a> {
    localizer: &'a dyn Localizer,
}

impl<'a> Header<'a> {
    pub fn new(localizer: &'a dyn Localizer) -> Self {
        Self { localizer }
    }

    pub fn widget(&self, info: &HeaderInfo<'_>) -> Paragraph<'static> {
        let t = |key| self.localizer.translate(key, info.language);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (session, session_style) = if info.signed_in {
            (t(TextKey::SignedIn), Style::default().fg(STATUS_OK))
        } else {
            (t(TextKey::SignedOut), Style::default().fg(MUTED_TEXT))
        };
        let bell_style = if info.unread_notifications > 0 {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                t(TextKey::StoreTitle),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(info.route.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(info.language.code(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(session, session_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("♥ {}", info.wishlist_count), Style::default().fg(FAVORITE)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("🔔 {}", info.unread_notifications), bell_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
