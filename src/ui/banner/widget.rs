use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::BannerCarousel;
use crate::i18n::{Language, Localizer};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, INACTIVE_DOT};

/// Columns at each edge that act as previous/next controls.
const CONTROL_WIDTH: u16 = 3;

/// What a pointer press on the banner area hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerHit {
    Previous,
    Next,
    Indicator(usize),
    Body,
}

pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    carousel: &BannerCarousel,
    localizer: &dyn Localizer,
    language: Language,
) {
    let Some(slide) = carousel.current_slide() else {
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
            area,
        );
        return;
    };

    let background = Style::default().bg(slide.style.background);
    let title_style = background
        .fg(slide.style.accent)
        .add_modifier(Modifier::BOLD);
    let text_style = background.fg(HEADER_TEXT);

    let mut lines = Vec::new();
    let inner_height = area.height.saturating_sub(2) as usize;
    // Title, subtitle and indicators take three rows; pad the rest above.
    for _ in 0..inner_height.saturating_sub(3) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        localizer.translate(slide.title, language),
        title_style,
    )));
    lines.push(Line::from(Span::styled(
        localizer.translate(slide.subtitle, language),
        text_style,
    )));
    while lines.len() + 1 < inner_height {
        lines.push(Line::from(""));
    }
    lines.push(indicator_line(carousel, background));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(background.fg(slide.style.accent))
        .style(background);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );

    if area.width > CONTROL_WIDTH * 2 && inner_height > 0 {
        let middle = area.y + area.height / 2;
        let arrow_style = background.fg(slide.style.accent);
        frame.render_widget(
            Paragraph::new(Span::styled(" ‹", arrow_style)),
            Rect::new(area.x + 1, middle, CONTROL_WIDTH - 1, 1),
        );
        frame.render_widget(
            Paragraph::new(Span::styled("› ", arrow_style)),
            Rect::new(
                area.x + area.width - CONTROL_WIDTH,
                middle,
                CONTROL_WIDTH - 1,
                1,
            ),
        );
    }
}

fn indicator_line(carousel: &BannerCarousel, background: Style) -> Line<'static> {
    let current = carousel.current_index();
    let mut spans = Vec::new();
    for index in 0..carousel.slides().len() {
        if index > 0 {
            spans.push(Span::styled(" ", background));
        }
        if Some(index) == current {
            spans.push(Span::styled("●", background.fg(HEADER_TEXT)));
        } else {
            spans.push(Span::styled("○", background.fg(INACTIVE_DOT)));
        }
    }
    Line::from(spans)
}

/// Maps a pointer position inside the banner to the control under it.
///
/// Returns `None` outside `area`. Indicators sit on the last inner row,
/// centred, one column each with a one-column gap.
pub fn banner_hit(area: Rect, slide_count: usize, x: u16, y: u16) -> Option<BannerHit> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let indicator_row = (area.y + area.height).saturating_sub(2);
    if y == indicator_row && slide_count > 0 {
        let inner_width = area.width.saturating_sub(2);
        let dots_width = (slide_count * 2 - 1) as u16;
        let start = area.x + 1 + inner_width.saturating_sub(dots_width) / 2;
        if x >= start && x < start + dots_width && (x - start) % 2 == 0 {
            return Some(BannerHit::Indicator(((x - start) / 2) as usize));
        }
    }

    if x < area.x + CONTROL_WIDTH {
        Some(BannerHit::Previous)
    } else if x >= area.x + area.width - CONTROL_WIDTH {
        Some(BannerHit::Next)
    } else {
        Some(BannerHit::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 3,
        width: 40,
        height: 7,
    };

    #[test]
    fn edges_are_controls() {
        assert_eq!(banner_hit(AREA, 4, 1, 5), Some(BannerHit::Previous));
        assert_eq!(banner_hit(AREA, 4, 38, 5), Some(BannerHit::Next));
        assert_eq!(banner_hit(AREA, 4, 20, 5), Some(BannerHit::Body));
    }

    #[test]
    fn indicators_map_to_slide_index() {
        // inner width 38, dots width 7, start = 1 + (38 - 7) / 2 = 16
        let row = AREA.y + AREA.height - 2;
        assert_eq!(banner_hit(AREA, 4, 16, row), Some(BannerHit::Indicator(0)));
        assert_eq!(banner_hit(AREA, 4, 22, row), Some(BannerHit::Indicator(3)));
        assert_eq!(banner_hit(AREA, 4, 17, row), Some(BannerHit::Body));
    }

    #[test]
    fn outside_area_is_none() {
        assert_eq!(banner_hit(AREA, 4, 20, 1), None);
        assert_eq!(banner_hit(AREA, 4, 40, 5), None);
    }
}
