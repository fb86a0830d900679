use crate::catalog::{format_cents, Product};
use crate::i18n::TextKey;
use crate::ui::app::{App, HOME_ROUTE};
use crate::ui::banner::render_banner;
use crate::ui::bottom_nav::BottomNav;
use crate::ui::header::{Header, HeaderInfo};
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::notifications::render_notification_panel;
use crate::ui::search::{render_search_dialog, SearchView};
use crate::ui::theme::{ACCENT, FAVORITE, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const FEATURED_COUNT: usize = 6;

pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout_regions(frame.area());
    let ctx = app.context();
    let localizer = ctx.localizer.as_ref();
    let language = app.language();
    let route = app.route();

    let header = Header::new(localizer);
    frame.render_widget(
        header.widget(&HeaderInfo {
            route: &route,
            language,
            signed_in: app.is_signed_in(),
            wishlist_count: ctx.wishlist.count(),
            unread_notifications: app.feed().unread_count(),
        }),
        regions.header,
    );

    if app.banner().is_mounted() {
        render_banner(frame, regions.banner, app.banner(), localizer, language);
    }

    let page = if app.banner().is_mounted() {
        regions.page
    } else {
        let mut page = regions.page;
        page.y = regions.banner.y;
        page.height += regions.banner.height;
        page
    };
    frame.render_widget(Clear, page);
    frame.render_widget(Paragraph::new(page_lines(app, &route)), page);

    let nav = BottomNav::new(localizer);
    frame.render_widget(nav.widget(app.active_tab(), language), regions.nav);

    let catalog = app.catalog();
    render_search_dialog(
        frame,
        app.search_area(),
        &SearchView {
            state: app.search(),
            catalog: &catalog,
            wishlist: ctx.wishlist.as_ref(),
            localizer,
            language,
        },
    );

    render_notification_panel(
        frame,
        app.notification_area(),
        app.notifications(),
        app.feed(),
        localizer,
        language,
    );

    if app.has_auth_prompt() {
        let text = localizer.translate(TextKey::SignInPrompt, language);
        let width = text.chars().count() as u16 + 4;
        let area = centered_rect(50, 20, frame.area());
        let area = ratatui::layout::Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            width: width.min(area.width),
            height: 3.min(area.height),
            ..area
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(HEADER_TEXT))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            area,
        );
    }
}

fn page_lines(app: &App, route: &str) -> Vec<Line<'static>> {
    let ctx = app.context();
    let t = |key| ctx.localizer.translate(key, app.language());
    let catalog = app.catalog();
    let heading = |text: &str| {
        Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    };
    let muted = |text: &str| Line::from(Span::styled(format!(" {}", text), Style::default().fg(MUTED_TEXT)));

    let mut lines = Vec::new();
    match route {
        HOME_ROUTE => {
            lines.push(heading(t(TextKey::PageFeatured)));
            for product in catalog.iter().take(FEATURED_COUNT) {
                lines.push(product_line(product, ctx.wishlist.is_favorited(&product.id)));
            }
        }
        "/wishlist" => {
            lines.push(heading(t(TextKey::NavWishlist)));
            let favorites: Vec<&Product> = catalog
                .iter()
                .filter(|p| ctx.wishlist.is_favorited(&p.id))
                .collect();
            if favorites.is_empty() {
                lines.push(muted(t(TextKey::PageWishlistEmpty)));
            }
            for product in favorites {
                lines.push(product_line(product, true));
            }
        }
        "/cart" => {
            lines.push(heading(t(TextKey::NavCart)));
            lines.push(muted(t(TextKey::PageCartEmpty)));
        }
        "/profile" => {
            lines.push(heading(t(TextKey::PageProfile)));
        }
        other => match other
            .strip_prefix("/products/")
            .and_then(|id| catalog.iter().find(|p| p.id.as_str() == id))
        {
            Some(product) => {
                lines.push(heading(&product.name));
                lines.push(muted(&product.category));
                lines.push(Line::from(format!(" {}", product.description)));
                lines.push(product_line(product, ctx.wishlist.is_favorited(&product.id)));
            }
            None => {
                lines.push(heading(other));
                lines.push(muted(t(TextKey::PageNotFound)));
            }
        },
    }
    lines.push(Line::from(""));
    lines.push(muted(t(TextKey::PageBackHint)));
    lines
}

fn product_line(product: &Product, favorited: bool) -> Line<'static> {
    let heart = if favorited {
        Span::styled(" ♥ ", Style::default().fg(FAVORITE))
    } else {
        Span::styled(" ♡ ", Style::default().fg(MUTED_TEXT))
    };
    let mut spans = vec![
        heart,
        Span::styled(product.name.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled(format!("  {}", product.price_label()), Style::default().fg(ACCENT)),
    ];
    if let Some(compare_at) = product.compare_at_cents.filter(|_| product.is_discounted()) {
        spans.push(Span::styled(
            format!("  {}", format_cents(compare_at)),
            Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
    }
    Line::from(spans)
}
