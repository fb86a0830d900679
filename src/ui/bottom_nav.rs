use std::sync::Arc;

use crate::context::StoreContext;
use crate::i18n::{Language, Localizer, TextKey};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Search,
    Wishlist,
    Cart,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 5] = [
        NavTab::Home,
        NavTab::Search,
        NavTab::Wishlist,
        NavTab::Cart,
        NavTab::Profile,
    ];

    pub fn route(self) -> &'static str {
        match self {
            NavTab::Home => "/",
            NavTab::Search => "/search",
            NavTab::Wishlist => "/wishlist",
            NavTab::Cart => "/cart",
            NavTab::Profile => "/profile",
        }
    }

    pub fn label(self) -> TextKey {
        match self {
            NavTab::Home => TextKey::NavHome,
            NavTab::Search => TextKey::NavSearch,
            NavTab::Wishlist => TextKey::NavWishlist,
            NavTab::Cart => TextKey::NavCart,
            NavTab::Profile => TextKey::NavProfile,
        }
    }

    pub fn hotkey(self) -> char {
        match self {
            NavTab::Home => 'h',
            NavTab::Search => '/',
            NavTab::Wishlist => 'w',
            NavTab::Cart => 'c',
            NavTab::Profile => 'p',
        }
    }

    /// Tabs that require a signed-in session.
    pub fn is_protected(self) -> bool {
        matches!(self, NavTab::Wishlist | NavTab::Cart | NavTab::Profile)
    }

    /// Tab whose route is `route`, if any.
    pub fn for_route(route: &str) -> Option<NavTab> {
        Self::ALL.into_iter().find(|tab| tab.route() == route)
    }
}

/// Result of activating a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Navigated,
    /// Sign-in requested; navigation resumes once it succeeds.
    AwaitingAuth,
    /// The search overlay should open instead of navigating.
    OpenSearch,
}

/// Routes a tab press through the auth gate.
pub fn activate(tab: NavTab, ctx: &StoreContext) -> NavOutcome {
    if tab == NavTab::Search {
        return NavOutcome::OpenSearch;
    }
    if tab.is_protected() && !ctx.auth.is_authenticated() {
        let navigator = Arc::clone(&ctx.navigator);
        let route = tab.route();
        ctx.auth
            .prompt_auth(Box::new(move || navigator.navigate_to(route)));
        return NavOutcome::AwaitingAuth;
    }
    ctx.navigator.navigate_to(tab.route());
    NavOutcome::Navigated
}

pub struct BottomNav<'a> {
    localizer: &'a dyn Localizer,
}

impl<'a> BottomNav<'a> {
    pub fn new(localizer: &'a dyn Localizer) -> Self {
        Self { localizer }
    }

    pub fn widget(&self, active: Option<NavTab>, language: Language) -> Paragraph<'static> {
        let mut spans = Vec::new();
        for tab in NavTab::ALL {
            let label = format!(
                " [{}] {} ",
                tab.hotkey(),
                self.localizer.translate(tab.label(), language)
            );
            let style = if Some(tab) == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(label, style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    /// Tab under column `x` of a nav bar drawn in `area`.
    pub fn tab_at(&self, area: Rect, language: Language, x: u16) -> Option<NavTab> {
        let mut start = area.x + 1;
        for tab in NavTab::ALL {
            let label = format!(
                " [{}] {} ",
                tab.hotkey(),
                self.localizer.translate(tab.label(), language)
            );
            let width = label.chars().count() as u16;
            if x >= start && x < start + width {
                return Some(tab);
            }
            start += width;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::context::{Router, SessionGate};
    use crate::i18n::StaticLocalizer;
    use crate::wishlist::InMemoryWishlist;

    fn context(signed_in: bool) -> (StoreContext, Arc<Router>, Arc<SessionGate>) {
        let router = Arc::new(Router::new("/"));
        let gate = Arc::new(SessionGate::new(signed_in));
        let ctx = StoreContext {
            navigator: router.clone(),
            auth: gate.clone(),
            localizer: Arc::new(StaticLocalizer),
            catalog: Arc::new(StaticCatalog::demo()),
            wishlist: Arc::new(InMemoryWishlist::new()),
        };
        (ctx, router, gate)
    }

    #[test]
    fn public_tab_navigates() {
        let (ctx, router, _) = context(false);
        assert_eq!(activate(NavTab::Home, &ctx), NavOutcome::Navigated);
        assert_eq!(router.current(), "/");
    }

    #[test]
    fn protected_tab_waits_for_sign_in() {
        let (ctx, router, gate) = context(false);
        assert_eq!(activate(NavTab::Cart, &ctx), NavOutcome::AwaitingAuth);
        assert_eq!(router.current(), "/");

        gate.confirm();
        assert_eq!(router.current(), "/cart");
    }

    #[test]
    fn protected_tab_when_signed_in_navigates() {
        let (ctx, router, _) = context(true);
        assert_eq!(activate(NavTab::Profile, &ctx), NavOutcome::Navigated);
        assert_eq!(router.current(), "/profile");
    }

    #[test]
    fn search_tab_opens_overlay() {
        let (ctx, router, _) = context(true);
        assert_eq!(activate(NavTab::Search, &ctx), NavOutcome::OpenSearch);
        assert_eq!(router.current(), "/");
    }

    #[test]
    fn tab_at_maps_columns() {
        let localizer = StaticLocalizer;
        let nav = BottomNav::new(&localizer);
        let area = Rect::new(0, 20, 80, 3);
        // " [h] Home " occupies columns 1..11
        assert_eq!(nav.tab_at(area, Language::English, 1), Some(NavTab::Home));
        assert_eq!(nav.tab_at(area, Language::English, 11), Some(NavTab::Search));
        assert_eq!(nav.tab_at(area, Language::English, 0), None);
    }

    #[test]
    fn for_route_finds_tab() {
        assert_eq!(NavTab::for_route("/cart"), Some(NavTab::Cart));
        assert_eq!(NavTab::for_route("/deals/summer"), None);
    }
}
