use crate::catalog::{CatalogSource, Product};
use crate::config::StorefrontConfig;
use crate::context::{Router, SessionGate, StoreContext};
use crate::i18n::{Language, StaticLocalizer};
use crate::ui::banner::{banner_hit, BannerCarousel, BannerHit, SLIDES};
use crate::ui::bottom_nav::{activate, BottomNav, NavOutcome, NavTab};
use crate::ui::events::AppEvent;
use crate::ui::layout::{contains, layout_regions, notification_rect, search_rect, Regions};
use crate::ui::mvi::dispatch;
use crate::ui::notifications::{
    NotificationFeed, NotificationIntent, NotificationPanelState, NotificationReducer,
};
use crate::ui::search::{DismissReason, QueryDebouncer, SearchIntent, SearchReducer, SearchState};
use crate::wishlist::{InMemoryWishlist, Wishlist};
use ratatui::layout::Rect;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

/// Route on which the banner carousel is mounted.
pub const HOME_ROUTE: &str = "/";

pub struct App {
    should_quit: bool,
    ctx: StoreContext,
    router: Arc<Router>,
    session: Arc<SessionGate>,
    language: Language,
    regions: Regions,
    events: Option<Sender<AppEvent>>,
    banner: BannerCarousel,
    rotation_period: Duration,
    /// State of the search overlay (MVI pattern).
    search: SearchState,
    debouncer: QueryDebouncer,
    /// State of the notification panel (MVI pattern).
    notifications: NotificationPanelState,
    feed: NotificationFeed,
}

impl App {
    pub fn new(config: &StorefrontConfig, catalog: Arc<dyn CatalogSource>) -> Self {
        let router = Arc::new(Router::new(HOME_ROUTE));
        let session = Arc::new(SessionGate::new(config.signed_in));
        let wishlist: Arc<dyn Wishlist> = Arc::new(InMemoryWishlist::new());
        let ctx = StoreContext {
            navigator: router.clone(),
            auth: session.clone(),
            localizer: Arc::new(StaticLocalizer),
            catalog,
            wishlist,
        };

        Self {
            should_quit: false,
            ctx,
            router,
            session,
            language: config.language,
            regions: layout_regions(Rect::new(0, 0, 80, 24)),
            events: None,
            banner: BannerCarousel::new(&SLIDES),
            rotation_period: Duration::from_millis(config.rotation_interval_ms),
            search: SearchState::default(),
            debouncer: QueryDebouncer::new(Duration::from_millis(config.search_debounce_ms)),
            notifications: NotificationPanelState::default(),
            feed: NotificationFeed::welcome(),
        }
    }

    /// Connects timers to the event loop and mounts the banner.
    ///
    /// Must be called from within a tokio runtime.
    pub fn attach_events(&mut self, events: Sender<AppEvent>) {
        self.events = Some(events);
        self.sync_banner();
    }

    pub fn context(&self) -> &StoreContext {
        &self.ctx
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.banner.unmount();
        self.debouncer.cancel();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn route(&self) -> String {
        self.router.current()
    }

    pub fn active_tab(&self) -> Option<NavTab> {
        NavTab::for_route(&self.route())
    }

    pub fn regions(&self) -> Regions {
        self.regions
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.regions = layout_regions(Rect::new(0, 0, cols, rows));
    }

    pub fn catalog(&self) -> Arc<[Product]> {
        self.ctx.catalog.products()
    }

    pub fn is_signed_in(&self) -> bool {
        self.ctx.auth.is_authenticated()
    }

    // Banner

    pub fn banner(&self) -> &BannerCarousel {
        &self.banner
    }

    pub fn on_banner_tick(&mut self, generation: u64) {
        self.banner.tick(generation);
    }

    pub fn banner_next(&mut self) {
        self.banner.next();
    }

    pub fn banner_previous(&mut self) {
        self.banner.previous();
    }

    pub fn banner_jump(&mut self, index: usize) {
        // Rejected jumps are logged by the carousel and leave the slide as is.
        let _ = self.banner.jump_to(index);
    }

    pub fn open_banner_slide(&mut self) {
        if self.banner.select(self.ctx.navigator.as_ref()).is_some() {
            self.sync_banner();
        }
    }

    /// Keeps the banner mounted exactly while the home route is showing.
    fn sync_banner(&mut self) {
        let on_home = self.route() == HOME_ROUTE;
        match (on_home, self.banner.is_mounted()) {
            (true, false) => {
                let Some(events) = self.events.clone() else {
                    return;
                };
                self.banner.mount(self.rotation_period, move |generation| {
                    let _ = events.send(AppEvent::BannerTick { generation });
                });
            }
            (false, true) => self.banner.unmount(),
            _ => {}
        }
    }

    // Navigation

    pub fn activate_tab(&mut self, tab: NavTab) {
        match activate(tab, &self.ctx) {
            NavOutcome::OpenSearch => self.open_search(),
            NavOutcome::Navigated | NavOutcome::AwaitingAuth => self.sync_banner(),
        }
    }

    pub fn go_back(&mut self) {
        self.router.back();
        self.sync_banner();
    }

    pub fn has_auth_prompt(&self) -> bool {
        self.session.has_pending_prompt()
    }

    pub fn confirm_sign_in(&mut self) {
        self.session.confirm();
        self.sync_banner();
    }

    pub fn cancel_sign_in(&mut self) {
        self.session.cancel();
    }

    /// Ends the session and leaves any protected page for home.
    pub fn sign_out(&mut self) {
        self.session.sign_out();
        if self.active_tab().is_some_and(NavTab::is_protected) {
            self.ctx.navigator.navigate_to(HOME_ROUTE);
            self.sync_banner();
        }
    }

    // Search

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch::<SearchReducer>(&mut self.search, intent);
    }

    pub fn open_search(&mut self) {
        self.dispatch_search(SearchIntent::Open);
    }

    pub fn dismiss_search(&mut self, reason: DismissReason) {
        self.debouncer.cancel();
        self.dispatch_search(SearchIntent::Dismiss(reason));
    }

    pub fn search_insert(&mut self, ch: char) {
        self.dispatch_search(SearchIntent::Insert(ch));
        self.schedule_commit();
    }

    pub fn search_backspace(&mut self) {
        self.dispatch_search(SearchIntent::Backspace);
        self.schedule_commit();
    }

    pub fn on_search_commit(&mut self, revision: u64) {
        self.dispatch_search(SearchIntent::Commit { revision });
    }

    fn schedule_commit(&mut self) {
        if !self.search.is_visible() {
            return;
        }
        let revision = self.search.revision();
        match self.events.clone() {
            Some(events) if !self.debouncer.is_immediate() => {
                self.debouncer.schedule(move || {
                    let _ = events.send(AppEvent::SearchCommit { revision });
                });
            }
            _ => self.on_search_commit(revision),
        }
    }

    pub fn search_results(&self) -> Vec<Product> {
        let catalog = self.catalog();
        self.search
            .results(&catalog)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn search_select_next(&mut self) {
        let result_count = self.search_results().len();
        self.dispatch_search(SearchIntent::SelectNext { result_count });
    }

    pub fn search_select_previous(&mut self) {
        let result_count = self.search_results().len();
        self.dispatch_search(SearchIntent::SelectPrevious { result_count });
    }

    fn selected_result(&self) -> Option<Product> {
        let catalog = self.catalog();
        self.search.selected_product(&catalog).cloned()
    }

    /// Opens the highlighted product page and closes the overlay.
    pub fn open_selected_result(&mut self) {
        let Some(product) = self.selected_result() else {
            return;
        };
        self.dismiss_search(DismissReason::CloseButton);
        self.ctx.navigator.navigate_to(&product.route());
        self.sync_banner();
    }

    /// Flips wishlist membership of the highlighted product.
    pub fn toggle_favorite_selected(&mut self) {
        if let Some(product) = self.selected_result() {
            let favorited = self.ctx.wishlist.toggle_favorite(&product.id);
            tracing::info!(product = %product.id, favorited, "wishlist toggled");
        }
    }

    // Notifications

    pub fn notifications(&self) -> &NotificationPanelState {
        &self.notifications
    }

    pub fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    pub fn dispatch_notifications(&mut self, intent: NotificationIntent) {
        dispatch::<NotificationReducer>(&mut self.notifications, intent);
    }

    pub fn notification_move(&mut self, down: bool) {
        let item_count = self.feed.len();
        self.dispatch_notifications(if down {
            NotificationIntent::MoveDown { item_count }
        } else {
            NotificationIntent::MoveUp { item_count }
        });
    }

    pub fn mark_selected_notification_read(&mut self) {
        if let Some(selected) = self.notifications.selected() {
            self.feed.mark_read(selected);
        }
    }

    pub fn mark_all_notifications_read(&mut self) {
        self.feed.mark_all_read();
    }

    // Pointer

    pub fn search_area(&self) -> Rect {
        search_rect(&self.regions)
    }

    pub fn notification_area(&self) -> Rect {
        notification_rect(&self.regions, self.feed.len())
    }

    /// Pointer-down at `(x, y)`. Presses outside an open overlay only dismiss it.
    pub fn pointer_down(&mut self, x: u16, y: u16) {
        // The sign-in prompt is modal; only y/n answer it.
        if self.has_auth_prompt() {
            return;
        }
        if self.search.is_visible() {
            let inside = contains(self.search_area(), x, y);
            if !inside {
                self.debouncer.cancel();
            }
            self.dispatch_search(SearchIntent::PointerDown { inside });
            return;
        }
        if self.notifications.is_visible() {
            let inside = contains(self.notification_area(), x, y);
            self.dispatch_notifications(NotificationIntent::PointerDown { inside });
            return;
        }

        if self.banner.is_mounted() {
            match banner_hit(self.regions.banner, self.banner.slides().len(), x, y) {
                Some(BannerHit::Previous) => return self.banner_previous(),
                Some(BannerHit::Next) => return self.banner_next(),
                Some(BannerHit::Indicator(index)) => return self.banner_jump(index),
                Some(BannerHit::Body) => return self.open_banner_slide(),
                None => {}
            }
        }

        if contains(self.regions.nav, x, y) {
            let nav = BottomNav::new(self.ctx.localizer.as_ref());
            if let Some(tab) = nav.tab_at(self.regions.nav, self.language, x) {
                self.activate_tab(tab);
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.banner.unmount();
    }
}
