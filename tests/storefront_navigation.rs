mod common;

use common::make_app;
use okestore::ui::bottom_nav::NavTab;
use okestore::ui::notifications::NotificationIntent;

#[test]
fn home_is_initial_route() {
    let app = make_app();
    assert_eq!(app.route(), "/");
    assert_eq!(app.active_tab(), Some(NavTab::Home));
}

#[test]
fn protected_tab_waits_for_sign_in() {
    let mut app = make_app();
    app.activate_tab(NavTab::Cart);
    assert!(app.has_auth_prompt());
    assert_eq!(app.route(), "/");

    app.confirm_sign_in();
    assert!(app.is_signed_in());
    assert_eq!(app.route(), "/cart");

    app.activate_tab(NavTab::Profile);
    assert!(!app.has_auth_prompt());
    assert_eq!(app.route(), "/profile");
}

#[test]
fn cancelled_sign_in_drops_navigation() {
    let mut app = make_app();
    app.activate_tab(NavTab::Wishlist);
    app.cancel_sign_in();
    assert!(!app.has_auth_prompt());
    assert!(!app.is_signed_in());
    assert_eq!(app.route(), "/");
}

#[test]
fn search_tab_opens_overlay_without_navigating() {
    let mut app = make_app();
    app.activate_tab(NavTab::Search);
    assert!(app.search().is_visible());
    assert_eq!(app.route(), "/");
}

#[test]
fn back_returns_to_previous_route() {
    let mut app = make_app();
    app.confirm_sign_in();
    app.activate_tab(NavTab::Cart);
    app.activate_tab(NavTab::Profile);
    app.go_back();
    assert_eq!(app.route(), "/cart");
}

#[test]
fn notification_panel_marks_read() {
    let mut app = make_app();
    let unread = app.feed().unread_count();
    assert!(unread > 0);

    app.dispatch_notifications(NotificationIntent::Toggle);
    assert!(app.notifications().is_visible());
    app.mark_selected_notification_read();
    assert_eq!(app.feed().unread_count(), unread - 1);

    app.mark_all_notifications_read();
    assert_eq!(app.feed().unread_count(), 0);

    app.dispatch_notifications(NotificationIntent::Escape);
    app.dispatch_notifications(NotificationIntent::Escape);
    assert!(!app.notifications().is_visible());
}

#[test]
fn language_toggle_round_trips() {
    let mut app = make_app();
    let start = app.language();
    app.toggle_language();
    assert_ne!(app.language(), start);
    app.toggle_language();
    assert_eq!(app.language(), start);
}
