use crate::ui::app::App;
use crate::ui::bottom_nav::NavTab;
use crate::ui::notifications::NotificationIntent;
use crate::ui::search::DismissReason;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.has_auth_prompt() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_sign_in(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_sign_in(),
            _ => {}
        }
        return;
    }

    if app.search().is_visible() {
        handle_search_key(app, key);
        return;
    }

    if app.notifications().is_visible() {
        handle_notification_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Left => app.banner_previous(),
        KeyCode::Right => app.banner_next(),
        KeyCode::Enter => app.open_banner_slide(),
        KeyCode::Backspace => app.go_back(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('l') => app.toggle_language(),
        KeyCode::Char('o') => app.sign_out(),
        KeyCode::Char('n') => app.dispatch_notifications(NotificationIntent::Toggle),
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.banner_jump(index);
        }
        KeyCode::Char(ch) => {
            if let Some(tab) = NavTab::ALL.into_iter().find(|tab| tab.hotkey() == ch) {
                app.activate_tab(tab);
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'f') {
        app.toggle_favorite_selected();
        return;
    }
    match key.code {
        KeyCode::Esc => app.dismiss_search(DismissReason::Escape),
        KeyCode::Up => app.search_select_previous(),
        KeyCode::Down => app.search_select_next(),
        KeyCode::Enter => app.open_selected_result(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_insert(ch)
        }
        _ => {}
    }
}

fn handle_notification_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_notifications(NotificationIntent::Escape),
        KeyCode::Char('n') => app.dispatch_notifications(NotificationIntent::Close),
        KeyCode::Up => app.notification_move(false),
        KeyCode::Down => app.notification_move(true),
        KeyCode::Enter => app.mark_selected_notification_read(),
        KeyCode::Char('m') => app.mark_all_notifications_read(),
        _ => {}
    }
}

/// Left-button presses count as pointer-down; everything else is ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.pointer_down(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
