use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationIntent {
    /// Bell pressed: opens when hidden, closes when open.
    Toggle,
    Close,
    Escape,
    PointerDown { inside: bool },
    MoveUp { item_count: usize },
    MoveDown { item_count: usize },
}

impl Intent for NotificationIntent {}
