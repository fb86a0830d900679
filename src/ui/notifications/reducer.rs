use crate::ui::mvi::Reducer;

use super::intent::NotificationIntent;
use super::state::NotificationPanelState;

pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationPanelState;
    type Intent = NotificationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::Toggle => match state {
                NotificationPanelState::Hidden => NotificationPanelState::Open { selected: 0 },
                NotificationPanelState::Open { .. } => NotificationPanelState::Hidden,
            },
            NotificationIntent::Close
            | NotificationIntent::Escape
            | NotificationIntent::PointerDown { inside: false } => NotificationPanelState::Hidden,
            NotificationIntent::PointerDown { inside: true } => state,
            NotificationIntent::MoveUp { item_count } => match state {
                NotificationPanelState::Open { selected } => NotificationPanelState::Open {
                    selected: if selected == 0 {
                        item_count.saturating_sub(1)
                    } else {
                        selected - 1
                    },
                },
                other => other,
            },
            NotificationIntent::MoveDown { item_count } => match state {
                NotificationPanelState::Open { selected } => NotificationPanelState::Open {
                    selected: if selected + 1 >= item_count {
                        0
                    } else {
                        selected + 1
                    },
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> NotificationPanelState {
        NotificationReducer::reduce(NotificationPanelState::Hidden, NotificationIntent::Toggle)
    }

    #[test]
    fn toggle_opens_then_closes() {
        let state = open();
        assert_eq!(state.selected(), Some(0));
        let state = NotificationReducer::reduce(state, NotificationIntent::Toggle);
        assert!(!state.is_visible());
    }

    #[test]
    fn dismissals_are_idempotent() {
        for intent in [
            NotificationIntent::Close,
            NotificationIntent::Escape,
            NotificationIntent::PointerDown { inside: false },
        ] {
            let once = NotificationReducer::reduce(open(), intent.clone());
            let twice = NotificationReducer::reduce(once.clone(), intent);
            assert_eq!(once, NotificationPanelState::Hidden);
            assert_eq!(twice, NotificationPanelState::Hidden);
        }
    }

    #[test]
    fn pointer_inside_keeps_panel() {
        let state = NotificationReducer::reduce(
            open(),
            NotificationIntent::PointerDown { inside: true },
        );
        assert!(state.is_visible());
    }

    #[test]
    fn movement_wraps() {
        let state = NotificationReducer::reduce(open(), NotificationIntent::MoveUp { item_count: 3 });
        assert_eq!(state.selected(), Some(2));
        let state = NotificationReducer::reduce(state, NotificationIntent::MoveDown { item_count: 3 });
        assert_eq!(state.selected(), Some(0));
    }
}
