use crate::ui::mvi::Reducer;

use super::intent::{DismissReason, SearchIntent};
use super::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Open => match state {
                SearchState::Hidden => SearchState::Open {
                    input: String::new(),
                    committed: String::new(),
                    revision: 0,
                    selected: 0,
                },
                open => open,
            },
            SearchIntent::Dismiss(_) => SearchState::Hidden,
            SearchIntent::PointerDown { inside: true } => state,
            SearchIntent::PointerDown { inside: false } => {
                Self::reduce(state, SearchIntent::Dismiss(DismissReason::OutsidePointer))
            }
            SearchIntent::Insert(ch) => edit(state, |input| input.push(ch)),
            SearchIntent::Backspace => edit(state, |input| {
                input.pop();
            }),
            SearchIntent::Commit { revision: target } => match state {
                SearchState::Open {
                    input, revision, ..
                } if revision == target => SearchState::Open {
                    committed: input.clone(),
                    input,
                    revision,
                    selected: 0,
                },
                other => other,
            },
            SearchIntent::SelectNext { result_count } => match state {
                SearchState::Open {
                    input,
                    committed,
                    revision,
                    selected,
                } => {
                    let selected = if selected + 1 >= result_count {
                        0
                    } else {
                        selected + 1
                    };
                    SearchState::Open {
                        input,
                        committed,
                        revision,
                        selected,
                    }
                }
                other => other,
            },
            SearchIntent::SelectPrevious { result_count } => match state {
                SearchState::Open {
                    input,
                    committed,
                    revision,
                    selected,
                } => {
                    let selected = if selected == 0 {
                        result_count.saturating_sub(1)
                    } else {
                        (selected - 1).min(result_count.saturating_sub(1))
                    };
                    SearchState::Open {
                        input,
                        committed,
                        revision,
                        selected,
                    }
                }
                other => other,
            },
        }
    }
}

fn edit(state: SearchState, change: impl FnOnce(&mut String)) -> SearchState {
    match state {
        SearchState::Open {
            mut input,
            committed,
            revision,
            ..
        } => {
            change(&mut input);
            SearchState::Open {
                input,
                committed,
                revision: revision + 1,
                selected: 0,
            }
        }
        SearchState::Hidden => SearchState::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> SearchState {
        SearchReducer::reduce(SearchState::Hidden, SearchIntent::Open)
    }

    fn typed(text: &str) -> SearchState {
        text.chars().fold(open(), |state, ch| {
            SearchReducer::reduce(state, SearchIntent::Insert(ch))
        })
    }

    #[test]
    fn open_starts_empty() {
        let state = open();
        assert!(state.is_visible());
        assert_eq!(state.input(), "");
        assert!(!state.is_pending());
    }

    #[test]
    fn open_twice_keeps_query() {
        let state = SearchReducer::reduce(typed("mug"), SearchIntent::Open);
        assert_eq!(state.input(), "mug");
    }

    #[test]
    fn typing_bumps_revision_and_waits_for_commit() {
        let state = typed("shoe");
        assert_eq!(state.revision(), 4);
        assert!(state.is_pending());
    }

    #[test]
    fn commit_for_current_revision_applies() {
        let state = typed("shoe");
        let state = SearchReducer::reduce(state, SearchIntent::Commit { revision: 4 });
        assert!(!state.is_pending());
    }

    #[test]
    fn stale_commit_is_ignored() {
        let state = typed("sho");
        let stale = state.revision();
        let state = SearchReducer::reduce(state, SearchIntent::Insert('e'));
        let state = SearchReducer::reduce(state, SearchIntent::Commit { revision: stale });
        assert!(state.is_pending());
        if let SearchState::Open { committed, .. } = &state {
            assert_eq!(committed, "");
        } else {
            panic!("expected Open");
        }
    }

    #[test]
    fn backspace_removes_last_char() {
        let state = SearchReducer::reduce(typed("mugs"), SearchIntent::Backspace);
        assert_eq!(state.input(), "mug");
        assert_eq!(state.revision(), 5);
    }

    #[test]
    fn every_dismiss_path_hides_and_is_idempotent() {
        for intent in [
            SearchIntent::Dismiss(DismissReason::CloseButton),
            SearchIntent::Dismiss(DismissReason::Escape),
            SearchIntent::PointerDown { inside: false },
        ] {
            let once = SearchReducer::reduce(typed("x"), intent.clone());
            assert_eq!(once, SearchState::Hidden);
            let twice = SearchReducer::reduce(once, intent);
            assert_eq!(twice, SearchState::Hidden);
        }
    }

    #[test]
    fn pointer_inside_keeps_overlay_open() {
        let before = typed("lamp");
        let after = SearchReducer::reduce(before.clone(), SearchIntent::PointerDown { inside: true });
        assert_eq!(after, before);
    }

    #[test]
    fn typing_while_hidden_is_ignored() {
        let state = SearchReducer::reduce(SearchState::Hidden, SearchIntent::Insert('a'));
        assert_eq!(state, SearchState::Hidden);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let state = typed("s");
        let state = SearchReducer::reduce(state, SearchIntent::SelectPrevious { result_count: 3 });
        assert_eq!(state.selected(), 2);
        let state = SearchReducer::reduce(state, SearchIntent::SelectNext { result_count: 3 });
        assert_eq!(state.selected(), 0);
    }
}
