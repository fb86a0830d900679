use crate::ui::mvi::Reducer;

use super::intent::BannerIntent;
use super::state::BannerState;

pub struct BannerReducer;

impl Reducer for BannerReducer {
    type State = BannerState;
    type Intent = BannerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BannerIntent::Mount {
                slide_count,
                generation,
            } => {
                if slide_count == 0 {
                    BannerState::Unmounted
                } else {
                    BannerState::Displaying {
                        index: 0,
                        slide_count,
                        generation,
                    }
                }
            }
            BannerIntent::Unmount => BannerState::Unmounted,
            BannerIntent::Tick { generation: tick } => match state {
                BannerState::Displaying {
                    index,
                    slide_count,
                    generation,
                } if generation == tick => BannerState::Displaying {
                    index: (index + 1) % slide_count,
                    slide_count,
                    generation,
                },
                other => other,
            },
            BannerIntent::Next => match state {
                BannerState::Displaying {
                    index,
                    slide_count,
                    generation,
                } => BannerState::Displaying {
                    index: (index + 1) % slide_count,
                    slide_count,
                    generation,
                },
                other => other,
            },
            BannerIntent::Previous => match state {
                BannerState::Displaying {
                    index,
                    slide_count,
                    generation,
                } => BannerState::Displaying {
                    index: (index + slide_count - 1) % slide_count,
                    slide_count,
                    generation,
                },
                other => other,
            },
            BannerIntent::JumpTo { index: target } => match state {
                BannerState::Displaying {
                    slide_count,
                    generation,
                    ..
                } if target < slide_count => BannerState::Displaying {
                    index: target,
                    slide_count,
                    generation,
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(slide_count: usize) -> BannerState {
        BannerReducer::reduce(
            BannerState::Unmounted,
            BannerIntent::Mount {
                slide_count,
                generation: 1,
            },
        )
    }

    #[test]
    fn mount_starts_at_first_slide() {
        assert_eq!(mounted(4).index(), Some(0));
    }

    #[test]
    fn mount_with_no_slides_stays_unmounted() {
        assert!(!mounted(0).is_mounted());
    }

    #[test]
    fn next_k_times_is_k_mod_n() {
        for n in 1..=5 {
            let mut state = mounted(n);
            for k in 1..=12 {
                state = BannerReducer::reduce(state, BannerIntent::Next);
                assert_eq!(state.index(), Some(k % n), "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        for n in 1..=5 {
            let state = BannerReducer::reduce(mounted(n), BannerIntent::Previous);
            assert_eq!(state.index(), Some(n - 1));
        }
    }

    #[test]
    fn tick_advances_with_wraparound() {
        let mut state = mounted(3);
        for expected in [1, 2, 0, 1] {
            state = BannerReducer::reduce(state, BannerIntent::Tick { generation: 1 });
            assert_eq!(state.index(), Some(expected));
        }
    }

    #[test]
    fn tick_and_next_each_advance_once_in_either_order() {
        let tick_first = BannerReducer::reduce(
            BannerReducer::reduce(mounted(5), BannerIntent::Tick { generation: 1 }),
            BannerIntent::Next,
        );
        let next_first = BannerReducer::reduce(
            BannerReducer::reduce(mounted(5), BannerIntent::Next),
            BannerIntent::Tick { generation: 1 },
        );
        assert_eq!(tick_first.index(), Some(2));
        assert_eq!(next_first, tick_first);
    }

    #[test]
    fn stale_generation_tick_is_ignored() {
        let state = BannerReducer::reduce(mounted(3), BannerIntent::Tick { generation: 0 });
        assert_eq!(state.index(), Some(0));
    }

    #[test]
    fn tick_after_unmount_is_ignored() {
        let state = BannerReducer::reduce(mounted(3), BannerIntent::Unmount);
        let state = BannerReducer::reduce(state, BannerIntent::Tick { generation: 1 });
        assert_eq!(state, BannerState::Unmounted);
    }

    #[test]
    fn jump_within_range_sets_index() {
        let state = BannerReducer::reduce(mounted(4), BannerIntent::JumpTo { index: 3 });
        assert_eq!(state.index(), Some(3));
    }

    #[test]
    fn jump_out_of_range_is_noop() {
        let before = BannerReducer::reduce(mounted(4), BannerIntent::Next);
        let after = BannerReducer::reduce(before.clone(), BannerIntent::JumpTo { index: 4 });
        assert_eq!(after, before);
    }
}
