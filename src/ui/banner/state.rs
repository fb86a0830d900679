use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum BannerState {
    #[default]
    Unmounted,
    Displaying {
        index: usize,
        slide_count: usize,
        /// Mount this state belongs to. Ticks from other mounts are ignored.
        generation: u64,
    },
}

impl UiState for BannerState {}

impl BannerState {
    pub fn is_mounted(&self) -> bool {
        !matches!(self, Self::Unmounted)
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Displaying { index, .. } => Some(*index),
            Self::Unmounted => None,
        }
    }

    pub fn slide_count(&self) -> usize {
        match self {
            Self::Displaying { slide_count, .. } => *slide_count,
            Self::Unmounted => 0,
        }
    }
}
