use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NotificationPanelState {
    #[default]
    Hidden,
    Open {
        selected: usize,
    },
}

impl UiState for NotificationPanelState {}

impl NotificationPanelState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Open { selected } => Some(*selected),
            Self::Hidden => None,
        }
    }
}
