use crate::catalog::Product;
use crate::ui::mvi::UiState;

use super::filter::filter_products;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Hidden,
    Open {
        /// Text as typed.
        input: String,
        /// Query the results are computed from. Trails `input` while a
        /// debounced commit is pending.
        committed: String,
        /// Bumped on every edit; a commit only applies to the revision it names.
        revision: u64,
        selected: usize,
    },
}

impl UiState for SearchState {}

impl SearchState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn input(&self) -> &str {
        match self {
            Self::Open { input, .. } => input,
            Self::Hidden => "",
        }
    }

    pub fn revision(&self) -> u64 {
        match self {
            Self::Open { revision, .. } => *revision,
            Self::Hidden => 0,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Open { input, committed, .. } if input != committed)
    }

    pub fn selected(&self) -> usize {
        match self {
            Self::Open { selected, .. } => *selected,
            Self::Hidden => 0,
        }
    }

    /// Filtered view of `catalog` for the committed query.
    pub fn results<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        match self {
            Self::Open { committed, .. } => filter_products(committed, catalog),
            Self::Hidden => Vec::new(),
        }
    }

    /// The highlighted result, if any.
    pub fn selected_product<'a>(&self, catalog: &'a [Product]) -> Option<&'a Product> {
        self.results(catalog).get(self.selected()).copied()
    }
}
