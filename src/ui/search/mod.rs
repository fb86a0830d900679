//! Product search overlay.
//!
//! The overlay keeps only the typed query; results are a pure function of
//! the committed query and the catalog, recomputed whenever they are read.

mod debounce;
mod dialog;
mod filter;
mod intent;
mod reducer;
mod state;

pub use debounce::QueryDebouncer;
pub use dialog::{render_search_dialog, SearchView};
pub use filter::filter_products;
pub use intent::{DismissReason, SearchIntent};
pub use reducer::SearchReducer;
pub use state::SearchState;
