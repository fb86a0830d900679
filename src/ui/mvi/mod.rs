//! Model-View-Intent (MVI) primitives shared by the storefront widgets.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Timers and input handlers never touch widget state directly: they emit
//! intents, and the reducer applies each one to whatever state is current
//! when it is delivered.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
