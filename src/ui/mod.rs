pub mod app;
pub mod banner;
pub mod bottom_nav;
pub mod events;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notifications;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
