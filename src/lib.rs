pub mod catalog;
pub mod config;
pub mod context;
pub mod i18n;
pub mod logging;
pub mod ui;
pub mod upload;
pub mod wishlist;
