//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_storage;

use okestore::catalog::StaticCatalog;
use okestore::config::StorefrontConfig;
use okestore::ui::app::App;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Write `content` to a fresh `config.toml` inside a temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// App over the demo catalog that applies every keystroke immediately.
pub fn make_app() -> App {
    let config = StorefrontConfig {
        search_debounce_ms: 0,
        ..StorefrontConfig::default()
    };
    App::new(&config, Arc::new(StaticCatalog::demo()))
}
