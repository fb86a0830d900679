mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, StorageConfig, StorefrontConfig, STORAGE_KEY_ENV};
