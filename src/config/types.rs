use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::i18n::Language;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Settings for the interactive storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Banner auto-advance period in milliseconds (default: 5000).
    #[serde(default = "default_rotation_interval_ms")]
    pub rotation_interval_ms: u64,
    /// Delay before a typed query is applied to the results (default: 150).
    /// Zero applies every keystroke immediately.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Display language at startup.
    #[serde(default)]
    pub language: Language,
    /// Optional JSON file with the product catalog. Built-in demo catalog otherwise.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Start with a signed-in session.
    #[serde(default)]
    pub signed_in: bool,
}

/// Remote object storage used by the upload helper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage service root (e.g., "https://xyz.supabase.co").
    #[serde(default = "default_storage_base_url")]
    pub base_url: String,
    /// Bucket that receives uploads.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Logical prefix placed in front of every generated key.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Service key. Falls back to `OKESTORE_STORAGE_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Whether the bucket serves objects without credentials.
    #[serde(default = "default_public")]
    pub public: bool,
    /// Largest accepted file in bytes. Unlimited when unset.
    #[serde(default)]
    pub max_file_bytes: Option<u64>,
    /// Accepted MIME types. Empty accepts any type.
    #[serde(default)]
    pub allowed_content_types: Vec<String>,
    /// Upload timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

pub const STORAGE_KEY_ENV: &str = "OKESTORE_STORAGE_KEY";

fn default_rotation_interval_ms() -> u64 {
    5000
}

fn default_search_debounce_ms() -> u64 {
    150
}

fn default_storage_base_url() -> String {
    "http://127.0.0.1:54321".to_string()
}

fn default_bucket() -> String {
    "products".to_string()
}

fn default_key_prefix() -> String {
    "inventory".to_string()
}

fn default_public() -> bool {
    true
}

impl StorageConfig {
    /// Configured key, or the environment fallback.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var(STORAGE_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: default_rotation_interval_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            language: Language::default(),
            catalog_path: None,
            signed_in: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: default_storage_base_url(),
            bucket: default_bucket(),
            key_prefix: default_key_prefix(),
            api_key: None,
            public: default_public(),
            max_file_bytes: None,
            allowed_content_types: Vec::new(),
            timeout_seconds: None,
        }
    }
}
