//! Remote upload helper.
//!
//! One call, one attempt: the file goes to object storage under a freshly
//! generated key and the caller gets back a public URL or an [`UploadError`].
//! Retry policy belongs to the caller.

mod error;
mod http;
mod key;
mod storage;

pub use error::{StorageError, UploadError};
pub use http::HttpObjectStorage;
pub use key::{content_type_for, storage_key};
pub use storage::{MemoryStorage, ObjectStorage, StoredObject};

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::config::StorageConfig;

/// A file ready to upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Reads `path`, guessing the content type from its extension unless given.
    pub async fn from_path(path: &Path, content_type: Option<&str>) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let content_type = content_type
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(&name).to_string());
        Ok(Self {
            name,
            bytes,
            content_type,
        })
    }
}

/// Limits checked before anything is sent to storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadLimits {
    pub max_bytes: Option<u64>,
    /// Empty accepts any type.
    pub allowed_content_types: Vec<String>,
    pub timeout: Option<Duration>,
}

impl From<&StorageConfig> for UploadLimits {
    fn from(config: &StorageConfig) -> Self {
        Self {
            max_bytes: config.max_file_bytes,
            allowed_content_types: config.allowed_content_types.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }
}

pub struct Uploader {
    storage: Arc<dyn ObjectStorage>,
    key_prefix: String,
    limits: UploadLimits,
}

impl Uploader {
    pub fn new(storage: Arc<dyn ObjectStorage>, key_prefix: impl Into<String>) -> Self {
        Self {
            storage,
            key_prefix: key_prefix.into(),
            limits: UploadLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: UploadLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Uploader over HTTP storage described by `config`.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let storage = HttpObjectStorage::from_config(config)?;
        Ok(Self::new(Arc::new(storage), config.key_prefix.clone())
            .with_limits(UploadLimits::from(config)))
    }

    /// Stores `file` and returns its public URL.
    pub async fn upload(&self, file: UploadFile) -> Result<String, UploadError> {
        self.check_limits(&file)?;

        let key = storage_key(&self.key_prefix, &file.name);
        let size = file.bytes.len();
        let write = self.storage.put(&key, file.bytes, &file.content_type);

        let result = match self.limits.timeout {
            Some(limit) => match tokio::time::timeout(limit, write).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(key = %key, seconds = limit.as_secs(), "upload timed out");
                    return Err(UploadError::TimedOut {
                        key,
                        seconds: limit.as_secs(),
                    });
                }
            },
            None => write.await,
        };

        if let Err(source) = result {
            tracing::warn!(key = %key, error = %source, "upload write failed");
            return Err(UploadError::WriteFailed { key, source });
        }

        match self.storage.public_url(&key) {
            Some(url) if !url.is_empty() => {
                tracing::info!(key = %key, bytes = size, "upload complete");
                Ok(url)
            }
            _ => {
                tracing::warn!(key = %key, "no public url for uploaded object");
                Err(UploadError::UrlUnavailable { key })
            }
        }
    }

    fn check_limits(&self, file: &UploadFile) -> Result<(), UploadError> {
        let size = file.bytes.len() as u64;
        if let Some(limit) = self.limits.max_bytes {
            if size > limit {
                return Err(UploadError::TooLarge {
                    file_name: file.name.clone(),
                    size,
                    limit,
                });
            }
        }

        let allowed = &self.limits.allowed_content_types;
        if !allowed.is_empty()
            && !allowed
                .iter()
                .any(|t| t.eq_ignore_ascii_case(&file.content_type))
        {
            return Err(UploadError::UnsupportedType {
                content_type: file.content_type.clone(),
            });
        }
        Ok(())
    }
}
