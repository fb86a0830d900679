//! Object-storage collaborator.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use super::error::StorageError;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Writes `bytes` under `key`.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;

    /// Credential-free URL for `key`, if the backend can produce one.
    fn public_url(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// In-process storage with switchable failure modes.
pub struct MemoryStorage {
    base_url: String,
    objects: Mutex<HashMap<String, StoredObject>>,
    fail_writes: Mutex<Option<String>>,
    serve_public: Mutex<bool>,
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Mutex::new(HashMap::new()),
            fail_writes: Mutex::new(None),
            serve_public: Mutex::new(true),
        }
    }

    /// Makes every following write fail with `message`.
    pub fn fail_writes_with(&self, message: impl Into<String>) {
        *self.fail_writes.lock() = Some(message.into());
    }

    /// Stops producing public URLs while still accepting writes.
    pub fn withhold_public_urls(&self) {
        *self.serve_public.lock() = false;
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.lock().is_empty()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        if let Some(message) = self.fail_writes.lock().clone() {
            return Err(StorageError::Backend(message));
        }
        self.objects.lock().insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    fn public_url(&self, key: &str) -> Option<String> {
        if !*self.serve_public.lock() {
            return None;
        }
        Some(format!("{}/{}", self.base_url.trim_end_matches('/'), key))
    }
}
