//! Object storage over a Supabase-style REST API.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};

use super::error::StorageError;
use super::storage::ObjectStorage;
use crate::config::StorageConfig;

pub struct HttpObjectStorage {
    client: Client,
    base_url: Url,
    bucket: String,
    api_key: Option<String>,
    public: bool,
}

impl HttpObjectStorage {
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| StorageError::Backend(format!("invalid base_url: {}", e)))?;
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            bucket: config.bucket.clone(),
            api_key: config.resolve_api_key(),
            public: config.public,
        })
    }

    fn object_url(&self, segments: &[&str], key: &str) -> Option<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().ok()?;
            path.pop_if_empty();
            path.extend(segments);
            path.push(&self.bucket);
            path.extend(key.split('/'));
        }
        Some(url)
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let url = self
            .object_url(&["storage", "v1", "object"], key)
            .ok_or_else(|| StorageError::Backend("base_url cannot carry a path".to_string()))?;

        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes);
        if let Some(api_key) = &self.api_key {
            request = request.header(AUTHORIZATION, format!("Bearer {}", api_key));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    fn public_url(&self, key: &str) -> Option<String> {
        if !self.public {
            return None;
        }
        self.object_url(&["storage", "v1", "object", "public"], key)
            .map(String::from)
    }
}
