use thiserror::Error;

/// Failure from the object-storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("storage rejected the write with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Backend(String),
}

/// Failure of a single upload. Never retried internally.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The storage write failed (network, permission, quota).
    #[error("Upload of '{key}' failed: {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: StorageError,
    },

    /// The write succeeded but the backend produced no public URL.
    #[error("Uploaded '{key}' but no public URL is available")]
    UrlUnavailable { key: String },

    #[error("File '{file_name}' is {size} bytes, limit is {limit}")]
    TooLarge {
        file_name: String,
        size: u64,
        limit: u64,
    },

    #[error("Content type '{content_type}' is not accepted")]
    UnsupportedType { content_type: String },

    #[error("Upload of '{key}' timed out after {seconds}s")]
    TimedOut { key: String, seconds: u64 },
}

impl UploadError {
    /// Stable identifier for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::WriteFailed { .. } => "write_failed",
            UploadError::UrlUnavailable { .. } => "url_unavailable",
            UploadError::TooLarge { .. } => "too_large",
            UploadError::UnsupportedType { .. } => "unsupported_type",
            UploadError::TimedOut { .. } => "timed_out",
        }
    }
}
