//! Storage key generation.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const TOKEN_LEN: usize = 8;

/// Builds `<prefix>/<unix-nanos>-<token>[.<ext>]` for `file_name`.
///
/// The token is random per call, so two uploads of the same name in the
/// same nanosecond still land on different keys.
pub fn storage_key(prefix: &str, file_name: &str) -> String {
    let nanos = nanos_since_epoch(SystemTime::now());
    let token = random_token();
    let prefix = prefix.trim_matches('/');

    match extension(file_name) {
        Some(ext) => format!("{}/{}-{}.{}", prefix, nanos, token, ext),
        None => format!("{}/{}-{}", prefix, nanos, token),
    }
}

/// Zero for a clock set before 1970, leaving the token to keep keys apart.
fn nanos_since_epoch(now: SystemTime) -> u128 {
    match now.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos(),
        Err(err) => {
            tracing::warn!(error = %err, "system clock is before the unix epoch");
            0
        }
    }
}

fn random_token() -> String {
    let mut token = uuid::Uuid::new_v4().simple().to_string();
    token.truncate(TOKEN_LEN);
    token
}

fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Best-effort MIME type from a file name.
pub fn content_type_for(file_name: &str) -> &'static str {
    match extension(file_name).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}
