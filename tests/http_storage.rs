mod common;

use common::mock_storage::{MockResponse, MockStorage};
use okestore::config::StorageConfig;
use okestore::upload::{HttpObjectStorage, StorageError, UploadError, UploadFile, Uploader};
use std::sync::Arc;
use std::time::Duration;

fn storage_config(base_url: String) -> StorageConfig {
    StorageConfig {
        base_url,
        api_key: Some("service-key".to_string()),
        ..StorageConfig::default()
    }
}

#[tokio::test]
async fn upload_posts_bytes_and_returns_public_url() {
    let server = MockStorage::start().await;
    let uploader = Uploader::from_config(&storage_config(server.base_url())).unwrap();

    let url = uploader
        .upload(UploadFile::new("Photo.PNG", b"\x89PNG".to_vec(), "image/png"))
        .await
        .expect("upload should succeed");

    assert!(url.starts_with(&format!(
        "{}/storage/v1/object/public/products/inventory/",
        server.base_url()
    )));
    assert!(url.ends_with(".png"));

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert!(request.path.starts_with("/storage/v1/object/products/inventory/"));
    assert!(request.path.ends_with(".png"));
    assert_eq!(request.header("authorization"), Some("Bearer service-key"));
    assert_eq!(request.header("content-type"), Some("image/png"));
    assert_eq!(request.body, b"\x89PNG".to_vec());
}

#[tokio::test]
async fn public_url_matches_uploaded_path() {
    let server = MockStorage::start().await;
    let uploader = Uploader::from_config(&storage_config(server.base_url())).unwrap();

    let url = uploader
        .upload(UploadFile::new("mug.jpg", vec![1, 2, 3], "image/jpeg"))
        .await
        .unwrap();

    let requests = server.captured_requests().await;
    let uploaded_key = requests[0]
        .path
        .trim_start_matches("/storage/v1/object/products/");
    assert!(url.ends_with(uploaded_key));
}

#[tokio::test]
async fn rejected_write_surfaces_status_and_cause() {
    let server = MockStorage::start().await;
    server
        .enqueue_response(MockResponse::error(403, "permission denied"))
        .await;
    let uploader = Uploader::from_config(&storage_config(server.base_url())).unwrap();

    let err = uploader
        .upload(UploadFile::new("a.png", vec![0], "image/png"))
        .await
        .expect_err("403 should fail");

    match &err {
        UploadError::WriteFailed { source, .. } => match source {
            StorageError::Rejected { status, message } => {
                assert_eq!(*status, 403);
                assert!(message.contains("permission denied"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        },
        other => panic!("expected WriteFailed, got {other:?}"),
    }
    assert!(err.to_string().contains("permission denied"));
}

#[tokio::test]
async fn private_bucket_reports_url_unavailable() {
    let server = MockStorage::start().await;
    let config = StorageConfig {
        public: false,
        ..storage_config(server.base_url())
    };
    let uploader = Uploader::from_config(&config).unwrap();

    let err = uploader
        .upload(UploadFile::new("a.png", vec![0], "image/png"))
        .await
        .expect_err("private bucket has no public url");

    assert_eq!(err.kind(), "url_unavailable");
    assert_eq!(server.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn slow_storage_times_out() {
    let server = MockStorage::start().await;
    server
        .enqueue_response(MockResponse::default().with_delay(3_000))
        .await;
    let config = StorageConfig {
        timeout_seconds: Some(1),
        ..storage_config(server.base_url())
    };
    let uploader = Uploader::from_config(&config).unwrap();

    let err = uploader
        .upload(UploadFile::new("a.png", vec![0], "image/png"))
        .await
        .expect_err("should time out");

    assert!(matches!(err, UploadError::TimedOut { seconds: 1, .. }));
}

#[tokio::test]
async fn unreachable_storage_is_a_write_failure() {
    // Bind then drop to get a port nothing listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let storage = HttpObjectStorage::from_config(&storage_config(format!("http://{}", addr))).unwrap();
    let uploader = Uploader::new(Arc::new(storage), "inventory");

    let err = tokio::time::timeout(
        Duration::from_secs(10),
        uploader.upload(UploadFile::new("a.png", vec![0], "image/png")),
    )
    .await
    .expect("connection refusal should be quick")
    .expect_err("nothing is listening");

    assert!(matches!(
        err,
        UploadError::WriteFailed {
            source: StorageError::Request(_),
            ..
        }
    ));
}
