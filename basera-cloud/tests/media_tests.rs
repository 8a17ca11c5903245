use basera_cloud::{CloudConfig, MediaStore};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> CloudConfig {
    CloudConfig {
        api_base_url: server.uri(),
        api_key: "test-key".to_string(),
        storage_bucket: "basera-media".to_string(),
        storage_token: "storage-token".to_string(),
        ..Default::default()
    }
}

// data:image/png;base64,… carrying the bytes `hello`
const PNG_PAYLOAD: &str = "data:image/png;base64,aGVsbG8=";

// ── Passthrough cases ───────────────────────────────────────

#[tokio::test]
async fn existing_urls_pass_through_untouched() {
    let store = MediaStore::new(CloudConfig::default());
    let url = "https://cdn.example.com/photos/ahmad.png";
    assert_eq!(store.store(url).await, url);
}

#[tokio::test]
async fn empty_payloads_pass_through_untouched() {
    let store = MediaStore::new(CloudConfig::default());
    assert_eq!(store.store("").await, "");
}

#[tokio::test]
async fn unconfigured_storage_keeps_the_image_inline() {
    // Real API credentials but a placeholder storage token.
    let config = CloudConfig {
        api_base_url: "https://project.example.com".to_string(),
        api_key: "real-key".to_string(),
        ..Default::default()
    };

    let store = MediaStore::new(config);
    assert_eq!(store.store(PNG_PAYLOAD).await, PNG_PAYLOAD);
}

#[tokio::test]
async fn invalid_base64_keeps_the_image_inline() {
    let server = MockServer::start().await;
    let store = MediaStore::new(mock_config(&server));

    let payload = "data:image/png;base64,@@@not-base64@@@";
    assert_eq!(store.store(payload).await, payload);
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ── Uploads ─────────────────────────────────────────────────

#[tokio::test]
async fn uploads_are_swapped_for_their_public_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex("^/storage/v1/object/basera-media/.+\\.png$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = MediaStore::new(mock_config(&server));
    let stored = store.store(PNG_PAYLOAD).await;

    assert!(stored.starts_with(&format!(
        "{}/storage/v1/object/public/basera-media/",
        server.uri()
    )));
    assert!(stored.ends_with(".png"));

    let upload = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("upload request");

    assert_eq!(upload.body, b"hello");
    assert_eq!(
        upload.headers.get("content-type").unwrap().to_str().unwrap(),
        "image/png"
    );
    assert_eq!(
        upload
            .headers
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap(),
        "Bearer storage-token"
    );
}

#[tokio::test]
async fn jpeg_uploads_use_the_short_extension() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex("^/storage/v1/object/basera-media/.+\\.jpg$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = MediaStore::new(mock_config(&server));
    let stored = store.store("data:image/jpeg;base64,aGVsbG8=").await;
    assert!(stored.ends_with(".jpg"));
}

#[tokio::test]
async fn failed_upload_keeps_the_image_inline() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex("^/storage/v1/object/.*"))
        .respond_with(ResponseTemplate::new(500).set_body_string("bucket quota exceeded"))
        .mount(&server)
        .await;

    let store = MediaStore::new(mock_config(&server));
    assert_eq!(store.store(PNG_PAYLOAD).await, PNG_PAYLOAD);
}

#[tokio::test]
async fn unreachable_storage_keeps_the_image_inline() {
    let config = CloudConfig {
        api_base_url: "http://127.0.0.1:1".to_string(),
        api_key: "test-key".to_string(),
        storage_token: "storage-token".to_string(),
        ..Default::default()
    };

    let store = MediaStore::new(config);
    assert_eq!(store.store(PNG_PAYLOAD).await, PNG_PAYLOAD);
}

#[tokio::test]
async fn repeated_uploads_get_distinct_object_names() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex("^/storage/v1/object/basera-media/.*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let store = MediaStore::new(mock_config(&server));
    let first = store.store(PNG_PAYLOAD).await;
    let second = store.store(PNG_PAYLOAD).await;
    assert_ne!(first, second);
}
