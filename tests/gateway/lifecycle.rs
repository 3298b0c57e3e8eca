use crate::support::GatewayTestServer;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::MockServer;

#[tokio::test]
async fn lifecycle_hooks_always_acknowledge() {
    let gemini = MockServer::start().await;
    let server = GatewayTestServer::start(&gemini.uri(), None).await;
    let client = reqwest::Client::new();

    for hook in ["/save", "/publish", "/validate"] {
        let with_json = client
            .post(server.url(hook))
            .json(&json!({"activityObjectID": "o-1", "arguments": {}}))
            .send()
            .await
            .unwrap();
        assert_eq!(with_json.status(), StatusCode::OK, "{hook}");
        assert_eq!(with_json.json::<Value>().await.unwrap(), json!({"success": true}));

        let with_garbage = client
            .post(server.url(hook))
            .header("content-type", "application/octet-stream")
            .body(vec![0xff_u8, 0x00, 0x13])
            .send()
            .await
            .unwrap();
        assert_eq!(with_garbage.status(), StatusCode::OK, "{hook}");
        assert_eq!(with_garbage.json::<Value>().await.unwrap(), json!({"success": true}));
    }

    assert!(gemini.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let gemini = MockServer::start().await;
    let server = GatewayTestServer::start(&gemini.uri(), None).await;

    let health: Value = reqwest::get(server.url("/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({"status": "ok"}));
}

#[tokio::test]
async fn public_dir_is_served_as_fallback() {
    let public = TempDir::new().unwrap();
    std::fs::write(
        public.path().join("config.json"),
        r#"{"workflowApiVersion": "1.1"}"#,
    )
    .unwrap();

    let gemini = MockServer::start().await;
    let server = GatewayTestServer::start(&gemini.uri(), Some(public.path().to_path_buf())).await;

    let response = reqwest::get(server.url("/config.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"workflowApiVersion": "1.1"})
    );

    let missing = reqwest::get(server.url("/nope.html")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
