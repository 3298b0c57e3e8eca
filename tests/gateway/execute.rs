use crate::support::{
    API_KEY, GatewayTestServer, SIGNING_SECRET, gemini_text_response, scenario_claims, sign_claims,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";
const DRAFT: &str = r#"{"subject": "Ana, your next pair is here", "body": "Hi Ana, how are the Shoes?"}"#;

#[tokio::test]
async fn signed_execute_generates_draft_and_returns_200() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", API_KEY))
        .and(body_string_contains("ana@x.com"))
        .and(body_string_contains("Ana"))
        .and(body_string_contains("Shoes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text_response(DRAFT)))
        .expect(1)
        .mount(&gemini)
        .await;

    let server = GatewayTestServer::start(&gemini.uri(), None).await;
    let response = reqwest::Client::new()
        .post(server.url("/execute"))
        .header("content-type", "application/jwt")
        .body(sign_claims(SIGNING_SECRET, &scenario_claims()))
        .send()
        .await
        .expect("execute request should be sent");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Execution completed.");
    gemini.verify().await;
}

#[tokio::test]
async fn invalid_signature_returns_401_without_generation_call() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text_response(DRAFT)))
        .expect(0)
        .mount(&gemini)
        .await;

    let server = GatewayTestServer::start(&gemini.uri(), None).await;
    let client = reqwest::Client::new();

    let forged = client
        .post(server.url("/execute"))
        .body(sign_claims("someone-elses-secret", &scenario_claims()))
        .send()
        .await
        .unwrap();
    assert_eq!(forged.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(forged.text().await.unwrap(), "Unauthorized");

    let unsigned = client
        .post(server.url("/execute"))
        .json(&scenario_claims())
        .send()
        .await
        .unwrap();
    assert_eq!(unsigned.status(), StatusCode::UNAUTHORIZED);

    gemini.verify().await;
}

#[tokio::test]
async fn generation_failure_returns_500_without_details() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "internal error", "status": "INTERNAL"}
        })))
        .expect(1)
        .mount(&gemini)
        .await;

    let server = GatewayTestServer::start(&gemini.uri(), None).await;
    let response = reqwest::Client::new()
        .post(server.url("/execute"))
        .body(sign_claims(SIGNING_SECRET, &scenario_claims()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = response.text().await.unwrap();
    assert_eq!(text, "Execution failed.");
    assert!(!text.contains("internal error"));
    gemini.verify().await;
}

#[tokio::test]
async fn unstructured_generation_output_is_a_failure() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_text_response("Dear Ana, ...")),
        )
        .mount(&gemini)
        .await;

    let server = GatewayTestServer::start(&gemini.uri(), None).await;
    let response = reqwest::Client::new()
        .post(server.url("/execute"))
        .body(sign_claims(SIGNING_SECRET, &scenario_claims()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let gemini = MockServer::start().await;
    let server = GatewayTestServer::start(&gemini.uri(), None).await;

    let response = reqwest::Client::new()
        .post(server.url("/execute"))
        .body("a".repeat(70_000))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
