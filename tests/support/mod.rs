use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use journey_drafter::config::Config;
use journey_drafter::gateway::run_gateway_with_listener;
use reqwest::StatusCode;
use serde_json::{Value, json};
use sha2::Sha256;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub const SIGNING_SECRET: &str = "integration-signing-secret";
pub const API_KEY: &str = "integration-api-key";

/// Compact HS256 JWS over `claims`, as the journey orchestrator sends it.
pub fn sign_claims(secret: &str, claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(json!({"alg": "HS256", "typ": "JWT"}).to_string());
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(format!("{header}.{payload}").as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    format!("{header}.{payload}.{signature}")
}

pub fn scenario_claims() -> Value {
    json!({
        "inArguments": [
            {"FirstName": "Ana"},
            {"EmailAddress": "ana@x.com"},
            {"LastPurchase": "Shoes"}
        ],
        "keyValue": "C123",
        "journeyId": "journey-1",
        "activityId": "activity-1"
    })
}

pub struct GatewayTestServer {
    port: u16,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl GatewayTestServer {
    /// Start the real router on an ephemeral port, generating through `generation_base_url`.
    pub async fn start(generation_base_url: &str, public_dir: Option<PathBuf>) -> Self {
        let _ = rustls::crypto::ring::default_provider().install_default();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral gateway listener should bind");
        let port = listener
            .local_addr()
            .expect("ephemeral gateway listener should expose local address")
            .port();

        let mut config = Config::default();
        config.gateway.host = "127.0.0.1".to_string();
        config.gateway.port = port;
        config.gateway.public_dir = public_dir;
        config.auth.jwt_secret = Some(SIGNING_SECRET.to_string());
        config.generation.api_key = Some(API_KEY.to_string());
        config.generation.base_url = generation_base_url.to_string();
        config.generation.timeout_secs = 5;

        let handle = tokio::spawn(async move {
            run_gateway_with_listener(listener, Arc::new(config)).await
        });

        wait_until_gateway_ready(port).await;

        Self { port, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }
}

impl Drop for GatewayTestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn wait_until_gateway_ready(port: u16) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("reqwest client should be built");

    for _ in 0..80 {
        let health = client
            .get(format!("http://127.0.0.1:{port}/health"))
            .send()
            .await;
        if matches!(health, Ok(resp) if resp.status() == StatusCode::OK) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("gateway did not become ready on port {port}");
}

pub fn gemini_text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}
