use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use kserve_console::{
    config::{Config, GatewayConfig, LogsConfig, ServerConfig},
    server::{self, AppState},
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`
use wiremock::MockServer;

/// Virtual hostnames the mock gateway routes on.
pub const T5_HOST: &str = "huggingface-t5.kserve-test.example.com";
pub const ALBERT_HOST: &str = "huggingface-albert.kserve-test.example.com";

/// Create a test configuration pointing both adapters at the mock gateway.
pub fn create_test_config(gateway: &MockServer) -> Config {
    let addr = gateway.address();
    Config {
        gateway: GatewayConfig {
            host: addr.ip().to_string(),
            port: addr.port().to_string(),
            translate_hostname: T5_HOST.to_string(),
            fillmask_hostname: ALBERT_HOST.to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Build the console router wired to the mock gateway.
pub fn create_test_app(gateway: &MockServer) -> Router {
    server::app(AppState::new(&create_test_config(gateway)))
}

/// POST a JSON body to the console and decode the JSON answer. A non-JSON
/// body (extractor rejections) comes back as `Value::Null`.
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
