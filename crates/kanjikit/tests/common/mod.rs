//! Shared fixtures for client integration tests.

use kanjikit::AnkiClient;
use serde::Serialize;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock AnkiConnect endpoint and a client pointed at it.
pub async fn client_and_server() -> (AnkiClient, MockServer) {
    let server = MockServer::start().await;
    let client = AnkiClient::builder().url(server.uri()).build();
    (client, server)
}

/// A successful AnkiConnect body wrapping `result`.
pub fn anki_result<T: Serialize>(result: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": result,
        "error": null
    }))
}

/// A failed AnkiConnect body carrying `error`.
#[allow(dead_code)] // only the model tests drive the error path
pub fn anki_error(error: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": null,
        "error": error
    }))
}

/// Mount `response` for exactly one call to `action`.
pub async fn expect_action(server: &MockServer, action: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": action,
            "version": 6
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
