mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use urlkit::api::handlers::resolve_handler;
use urlkit::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/resolve", post(resolve_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_resolve_single_url_success() {
    let server = server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "urls": [
                { "url": "example.com/x" }
            ]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["summary"]["successful"], 1);
    assert_eq!(json["summary"]["failed"], 0);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "example.com/x");
    assert_eq!(items[0]["resolved"], "http://example.com/x");
    assert!(items[0].get("base_url").is_none());
}

#[tokio::test]
async fn test_resolve_with_base_url() {
    let server = server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "urls": [
                { "url": "/foo/bar", "base_url": "api.example.com/pets" }
            ]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"][0]["base_url"], "api.example.com/pets");
    assert_eq!(
        json["items"][0]["resolved"],
        "http://api.example.com/pets/foo/bar"
    );
}

#[tokio::test]
async fn test_resolve_batch_mixed_results() {
    let server = server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "urls": [
                { "url": "http://foo///bar//baz" },
                { "url": "" },
                { "url": "/x", "base_url": "api.example.com/pets?q=1" },
                { "url": "https://other.com", "base_url": "api.example.com" }
            ]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total"], 4);
    assert_eq!(json["summary"]["successful"], 1);
    assert_eq!(json["summary"]["failed"], 3);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["resolved"], "http://foo/bar/baz");

    assert_eq!(items[1]["error"]["code"], "invalid_url");
    assert_eq!(items[1]["error"]["details"]["input"], "");

    assert_eq!(items[2]["error"]["code"], "invalid_base_url");
    assert_eq!(items[2]["error"]["details"]["problem"], "query");

    assert_eq!(items[3]["error"]["code"], "invalid_url");
    assert_eq!(items[3]["error"]["details"]["reason"], "absolute_with_base");
}

#[tokio::test]
async fn test_resolve_empty_batch_rejected() {
    let server = server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({ "urls": [] }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_resolve_batch_over_limit_rejected() {
    let server = server(common::create_limited_state(2, 8192));

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "urls": [
                { "url": "a.com" },
                { "url": "b.com" },
                { "url": "c.com" }
            ]
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["max"], 2);
}

#[tokio::test]
async fn test_resolve_input_over_limit_rejected() {
    let server = server(common::create_limited_state(10, 32));
    let long_url = format!("example.com/{}", "a".repeat(64));

    let response = server
        .post("/api/resolve")
        .json(&json!({ "urls": [ { "url": long_url } ] }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "url");
}
