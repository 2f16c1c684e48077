use axum::{Router, routing::get};
use axum_test::TestServer;
use urlkit::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new().route("/health", get(health_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["resolver"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
