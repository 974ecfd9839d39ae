//! Health endpoint tests.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};

#[tokio::test]
async fn health_returns_success_envelope_without_a_token() {
    let app = helpers::test_app();
    let (status, body) = helpers::send(
        app,
        Request::get("/health").body(Body::empty()).expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["connections"], 0);
    assert_eq!(body["data"]["onlineUsers"], 0);
    assert!(body["v"].is_string());
}
