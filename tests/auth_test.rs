//! Authentication boundary tests for the REST surface.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

#[tokio::test]
async fn notifications_require_a_token() {
    let app = helpers::test_app();
    let (status, body) = helpers::send(
        app,
        Request::get("/notifications")
            .body(Body::empty())
            .expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "error");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn non_bearer_authorization_is_rejected() {
    let app = helpers::test_app();
    let (status, _) = helpers::send(
        app,
        Request::get("/messages")
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = helpers::test_app();
    let forged = helpers::sign_token("some-other-secret");
    let (status, body) = helpers::send(
        app,
        Request::get("/notifications")
            .header(header::AUTHORIZATION, format!("Bearer {forged}"))
            .body(Body::empty())
            .expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn authenticated_request_reports_store_failure_as_server_error() {
    // The lazy pool points at a closed port, so the first query fails. The
    // failure must surface as a 500 with the generic error envelope, never
    // as a panic or a leaked internal message.
    let app = helpers::test_app();
    let (status, body) = helpers::send(app, helpers::authed_get("/notifications")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "internal server error");
}
