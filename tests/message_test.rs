//! Message endpoint validation tests.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use uuid::Uuid;

fn authed_json(method: &str, path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", helpers::bearer_token()),
        )
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build")
}

#[tokio::test]
async fn empty_message_body_is_rejected_before_the_store() {
    let app = helpers::test_app();
    let (status, body) = helpers::send(
        app,
        authed_json(
            "POST",
            "/messages",
            serde_json::json!({
                "receiverId": Uuid::new_v4(),
                "message": "",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn mark_read_with_empty_id_list_is_rejected() {
    let app = helpers::test_app();
    let (status, body) = helpers::send(
        app,
        authed_json(
            "PATCH",
            "/messages/read",
            serde_json::json!({ "messageIds": [] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn malformed_json_body_still_gets_the_envelope() {
    // messageIds must be an array; a scalar must produce the uniform
    // error envelope, not axum's plain-text rejection.
    let app = helpers::test_app();
    let (status, body) = helpers::send(
        app,
        authed_json(
            "PATCH",
            "/messages/read",
            serde_json::json!({ "messageIds": "nope" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["data"].is_null());
    assert!(body["v"].is_string());
}

#[tokio::test]
async fn delete_requires_a_token() {
    let app = helpers::test_app();
    let (status, _) = helpers::send(
        app,
        Request::delete(format!("/messages/{}", Uuid::new_v4()))
            .body(Body::empty())
            .expect("request"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
