use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs one line per request with method, path, status and latency.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = start.elapsed();

    if status.is_server_error() {
        tracing::error!(%method, %path, %status, ?elapsed, "request");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, %status, ?elapsed, "request");
    } else {
        tracing::info!(%method, %path, %status, ?elapsed, "request");
    }

    response
}
