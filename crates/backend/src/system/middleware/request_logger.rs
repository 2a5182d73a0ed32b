use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Duration;

use crate::shared::format::format_number;

/// One `tracing` event per request, under the `request` target.
///
/// Successful responses log at `info`, client errors at `warn`, server
/// errors at `error`. The body is buffered so its real size can be reported.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                target: "request",
                "{} {} -> {} | body could not be buffered: {}",
                method,
                path,
                parts.status.as_u16(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    log_request(&method, &path, parts.status, start.elapsed(), bytes.len());

    Response::from_parts(parts, Body::from(bytes))
}

fn log_request(method: &Method, path: &str, status: StatusCode, elapsed: Duration, size: usize) {
    let line = format!(
        "{:>6} {} -> {} | {:>5}ms | {:>12} bytes",
        method,
        path,
        status.as_u16(),
        elapsed.as_millis(),
        format_number(size)
    );

    if status.is_server_error() {
        tracing::error!(target: "request", "{}", line);
    } else if status.is_client_error() {
        tracing::warn!(target: "request", "{}", line);
    } else {
        tracing::info!(target: "request", "{}", line);
    }
}
