use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Reuses a printable client-supplied id, otherwise mints a UUID v4.
fn resolve_request_id(headers: &HeaderMap) -> HeaderValue {
    headers
        .get(REQUEST_ID_HEADER)
        .filter(|value| value.to_str().is_ok_and(|s| !s.trim().is_empty()))
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

fn is_upload(method: &Method, path: &str) -> bool {
    method == Method::POST && path == "/process"
}

/// Tags the request and response with an id and runs the rest of the stack
/// inside a span carrying it, so handler and service events share the id.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());
    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let upload = is_upload(&method, &path);
    let span = info_span!(
        "http_request",
        request_id = request_id.to_str().unwrap_or_default(),
        %method,
        %path
    );

    let started = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let elapsed_ms = started.elapsed().as_millis();

    span.in_scope(|| {
        if upload {
            info!(status = %response.status(), elapsed_ms, "Upload handled");
        } else {
            debug!(status = %response.status(), elapsed_ms, "Request handled");
        }
    });

    response
        .headers_mut()
        .insert(REQUEST_ID_HEADER, request_id);
    response
}
