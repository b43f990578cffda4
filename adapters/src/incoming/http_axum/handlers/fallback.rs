use axum::http::StatusCode;

/// Plain-text 404 for unknown paths and for unsupported methods on known ones.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
