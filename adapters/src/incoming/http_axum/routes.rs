use axum::{
    Router,
    routing::{get, post},
};

use crate::incoming::http_axum::{
    handlers::{
        fallback::not_found, health::health_check, page::camera_page, process::process_image,
    },
    router_ext::RouterExt,
};
use crate::shared::app_state::AppState;

pub fn build_application_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(camera_page).fallback(not_found))
        .route("/process", post(process_image).fallback(not_found))
        .route("/health", get(health_check).fallback(not_found))
        .fallback(not_found)
        .with_upload_limit(state.config.server.max_upload_bytes)
        .with_request_id()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use tower::ServiceExt;

    use super::*;
    use camgrid_application::{
        error::{AppError, AppResult},
        infrastructure_config::Config,
        ports::incoming::grayscale::GrayscaleUseCase,
    };
    use domain::payload::{ImagePayload, MediaType};

    use crate::incoming::http_axum::middleware::request_id::REQUEST_ID_HEADER;

    /// Echoes the body back, failing on an empty one.
    struct EchoGrayscale;

    #[async_trait::async_trait]
    impl GrayscaleUseCase for EchoGrayscale {
        async fn grayscale_payload(&self, payload: Vec<u8>) -> AppResult<ImagePayload> {
            if payload.is_empty() {
                return Err(AppError::DecodeFailure {
                    message: "empty".to_string(),
                });
            }
            Ok(ImagePayload::new(payload, MediaType::Png))
        }

        fn output_media_type(&self) -> MediaType {
            MediaType::Png
        }
    }

    fn app() -> Router {
        let mut config = Config::default();
        config.server.max_upload_bytes = 64;
        let state = AppState::new(Arc::new(config), Arc::new(EchoGrayscale));
        build_application_router(&state).with_state(state)
    }

    async fn send(request: Request<Body>) -> axum::response::Response {
        app().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn serves_camera_page() {
        let response = send(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("getUserMedia"));
    }

    #[tokio::test]
    async fn unknown_path_is_plain_404() {
        let response = send(Request::get("/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"404 Not Found");
    }

    #[tokio::test]
    async fn wrong_method_is_404() {
        let response = send(Request::get("/process").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(Request::post("/").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn process_returns_image() {
        let response = send(
            Request::post("/process")
                .body(Body::from(vec![1u8, 2, 3]))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "image/png");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], &[1, 2, 3]);
    }

    #[tokio::test]
    async fn process_failure_is_json_error() {
        let response = send(Request::post("/process").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["status"], 400);
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected() {
        let response = send(
            Request::post("/process")
                .body(Body::from(vec![0u8; 65]))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let response = send(
            Request::get("/health")
                .header(REQUEST_ID_HEADER, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn health_reports_output_format() {
        let response = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["data"]["output_format"], "png");
        assert_eq!(json["data"]["status"], "healthy");
    }
}
