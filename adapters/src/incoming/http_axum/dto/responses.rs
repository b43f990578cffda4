use axum::{
    http::{
        HeaderMap, HeaderValue,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;

use domain::payload::{ImagePayload, MediaType};

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn success_with_data(data: Option<T>) -> Self {
        Self {
            ok: true,
            error: None,
            data,
            status: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>, status: u16) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            data: None,
            status: Some(status),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub output_format: MediaType,
}

pub struct ProcessedImageResponse {
    pub image: ImagePayload,
}

impl IntoResponse for ProcessedImageResponse {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(self.image.media_type.content_type()),
        );
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        (headers, self.image.bytes).into_response()
    }
}
