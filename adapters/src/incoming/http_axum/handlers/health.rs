use axum::{Json, extract::State};

use crate::incoming::http_axum::dto::responses::{ApiResponse, HealthResponse};
use crate::shared::app_state::AppState;
use camgrid_application::ports::incoming::grayscale::GrayscaleUseCase;

pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let grayscale_uc: &dyn GrayscaleUseCase = &*state.grayscale_service;

    Json(ApiResponse::success_with_data(Some(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        output_format: grayscale_uc.output_media_type(),
    })))
}
