use axum::{body::Bytes, extract::State};

use crate::incoming::http_axum::{dto::responses::ProcessedImageResponse, error_mapper::HttpError};
use crate::shared::app_state::AppState;
use camgrid_application::ports::incoming::grayscale::GrayscaleUseCase;

/// Takes the raw encoded image as the request body and answers with the
/// grayscale version, re-encoded.
pub async fn process_image(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ProcessedImageResponse, HttpError> {
    let grayscale_uc: &dyn GrayscaleUseCase = &*state.grayscale_service;
    let image = grayscale_uc
        .grayscale_payload(body.to_vec())
        .await
        .map_err(HttpError)?;

    Ok(ProcessedImageResponse { image })
}
