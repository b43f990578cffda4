use crate::error::AppResult;
use domain::payload::{ImagePayload, MediaType};
use domain::raster::PixelRaster;
use std::sync::Arc;

pub trait ImageCodecPort: Send + Sync {
    /// Fails with `AppError::DecodeFailure` when `data` is not a readable image.
    fn decode(&self, data: &[u8]) -> AppResult<PixelRaster>;
    /// Fails with `AppError::EncodeFailure` when the raster cannot be serialized.
    fn encode(&self, raster: &PixelRaster) -> AppResult<ImagePayload>;
    fn output_media_type(&self) -> MediaType;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
