use crate::error::AppResult;
use domain::payload::{ImagePayload, MediaType};

#[async_trait::async_trait]
pub trait GrayscaleUseCase: Send + Sync {
    /// Decodes `payload`, averages its colour channels and re-encodes it.
    async fn grayscale_payload(&self, payload: Vec<u8>) -> AppResult<ImagePayload>;

    fn output_media_type(&self) -> MediaType;
}
