use tracing::debug;

use domain::grayscale::grayscale_in_place;
use domain::payload::ImagePayload;

use crate::error::AppResult;
use crate::ports::outgoing::image_codec::ImageCodecPort;

/// Decode, average and re-encode in one synchronous pass. Any codec error
/// aborts the whole job.
pub fn grayscale_encoded(codec: &dyn ImageCodecPort, data: &[u8]) -> AppResult<ImagePayload> {
    let mut raster = codec.decode(data)?;
    let (width, height) = raster.dimensions();

    grayscale_in_place(&mut raster);

    let payload = codec.encode(&raster)?;
    debug!(
        width,
        height,
        pixels = raster.pixel_count(),
        input_bytes = data.len(),
        output_bytes = payload.bytes.len(),
        "Grayscale raster encoded"
    );
    Ok(payload)
}
