use camgrid_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_codec::ImageCodecPort,
};
use domain::{
    payload::{ImagePayload, MediaType},
    raster::PixelRaster,
};
use image::{ImageBuffer, ImageFormat, ImageReader, Limits, Rgba};
use std::io::Cursor;
use tracing::{debug, instrument};

#[derive(Copy, Clone, Debug)]
pub struct ImageCodecConfig {
    pub max_dimension: u32,
}

/// Decodes any format the `image` crate can sniff and always encodes PNG.
#[derive(Clone)]
pub struct ImagePngAdapter {
    max_dimension: u32,
}

impl ImagePngAdapter {
    pub fn new(config: ImageCodecConfig) -> Self {
        Self {
            max_dimension: config.max_dimension,
        }
    }

    fn decode_limits(&self) -> Limits {
        let mut limits = Limits::default();
        limits.max_image_width = Some(self.max_dimension);
        limits.max_image_height = Some(self.max_dimension);
        limits
    }

    #[instrument(skip(self, data), fields(input_bytes = data.len()))]
    fn decode_impl(&self, data: &[u8]) -> AppResult<PixelRaster> {
        if data.is_empty() {
            return Err(AppError::DecodeFailure {
                message: "Image payload is empty".to_string(),
            });
        }

        let mut reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| AppError::DecodeFailure {
                message: format!("Failed to read image payload: {}", e),
            })?;

        let Some(format) = reader.format() else {
            return Err(AppError::DecodeFailure {
                message: "Unrecognized image format".to_string(),
            });
        };

        reader.limits(self.decode_limits());

        let img = reader.decode().map_err(|e| AppError::DecodeFailure {
            message: format!("Failed to decode {:?}: {}", format, e),
        })?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();
        debug!("Decoded {:?}: {}x{}", format, width, height);

        Ok(PixelRaster::from_rgba(width, height, rgba_img.into_raw())?)
    }

    #[instrument(skip(self, raster), fields(width = raster.width(), height = raster.height()))]
    fn encode_impl(&self, raster: &PixelRaster) -> AppResult<ImagePayload> {
        let img_buffer = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            raster.width(),
            raster.height(),
            raster.as_rgba().to_vec(),
        )
        .ok_or_else(|| AppError::EncodeFailure {
            message: "Failed to create image buffer from RGBA data".to_string(),
        })?;

        let mut png_bytes = Vec::new();
        img_buffer
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| AppError::EncodeFailure {
                message: format!("Failed to encode PNG: {}", e),
            })?;

        if png_bytes.is_empty() {
            return Err(AppError::EncodeFailure {
                message: "PNG encoding produced empty output".to_string(),
            });
        }

        debug!("Encoded PNG: {} bytes", png_bytes.len());
        Ok(ImagePayload::new(png_bytes, MediaType::Png))
    }
}

impl ImageCodecPort for ImagePngAdapter {
    fn decode(&self, data: &[u8]) -> AppResult<PixelRaster> {
        self.decode_impl(data)
    }

    fn encode(&self, raster: &PixelRaster) -> AppResult<ImagePayload> {
        self.encode_impl(raster)
    }

    fn output_media_type(&self) -> MediaType {
        MediaType::Png
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn adapter() -> ImagePngAdapter {
        ImagePngAdapter::new(ImageCodecConfig { max_dimension: 64 })
    }

    fn encode_fixture(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), format).unwrap();
        out
    }

    #[test]
    fn decodes_png_into_raster() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([10, 20, 30, 40]));
        let raster = adapter()
            .decode(&encode_fixture(&img, ImageFormat::Png))
            .unwrap();

        assert_eq!(raster.dimensions(), (3, 2));
        let last = raster.as_rgba().chunks_exact(4).last().unwrap();
        assert_eq!(last, [10, 20, 30, 40]);
        assert!(raster.as_rgba()[..20].iter().all(|&b| b == 0));
    }

    #[test]
    fn decodes_other_formats_too() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
        let bmp = encode_fixture(&img, ImageFormat::Bmp);
        let raster = adapter().decode(&bmp).unwrap();
        assert_eq!(raster.dimensions(), (4, 4));
    }

    #[test]
    fn garbage_is_decode_failure() {
        let err = adapter().decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AppError::DecodeFailure { .. }));
    }

    #[test]
    fn empty_payload_is_decode_failure() {
        let err = adapter().decode(&[]).unwrap_err();
        assert!(matches!(err, AppError::DecodeFailure { .. }));
    }

    #[test]
    fn oversized_image_is_rejected() {
        let img = RgbaImage::new(65, 1);
        let err = adapter()
            .decode(&encode_fixture(&img, ImageFormat::Png))
            .unwrap_err();
        assert!(matches!(err, AppError::DecodeFailure { .. }));
    }

    #[test]
    fn encodes_png_that_decodes_to_same_pixels() {
        let raster = PixelRaster::from_rgba(2, 1, vec![85, 85, 85, 128, 1, 2, 3, 4]).unwrap();

        let payload = adapter().encode(&raster).unwrap();
        assert_eq!(payload.media_type, MediaType::Png);
        assert!(payload.bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        assert_eq!(adapter().decode(&payload.bytes).unwrap(), raster);
    }

    #[test]
    fn zero_area_raster_is_encode_failure() {
        let raster = PixelRaster::from_rgba(0, 0, Vec::new()).unwrap();
        let err = adapter().encode(&raster).unwrap_err();
        assert!(matches!(err, AppError::EncodeFailure { .. }));
    }
}
