use crate::error::{DomainError, DomainResult};

pub const CHANNELS: usize = 4;

/// Row-major RGBA8 pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelRaster {
    /// Wraps an RGBA8 buffer, rejecting buffers whose length does not match
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> DomainResult<Self> {
        let expected = Self::expected_len(width, height)?;
        if data.len() != expected {
            return Err(DomainError::InvalidRaster(format!(
                "{}x{} raster needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn expected_len(width: u32, height: u32) -> DomainResult<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|count| count.checked_mul(CHANNELS))
            .ok_or_else(|| {
                DomainError::InvalidRaster(format!("{width}x{height} raster is too large"))
            })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(CHANNELS)
    }
}
