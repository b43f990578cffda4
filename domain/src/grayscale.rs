//! Channel-averaging grayscale conversion.
//!
//! Every pixel's red, green and blue channels are replaced with
//! `floor((r + g + b) / 3)` of the original values; alpha is left as is.
//! Each pixel is independent of every other, so the pass is a plain
//! sequential scan over the buffer.

use crate::color::Rgba;
use crate::raster::{CHANNELS, PixelRaster};

pub fn grayscale_in_place(raster: &mut PixelRaster) {
    for px in raster.pixels_mut() {
        if let Ok(bytes) = <[u8; CHANNELS]>::try_from(&*px) {
            px.copy_from_slice(&Rgba::from_bytes(bytes).to_gray().to_bytes());
        }
    }
}

#[must_use]
pub fn to_grayscale(raster: &PixelRaster) -> PixelRaster {
    let mut out = raster.clone();
    grayscale_in_place(&mut out);
    out
}
