pub mod color;
pub mod error;
pub mod grayscale;
pub mod payload;
pub mod raster;
