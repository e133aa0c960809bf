//! Asset loading for raster sprites
//!
//! Images are decoded once, when the sprite (or the shared frame set it draws
//! from) is built. Nothing here runs per tick.

pub mod image_loader;
pub mod raster_map;

pub use image_loader::ImageData;
pub use raster_map::RasterMap;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file could not be read or decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// The decoded image has no pixels
    #[error("Image {path} has zero width or height")]
    EmptyImage {
        /// Source of the image
        path: String,
    },
}
