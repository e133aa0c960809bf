//! Drawing-surface abstraction
//!
//! The engine never owns a window or a graphics context. Sprites draw onto any
//! [`Surface`]: an immediate-mode target with a current affine transform, a
//! polygon primitive for vector sprites and an image primitive for raster ones.
//!
//! # Design Philosophy
//!
//! - Polygons arrive already in surface pixels; the surface transform is left alone
//! - Images are drawn at the origin through the current surface transform
//! - Anyone who changes the transform restores it, via [`TransformGuard`]

pub mod recording;

pub use recording::{DrawCall, RecordingSurface};

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::assets::ImageData;
use crate::foundation::math::{Affine2, Point2};

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque cyan
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Opaque orange
    pub const ORANGE: Self = Self::rgb(255, 200, 0);
    /// Opaque gray
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Opaque color from components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Something sprites can draw onto
pub trait Surface {
    /// Current transform applied to image draws
    fn transform(&self) -> Affine2;

    /// Replace the current transform
    fn set_transform(&mut self, transform: Affine2);

    /// Draw a closed outline through `points`, in the given order
    fn draw_polygon(&mut self, points: &[Point2], color: Color);

    /// Draw `image` with its top-left corner at the origin of the current transform
    fn draw_image(&mut self, image: &ImageData);
}

/// Scoped transform mutation
///
/// Captures the surface transform on creation and puts it back when dropped,
/// whichever way the scope is left.
pub struct TransformGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    saved: Affine2,
}

impl<'a, S: Surface + ?Sized> TransformGuard<'a, S> {
    /// Capture the current transform of `surface`
    pub fn new(surface: &'a mut S) -> Self {
        let saved = surface.transform();
        Self { surface, saved }
    }

    /// The transform that will be restored
    pub fn saved(&self) -> Affine2 {
        self.saved
    }
}

impl<S: Surface + ?Sized> Deref for TransformGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for TransformGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: Surface + ?Sized> Drop for TransformGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_transform(self.saved);
    }
}
