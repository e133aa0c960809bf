//! A surface that records draw calls instead of rasterizing them
//!
//! Used by tests and headless runs to observe exactly what sprites draw.

use super::{Color, Surface};
use crate::assets::ImageData;
use crate::foundation::math::{Affine2, Point2};

/// One recorded operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// A closed polygon outline
    Polygon {
        /// Vertices in surface pixels, in draw order
        points: Vec<Point2>,
        /// Outline color
        color: Color,
    },
    /// An image drawn through a transform
    Image {
        /// Native image width
        width: u32,
        /// Native image height
        height: u32,
        /// Surface transform in effect for the draw
        transform: Affine2,
    },
    /// The surface transform changed
    SetTransform(Affine2),
}

/// Recording surface
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    transform: Affine2,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Create a surface with an identity transform and no calls
    pub fn new() -> Self {
        Self {
            transform: Affine2::identity(),
            calls: Vec::new(),
        }
    }

    /// Everything recorded so far
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded polygons, in order
    pub fn polygons(&self) -> impl Iterator<Item = &[Point2]> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Transforms of recorded image draws, in order
    pub fn image_transforms(&self) -> impl Iterator<Item = &Affine2> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Image { transform, .. } => Some(transform),
            _ => None,
        })
    }

    /// Forget recorded calls; the current transform is kept
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn transform(&self) -> Affine2 {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
        self.calls.push(DrawCall::SetTransform(transform));
    }

    fn draw_polygon(&mut self, points: &[Point2], color: Color) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_image(&mut self, image: &ImageData) {
        self.calls.push(DrawCall::Image {
            width: image.width,
            height: image.height,
            transform: self.transform,
        });
    }
}
