//! Vector rendering: rotate a fixed outline and place it on the surface

use std::sync::Arc;

use super::{RenderMode, Sprite};
use crate::foundation::math::Point2;
use crate::foundation::polar::{cartesian_to_polar, PolarPoint};
use crate::render::{Color, Surface};

/// Immutable outline of a vector sprite
///
/// Vertices are authored as offsets from the sprite center with y pointing
/// up. Their relative polar form is computed once here, since neither the
/// vertices nor their polar form depend on orientation.
#[derive(Debug, Clone)]
pub struct VectorShape {
    cartesians: Arc<[Point2]>,
    polars: Arc<[PolarPoint]>,
    color: Color,
}

impl VectorShape {
    /// Build a shape from offset vertices in drawing order
    pub fn new(cartesians: Vec<Point2>, color: Color) -> Self {
        let polars = cartesian_to_polar(&cartesians);
        Self {
            cartesians: cartesians.into(),
            polars: polars.into(),
            color,
        }
    }

    /// Authored offset vertices
    pub fn cartesians(&self) -> &[Point2] {
        &self.cartesians
    }

    /// Outline color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Surface pixels of the outline for a given placement
    ///
    /// Each vertex is rotated by `orientation` degrees in polar form, scaled by
    /// `radius`, truncated to pixels, and placed relative to `center` with the
    /// y offset subtracted because the surface's y axis grows downward.
    /// Authored order is kept.
    pub fn outline(&self, center: Point2, radius: u32, orientation: i32) -> Vec<Point2> {
        let scale = f64::from(radius);
        self.polars
            .iter()
            .map(|pp| pp.rotated(orientation).to_cartesian(scale))
            .map(|offset| Point2::new(center.x + offset.x, center.y - offset.y))
            .collect()
    }
}

impl Sprite {
    /// Current outline in surface pixels, or `None` for raster sprites
    pub fn vector_outline(&self) -> Option<Vec<Point2>> {
        match self.render_mode() {
            RenderMode::Vector(shape) => Some(shape.outline(self.center(), self.radius(), self.orientation())),
            RenderMode::Raster(_) => None,
        }
    }

    /// Draw the outline as a closed polygon
    pub fn render_vector(&self, surface: &mut dyn Surface) {
        debug_assert!(self.render_mode().is_vector(), "render_vector called on a raster sprite");
        let RenderMode::Vector(shape) = self.render_mode() else {
            return;
        };
        let points = shape.outline(self.center(), self.radius(), self.orientation());
        surface.draw_polygon(&points, shape.color());
    }
}
