//! Raster rendering: place one image frame through an affine transform

use super::{RenderMode, Sprite};
use crate::assets::ImageData;
use crate::foundation::math::{utils, Affine2, Point2};
use crate::render::{Surface, TransformGuard};

/// Placement of an image of native size `width` x `height`
///
/// Composed in this order: translate to `center`, scale the image to a
/// `2 * radius` square, rotate by `orientation` degrees, then translate by
/// half the native size so scaling and rotation pivot on the image center.
pub fn raster_transform(center: Point2, radius: u32, orientation: i32, width: f64, height: f64) -> Affine2 {
    let diameter = 2.0 * f64::from(radius);
    utils::translation(f64::from(center.x), f64::from(center.y))
        * utils::scaling(diameter / width, diameter / height)
        * utils::rotation(utils::deg_to_rad(orientation))
        * utils::translation(-width / 2.0, -height / 2.0)
}

impl Sprite {
    /// Draw `image` centered on the sprite, sized to its bounding circle
    ///
    /// The surface transform is captured first and restored on the way out,
    /// including when `image` is `None`, which draws nothing.
    pub fn render_raster(&self, surface: &mut dyn Surface, image: Option<&ImageData>) {
        let mut guard = TransformGuard::new(surface);
        let Some(image) = image else {
            return;
        };

        let (width, height) = image.size();
        let placement = raster_transform(self.center(), self.radius(), self.orientation(), width, height);
        let composed = guard.saved() * placement;
        guard.set_transform(composed);
        guard.draw_image(image);
    }

    /// Draw the frame stored under `key`; a missing or empty slot draws nothing
    pub fn render_frame(&self, surface: &mut dyn Surface, key: u32) {
        debug_assert!(!self.render_mode().is_vector(), "render_frame called on a vector sprite");
        let RenderMode::Raster(frames) = self.render_mode() else {
            return;
        };
        self.render_raster(surface, frames.get(key));
    }
}
