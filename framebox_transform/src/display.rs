// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::Transform;

/// Two rectangles a renderer needs to draw a box.
///
/// The container is the visible footprint on the canvas and clips its
/// children. The content layer is the full content drawn at the box scale,
/// offset so that the crop window fills the container exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayProperties {
    /// Box footprint, in canvas coordinates.
    pub container: Rect,
    /// Full content layer, in container-local coordinates.
    ///
    /// Its origin is `-crop.origin() * scale`, so it usually starts above
    /// and to the left of the container.
    pub content: Rect,
    /// Scale shared by both rectangles.
    pub scale: f64,
}

impl DisplayProperties {
    /// Projects a transform into renderable rectangles.
    #[must_use]
    pub fn from_transform(transform: &Transform) -> Self {
        let scale = transform.scale;
        let crop = transform.crop;
        let container = Rect::from_origin_size(
            transform.screen_position,
            Size::new(crop.width() * scale, crop.height() * scale),
        );
        let content = Rect::from_origin_size(
            Point::new(-crop.x0 * scale, -crop.y0 * scale),
            Size::new(
                transform.content_size.width * scale,
                transform.content_size.height * scale,
            ),
        );
        Self {
            container,
            content,
            scale,
        }
    }

    /// Maps a point in content coordinates to container-local coordinates.
    ///
    /// The crop origin maps to `(0, 0)` and the far crop corner maps to the
    /// container size.
    #[must_use]
    pub fn content_to_container(&self, pt: Point) -> Point {
        self.content.origin() + pt.to_vec2() * self.scale
    }

    /// Maps a container-local point back to content coordinates.
    #[must_use]
    pub fn container_to_content(&self, pt: Point) -> Point {
        ((pt - self.content.origin()) / self.scale).to_point()
    }

    /// Maps a canvas point to content coordinates, for hit testing.
    #[must_use]
    pub fn canvas_to_content(&self, pt: Point) -> Point {
        let local: Vec2 = pt - self.container.origin();
        self.container_to_content(local.to_point())
    }
}
