// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::{DisplayProperties, Handle, TransformEngine};

/// Full placement state of one box: what part of its content is visible,
/// where it sits on the canvas, and how large it is drawn.
///
/// `Transform` is a plain value. Transitions on [`TransformEngine`] never
/// modify their input; they return a new `Transform`.
///
/// Valid transforms satisfy:
/// - `crop` lies inside `(0, 0)..content_size`.
/// - `crop.width() * scale` and `crop.height() * scale` are at least the
///   engine's minimum size.
/// - `scale > 0`.
///
/// `screen_position` is unconstrained; boxes may sit partly or fully off canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Visible sub-rectangle of the content, in content coordinates.
    pub crop: Rect,
    /// Top-left corner of the box, in canvas coordinates.
    pub screen_position: Point,
    /// Multiplier from crop dimensions to on-screen box dimensions.
    pub scale: f64,
    /// Intrinsic size of the content (video frame, image or panel).
    pub content_size: Size,
}

impl Transform {
    /// Creates a transform showing all of `content_size` at scale 1.
    ///
    /// Uses the default [`crate::EngineConfig`]; see
    /// [`TransformEngine::default_transform`] for a configured variant.
    #[must_use]
    pub fn new(content_size: Size) -> Self {
        TransformEngine::default().default_transform(content_size)
    }

    /// Size of the box on the canvas.
    #[must_use]
    pub fn display_size(&self) -> Size {
        self.crop.size() * self.scale
    }

    /// Footprint of the box in canvas coordinates.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        Rect::from_origin_size(self.screen_position, self.display_size())
    }

    /// Canvas position of a drag handle on the box outline.
    #[must_use]
    pub fn handle_position(&self, handle: Handle) -> Point {
        let (fx, fy) = handle.fraction();
        let size = self.display_size();
        Point::new(
            self.screen_position.x + size.width * fx,
            self.screen_position.y + size.height * fy,
        )
    }

    /// Renderable rectangles for this transform.
    ///
    /// Equivalent to [`TransformEngine::display_properties`].
    #[must_use]
    pub fn display_properties(&self) -> DisplayProperties {
        DisplayProperties::from_transform(self)
    }

    /// Snapshot of the transform and its derived values for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformDebugInfo {
        let content_area = self.content_size.area();
        TransformDebugInfo {
            crop: self.crop,
            screen_rect: self.screen_rect(),
            scale: self.scale,
            content_size: self.content_size,
            visible_fraction: if content_area > 0.0 {
                self.crop.area() / content_area
            } else {
                0.0
            },
            crop_is_contained: self.crop.x0 >= 0.0
                && self.crop.y0 >= 0.0
                && self.crop.x1 <= self.content_size.width
                && self.crop.y1 <= self.content_size.height,
        }
    }
}

/// Debug snapshot of a [`Transform`].
#[derive(Clone, Copy, Debug)]
pub struct TransformDebugInfo {
    /// Visible sub-rectangle of the content.
    pub crop: Rect,
    /// Footprint of the box in canvas coordinates.
    pub screen_rect: Rect,
    /// Current uniform scale.
    pub scale: f64,
    /// Intrinsic content size.
    pub content_size: Size,
    /// Share of the content area inside the crop window, in `0..=1` for valid transforms.
    pub visible_fraction: f64,
    /// Whether the crop window lies inside the content bounds.
    pub crop_is_contained: bool,
}
