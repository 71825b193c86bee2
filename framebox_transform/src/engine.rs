// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::{DisplayProperties, EngineConfig, Handle, Mode, Side, Transform};

/// Saturating clamp of `value` into `min..=max`.
///
/// `min` is applied first and `max` second, so `max` wins when the bounds
/// cross. Unlike [`f64::clamp`] this never panics.
#[must_use]
pub fn adjust(value: f64, min: f64, max: f64) -> f64 {
    let value = if value < min { min } else { value };
    if value > max { max } else { value }
}

/// Pure transitions from a base [`Transform`] and a pointer delta to a new
/// [`Transform`].
///
/// Deltas are in canvas pixels and measured from where the drag started,
/// not from the previous move. Callers keep the transform captured at
/// pointer-down and pass it as `base` on every move, so repeated or
/// out-of-order moves with the same delta yield the same result.
///
/// ```rust
/// use kurbo::{Size, Vec2};
/// use framebox_transform::{Handle, Mode, TransformEngine};
///
/// let engine = TransformEngine::default();
/// let base = engine.default_transform(Size::new(400.0, 300.0));
///
/// // Drag the bottom-right corner 40px right: the whole box grows by 10%.
/// let next = engine.drag_handle(Mode::Resize, &base, Vec2::new(40.0, 30.0), Some(Handle::Se));
/// assert!((next.scale - 1.1).abs() < 1e-12);
/// assert_eq!(next.screen_position, base.screen_position);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformEngine {
    config: EngineConfig,
}

impl TransformEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Transform for a new box: full content visible, scale 1, placed at
    /// the configured default screen position.
    #[must_use]
    pub fn default_transform(&self, content_size: Size) -> Transform {
        Transform {
            crop: content_size.to_rect(),
            screen_position: self.config.default_screen_position(),
            scale: 1.0,
            content_size,
        }
    }

    /// Renderable container and content rectangles for `transform`.
    #[must_use]
    pub fn display_properties(&self, transform: &Transform) -> DisplayProperties {
        DisplayProperties::from_transform(transform)
    }

    /// Pans according to `mode`.
    ///
    /// In [`Mode::Crop`] the content scrolls under the box; otherwise the box
    /// itself moves.
    #[must_use]
    pub fn pan(&self, mode: Mode, base: &Transform, delta: Vec2) -> Transform {
        match mode {
            Mode::Crop => self.content_drag_on_crop(base, delta),
            Mode::Resize | Mode::ResizeContent => self.content_drag_on_resize(base, delta),
        }
    }

    /// Applies a handle drag according to `mode`.
    ///
    /// A missing handle leaves the transform unchanged.
    #[must_use]
    pub fn drag_handle(
        &self,
        mode: Mode,
        base: &Transform,
        delta: Vec2,
        handle: Option<Handle>,
    ) -> Transform {
        match mode {
            Mode::Resize => self.handle_drag_on_resize(base, delta, handle),
            Mode::Crop => self.handle_drag_on_crop(base, delta, handle),
            Mode::ResizeContent => self.handle_drag_on_resize_content(base, delta, handle),
        }
    }

    /// Moves the whole box by `delta`.
    #[must_use]
    pub fn content_drag_on_resize(&self, base: &Transform, delta: Vec2) -> Transform {
        Transform {
            screen_position: base.screen_position + delta,
            ..*base
        }
    }

    /// Scrolls the content under a fixed box.
    ///
    /// Dragging right reveals content to the left, so the crop moves by
    /// `-delta / scale`. Each axis is clamped to keep the crop inside the
    /// content.
    #[must_use]
    pub fn content_drag_on_crop(&self, base: &Transform, delta: Vec2) -> Transform {
        let crop = base.crop;
        let x = adjust(
            crop.x0 - delta.x / base.scale,
            0.0,
            base.content_size.width - crop.width(),
        );
        let y = adjust(
            crop.y0 - delta.y / base.scale,
            0.0,
            base.content_size.height - crop.height(),
        );
        Transform {
            crop: crop + Vec2::new(x - crop.x0, y - crop.y0),
            ..*base
        }
    }

    /// Scales the whole box uniformly from a corner handle.
    ///
    /// The opposite corner stays fixed on the canvas. Each axis proposes a
    /// scale floored so the box stays at least `min_size` on that axis; the
    /// smaller proposal wins, but never below the floor of the shorter axis.
    /// The crop is unchanged.
    ///
    /// Edge handles and a missing handle leave the transform unchanged.
    #[must_use]
    pub fn handle_drag_on_resize(
        &self,
        base: &Transform,
        delta: Vec2,
        handle: Option<Handle>,
    ) -> Transform {
        let Some(handle) = handle.filter(|h| h.is_corner()) else {
            return *base;
        };
        let min_size = self.config.min_size();
        let width = base.crop.width();
        let height = base.crop.height();

        let sign_x = if handle.is_west() { -1.0 } else { 1.0 };
        let sign_y = if handle.is_north() { -1.0 } else { 1.0 };
        let scale_x = base.scale + sign_x * (delta.x / width);
        let scale_y = base.scale + sign_y * (delta.y / height);
        let floor_x = min_size / width;
        let floor_y = min_size / height;
        let scale = scale_x
            .max(floor_x)
            .min(scale_y.max(floor_y))
            .max(floor_x.max(floor_y));

        let scale_delta = scale - base.scale;
        let mut screen_position = base.screen_position;
        if handle.is_west() {
            screen_position.x -= width * scale_delta;
        }
        if handle.is_north() {
            screen_position.y -= height * scale_delta;
        }

        Transform {
            screen_position,
            scale,
            ..*base
        }
    }

    /// Resizes the content itself, keeping the scale.
    ///
    /// The crop is reset to the whole content.
    /// Dragging a west or north handle keeps the opposite edge fixed by
    /// shifting the box. Content never shrinks below `min_size`.
    ///
    /// A missing handle leaves the transform unchanged.
    #[must_use]
    pub fn handle_drag_on_resize_content(
        &self,
        base: &Transform,
        delta: Vec2,
        handle: Option<Handle>,
    ) -> Transform {
        let Some(handle) = handle else {
            return *base;
        };
        let min_size = self.config.min_size();
        let old = base.content_size;

        let width = match handle.horizontal() {
            Some(Side::Max) => (old.width + delta.x).max(min_size),
            Some(Side::Min) => (old.width - delta.x).max(min_size),
            None => old.width,
        };
        let height = match handle.vertical() {
            Some(Side::Max) => (old.height + delta.y).max(min_size),
            Some(Side::Min) => (old.height - delta.y).max(min_size),
            None => old.height,
        };

        let mut screen_position = base.screen_position;
        if handle.is_west() {
            screen_position.x -= width - old.width;
        }
        if handle.is_north() {
            screen_position.y -= height - old.height;
        }

        let content_size = Size::new(width, height);
        Transform {
            crop: content_size.to_rect(),
            screen_position,
            content_size,
            ..*base
        }
    }

    /// Resizes the crop window from a handle.
    ///
    /// The edge opposite the handle stays fixed in content space. The crop
    /// never leaves the content and never gets smaller than
    /// `min_size / scale`. The box is shifted by the scaled change in crop
    /// origin so the fixed edge also stays put on the canvas.
    ///
    /// A missing handle leaves the transform unchanged.
    #[must_use]
    pub fn handle_drag_on_crop(
        &self,
        base: &Transform,
        delta: Vec2,
        handle: Option<Handle>,
    ) -> Transform {
        let Some(handle) = handle else {
            return *base;
        };
        let scale = base.scale;
        let min_crop_size = self.config.min_size() / scale;
        let crop = base.crop;

        let (x0, x1) = crop_axis(
            crop.x0,
            crop.x1,
            delta.x / scale,
            min_crop_size,
            base.content_size.width,
            handle.horizontal(),
        );
        let (y0, y1) = crop_axis(
            crop.y0,
            crop.y1,
            delta.y / scale,
            min_crop_size,
            base.content_size.height,
            handle.vertical(),
        );

        let origin_shift = Vec2::new(x0 - crop.x0, y0 - crop.y0);
        Transform {
            crop: Rect::new(x0, y0, x1, y1),
            screen_position: base.screen_position + origin_shift * scale,
            ..*base
        }
    }
}

/// Resizes one axis of a crop window, returning the new `(start, end)`.
///
/// For the max side the start is fixed and the length is clamped to
/// `[min_len, extent - start]`. For the min side the end is fixed: the length
/// is clamped to `[min_len, end]`, the start is derived from it, clamped to
/// zero, and the length re-derived from the clamped start.
fn crop_axis(
    start: f64,
    end: f64,
    delta: f64,
    min_len: f64,
    extent: f64,
    side: Option<Side>,
) -> (f64, f64) {
    let len = end - start;
    // A still pointer on a valid crop is an exact identity.
    let unchanged = delta == 0.0 && len >= min_len && start >= 0.0 && end <= extent;
    match side {
        None => (start, end),
        Some(_) if unchanged => (start, end),
        Some(Side::Max) => {
            let new_len = adjust(len + delta, min_len, extent - start);
            (start, start + new_len)
        }
        Some(Side::Min) => {
            let new_len = adjust(len - delta, min_len, start + len);
            let new_start = (start + len - new_len).max(0.0);
            (new_start, end)
        }
    }
}
