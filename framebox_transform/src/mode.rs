// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Interaction mode of a box, selecting which transition a drag applies.
///
/// The mode is consulted by [`crate::TransformEngine::pan`] and
/// [`crate::TransformEngine::drag_handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Scale the whole box uniformly; panning moves the box on the canvas.
    #[default]
    Resize,
    /// Reframe the crop window; panning scrolls the content under the box.
    Crop,
    /// Resize the underlying content itself; the crop always covers all of it.
    ///
    /// Used by boxes whose content is a resizable panel (for example a memo).
    ResizeContent,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Resize, Self::Crop, Self::ResizeContent];

    /// Short lowercase name of the mode, as used by host toolkits.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Crop => "crop",
            Self::ResizeContent => "resize-content",
        }
    }
}
