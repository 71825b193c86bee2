// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use framebox_transform::Mode;
use kurbo::Size;

/// The kinds of box a canvas can hold.
///
/// The kind decides which [`Mode`]s a box offers and, for panel-like boxes,
/// the size of its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxKind {
    /// A live capture of a screen or window.
    ScreenCapture,
    /// A still image.
    Image,
    /// A text memo panel whose content can be resized.
    Memo,
    /// A clock face.
    Clock,
    /// A countdown timer.
    Timer,
}

impl BoxKind {
    /// Modes this kind supports. The first entry is the default.
    #[must_use]
    pub const fn supported_modes(self) -> &'static [Mode] {
        match self {
            Self::ScreenCapture | Self::Image => &[Mode::Resize, Mode::Crop],
            Self::Memo => &[Mode::Resize, Mode::ResizeContent],
            Self::Clock | Self::Timer => &[Mode::Resize],
        }
    }

    /// Returns `true` if boxes of this kind may switch to `mode`.
    #[must_use]
    pub fn supports(self, mode: Mode) -> bool {
        self.supported_modes().contains(&mode)
    }

    /// Mode a new box of this kind starts in.
    #[must_use]
    pub const fn default_mode(self) -> Mode {
        Mode::Resize
    }

    /// Fixed content size of panel-like kinds.
    ///
    /// Captures and images take their size from the source and return `None`.
    #[must_use]
    pub const fn default_content_size(self) -> Option<Size> {
        match self {
            Self::ScreenCapture | Self::Image => None,
            Self::Memo => Some(Size::new(300.0, 200.0)),
            Self::Clock => Some(Size::new(240.0, 120.0)),
            Self::Timer => Some(Size::new(240.0, 160.0)),
        }
    }
}
