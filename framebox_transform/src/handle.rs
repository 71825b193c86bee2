// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// One of the eight drag grips around a box.
///
/// Corners change both axes; edges change one. The handle also determines the
/// anchor: the opposite corner or edge stays visually fixed while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Top edge.
    N,
    /// Bottom edge.
    S,
    /// Right edge.
    E,
    /// Left edge.
    W,
    /// Top-right corner.
    Ne,
    /// Top-left corner.
    Nw,
    /// Bottom-right corner.
    Se,
    /// Bottom-left corner.
    Sw,
}

/// Which side of an axis a handle drags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The minimum edge (left for X, top for Y).
    Min,
    /// The maximum edge (right for X, bottom for Y).
    Max,
}

impl Handle {
    /// All handles: corners first, then edges.
    pub const ALL: [Self; 8] = [
        Self::Nw,
        Self::Ne,
        Self::Sw,
        Self::Se,
        Self::N,
        Self::S,
        Self::E,
        Self::W,
    ];

    /// The four corner handles.
    pub const CORNERS: [Self; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    /// The four edge handles.
    pub const EDGES: [Self; 4] = [Self::N, Self::S, Self::E, Self::W];

    /// Side of the X axis this handle drags, if any.
    #[must_use]
    pub const fn horizontal(self) -> Option<Side> {
        match self {
            Self::E | Self::Ne | Self::Se => Some(Side::Max),
            Self::W | Self::Nw | Self::Sw => Some(Side::Min),
            Self::N | Self::S => None,
        }
    }

    /// Side of the Y axis this handle drags, if any.
    #[must_use]
    pub const fn vertical(self) -> Option<Side> {
        match self {
            Self::S | Self::Se | Self::Sw => Some(Side::Max),
            Self::N | Self::Ne | Self::Nw => Some(Side::Min),
            Self::E | Self::W => None,
        }
    }

    /// Returns `true` for `e`, `ne` and `se`.
    #[must_use]
    pub const fn is_east(self) -> bool {
        matches!(self.horizontal(), Some(Side::Max))
    }

    /// Returns `true` for `w`, `nw` and `sw`.
    #[must_use]
    pub const fn is_west(self) -> bool {
        matches!(self.horizontal(), Some(Side::Min))
    }

    /// Returns `true` for `n`, `ne` and `nw`.
    #[must_use]
    pub const fn is_north(self) -> bool {
        matches!(self.vertical(), Some(Side::Min))
    }

    /// Returns `true` for `s`, `se` and `sw`.
    #[must_use]
    pub const fn is_south(self) -> bool {
        matches!(self.vertical(), Some(Side::Max))
    }

    /// Returns `true` for the four corner handles.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(self, Self::Ne | Self::Nw | Self::Se | Self::Sw)
    }

    /// The handle on the opposite side of the box, which acts as the anchor.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::S => Self::N,
            Self::E => Self::W,
            Self::W => Self::E,
            Self::Ne => Self::Sw,
            Self::Nw => Self::Se,
            Self::Se => Self::Nw,
            Self::Sw => Self::Ne,
        }
    }

    /// Position of the handle within a box, as fractions of its width and height.
    ///
    /// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right.
    #[must_use]
    pub const fn fraction(self) -> (f64, f64) {
        let fx = match self.horizontal() {
            Some(Side::Min) => 0.0,
            Some(Side::Max) => 1.0,
            None => 0.5,
        };
        let fy = match self.vertical() {
            Some(Side::Min) => 0.0,
            Some(Side::Max) => 1.0,
            None => 0.5,
        };
        (fx, fy)
    }

    /// Compass name of the handle (`"n"`, `"se"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::Ne => "ne",
            Self::Nw => "nw",
            Self::Se => "se",
            Self::Sw => "sw",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown handle name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseHandleError;

impl fmt::Display for ParseHandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of n, s, e, w, ne, nw, se, sw")
    }
}

impl core::error::Error for ParseHandleError {}

impl FromStr for Handle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|handle| handle.as_str() == s)
            .ok_or(ParseHandleError)
    }
}
