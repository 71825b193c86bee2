// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// Tunables shared by every transition of a [`crate::TransformEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    min_size: f64,
    default_screen_position: Point,
}

impl EngineConfig {
    /// Smallest on-screen box dimension, in pixels, used by [`Default`].
    pub const DEFAULT_MIN_SIZE: f64 = 100.0;

    /// Canvas position of freshly created boxes, used by [`Default`].
    pub const DEFAULT_SCREEN_POSITION: Point = Point::new(100.0, 100.0);

    /// Returns the minimum box dimension.
    ///
    /// Crop and resize transitions compare it against on-screen sizes, so in
    /// content space the floor is `min_size / scale`. Content resizing compares
    /// it against the content size directly.
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Returns the canvas position given to new transforms.
    #[must_use]
    pub fn default_screen_position(&self) -> Point {
        self.default_screen_position
    }

    /// Replaces the minimum box dimension.
    ///
    /// The value must be finite and strictly positive.
    pub fn with_min_size(mut self, min_size: f64) -> Result<Self, ConfigError> {
        if !min_size.is_finite() {
            return Err(ConfigError::NonFiniteMinSize);
        }
        if min_size <= 0.0 {
            return Err(ConfigError::NonPositiveMinSize);
        }
        self.min_size = min_size;
        Ok(self)
    }

    /// Replaces the canvas position given to new transforms.
    pub fn with_default_screen_position(mut self, position: Point) -> Result<Self, ConfigError> {
        if !position.is_finite() {
            return Err(ConfigError::NonFinitePosition);
        }
        self.default_screen_position = position;
        Ok(self)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_size: Self::DEFAULT_MIN_SIZE,
            default_screen_position: Self::DEFAULT_SCREEN_POSITION,
        }
    }
}

/// Rejected [`EngineConfig`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The minimum size was zero or negative.
    NonPositiveMinSize,
    /// The minimum size was NaN or infinite.
    NonFiniteMinSize,
    /// The default screen position had a NaN or infinite coordinate.
    NonFinitePosition,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveMinSize => f.write_str("minimum size must be greater than zero"),
            Self::NonFiniteMinSize => f.write_str("minimum size must be finite"),
            Self::NonFinitePosition => f.write_str("default screen position must be finite"),
        }
    }
}

impl core::error::Error for ConfigError {}
