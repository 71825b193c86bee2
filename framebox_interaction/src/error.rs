// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use framebox_transform::Mode;

use crate::{BoxId, BoxKind};

/// Failure of a box or stage operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionError {
    /// The box kind does not offer the requested mode.
    UnsupportedMode {
        /// Kind of the box.
        kind: BoxKind,
        /// Requested mode.
        mode: Mode,
    },
    /// No box with this id is on the stage.
    UnknownBox(BoxId),
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedMode { kind, mode } => {
                write!(f, "{kind:?} boxes do not support {} mode", mode.as_str())
            }
            Self::UnknownBox(id) => write!(f, "no box with id {} on the stage", id.get()),
        }
    }
}

impl core::error::Error for InteractionError {}
