// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the pointer-down snapshot every move is computed against.
//!
//! ## Usage
//!
//! 1) On pointer-down, create a [`DragSession`] with the pointer position and
//!    the box's current transform.
//! 2) On each move, compute [`DragSession::delta`] and apply the transition to
//!    [`DragSession::base`], never to the result of the previous move.
//! 3) On pointer-up, drop the session.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use framebox_interaction::session::{DragKind, DragSession};
//! use framebox_transform::Transform;
//!
//! let base = Transform::new(Size::new(400.0, 300.0));
//! let session = DragSession::new(Point::new(10.0, 20.0), base, DragKind::Pan);
//!
//! assert_eq!(session.delta(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//! // Deltas are always measured from the start, whatever happened in between.
//! assert_eq!(session.delta(Point::new(12.0, 18.0)), Vec2::new(2.0, -2.0));
//! ```

use framebox_transform::{Handle, Transform};
use kurbo::{Point, Vec2};

/// What a drag session manipulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragKind {
    /// Dragging the box body.
    Pan,
    /// Dragging one of the handles.
    Resize(Handle),
}

impl DragKind {
    /// Kind for a pointer-down on `handle`, or on the body when `None`.
    #[must_use]
    pub fn from_handle(handle: Option<Handle>) -> Self {
        match handle {
            Some(handle) => Self::Resize(handle),
            None => Self::Pan,
        }
    }

    /// The grabbed handle, if any.
    #[must_use]
    pub fn handle(self) -> Option<Handle> {
        match self {
            Self::Pan => None,
            Self::Resize(handle) => Some(handle),
        }
    }
}

/// Snapshot taken at pointer-down, alive until pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position at pointer-down.
    pub start_pointer: Point,
    /// Transform at pointer-down.
    pub base: Transform,
    /// Whether the body or a handle was grabbed.
    pub kind: DragKind,
}

impl DragSession {
    /// Starts a session at `start_pointer` over `base`.
    #[must_use]
    pub fn new(start_pointer: Point, base: Transform, kind: DragKind) -> Self {
        Self {
            start_pointer,
            base,
            kind,
        }
    }

    /// Offset of `pointer` from the start position.
    #[must_use]
    pub fn delta(&self, pointer: Point) -> Vec2 {
        pointer - self.start_pointer
    }
}

/// Observable interaction state of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No pointer is held on the box.
    #[default]
    Idle,
    /// The body is being dragged.
    Panning,
    /// A handle is being dragged.
    Resizing(Handle),
}

impl InteractionState {
    /// State implied by an optional session.
    #[must_use]
    pub fn of(session: Option<&DragSession>) -> Self {
        match session.map(|s| s.kind) {
            None => Self::Idle,
            Some(DragKind::Pan) => Self::Panning,
            Some(DragKind::Resize(handle)) => Self::Resizing(handle),
        }
    }

    /// Returns `true` unless idle.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }
}
