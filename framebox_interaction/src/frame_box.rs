// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use framebox_transform::{DisplayProperties, Handle, Mode, Transform, TransformEngine};
use kurbo::{Point, Size};

use crate::session::{DragKind, DragSession, InteractionState};
use crate::{BoxKind, InteractionError};

/// One box on the canvas: its kind, current mode, live transform and the
/// drag session in progress, if any.
///
/// Pointer handlers map directly onto [`FrameBox::pointer_down`],
/// [`FrameBox::pointer_move`] and [`FrameBox::pointer_up`]. Every move is
/// computed from the transform captured at pointer-down, so duplicated or
/// reordered moves with the same position produce the same transform.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use framebox_interaction::{BoxKind, FrameBox};
///
/// let mut image = FrameBox::new(BoxKind::Image, Size::new(640.0, 480.0));
/// let start = image.transform().screen_position;
///
/// image.pointer_down(Point::new(200.0, 200.0), None);
/// image.pointer_move(Point::new(230.0, 190.0));
/// image.pointer_up();
///
/// assert_eq!(image.transform().screen_position, Point::new(start.x + 30.0, start.y - 10.0));
/// ```
#[derive(Clone, Debug)]
pub struct FrameBox {
    engine: TransformEngine,
    kind: BoxKind,
    mode: Mode,
    transform: Transform,
    session: Option<DragSession>,
}

impl FrameBox {
    /// Creates a box showing all of `content_size` with the default engine.
    #[must_use]
    pub fn new(kind: BoxKind, content_size: Size) -> Self {
        Self::with_engine(TransformEngine::default(), kind, content_size)
    }

    /// Creates a box showing all of `content_size` with the given engine.
    #[must_use]
    pub fn with_engine(engine: TransformEngine, kind: BoxKind, content_size: Size) -> Self {
        let transform = engine.default_transform(content_size);
        Self::from_transform(engine, kind, transform)
    }

    /// Creates a box from an existing transform, in the kind's default mode.
    #[must_use]
    pub fn from_transform(engine: TransformEngine, kind: BoxKind, transform: Transform) -> Self {
        Self {
            engine,
            kind,
            mode: kind.default_mode(),
            transform,
            session: None,
        }
    }

    /// Kind of the box.
    #[must_use]
    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Live transform, including the effect of an active drag.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Engine used for transitions.
    #[must_use]
    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// Active drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        InteractionState::of(self.session.as_ref())
    }

    /// Renderable rectangles for the live transform.
    #[must_use]
    pub fn display_properties(&self) -> DisplayProperties {
        self.engine.display_properties(&self.transform)
    }

    /// Switches mode, committing and ending any active drag.
    ///
    /// Fails if the box kind does not offer `mode`; the box is then left
    /// untouched.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), InteractionError> {
        if !self.kind.supports(mode) {
            return Err(InteractionError::UnsupportedMode {
                kind: self.kind,
                mode,
            });
        }
        if self.mode != mode {
            self.session = None;
            self.mode = mode;
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = ?self.kind, mode = mode.as_str(), "box mode changed");
        }
        Ok(())
    }

    /// Replaces the live transform, ending any active drag.
    ///
    /// Used when the content source changes size or a placement is restored.
    pub fn set_transform(&mut self, transform: Transform) {
        self.session = None;
        self.transform = transform;
    }

    /// Starts a drag at `pointer`: on the body when `handle` is `None`,
    /// otherwise on that handle.
    ///
    /// Any session already in progress is replaced.
    pub fn pointer_down(&mut self, pointer: Point, handle: Option<Handle>) {
        let kind = DragKind::from_handle(handle);
        self.session = Some(DragSession::new(pointer, self.transform, kind));
        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = ?self.kind,
            mode = self.mode.as_str(),
            handle = ?handle,
            x = pointer.x,
            y = pointer.y,
            "drag session started"
        );
    }

    /// Applies the drag to the pointer-down snapshot and stores the result.
    ///
    /// Returns the new transform, or `None` when no drag is active.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Transform> {
        let session = self.session.as_ref()?;
        let delta = session.delta(pointer);
        let next = match session.kind {
            DragKind::Pan => self.engine.pan(self.mode, &session.base, delta),
            DragKind::Resize(handle) => {
                let handle = Some(handle);
                self.engine.drag_handle(self.mode, &session.base, delta, handle)
            }
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(dx = delta.x, dy = delta.y, scale = next.scale, "drag moved");
        self.transform = next;
        Some(next)
    }

    /// Ends the drag, keeping the current transform.
    ///
    /// Returns the committed transform, or `None` when no drag was active.
    pub fn pointer_up(&mut self) -> Option<Transform> {
        self.session.take()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = ?self.kind, "drag session ended");
        Some(self.transform)
    }

    /// Aborts the drag and restores the transform from pointer-down.
    ///
    /// Returns `true` if a drag was active.
    pub fn cancel(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.transform = session.base;
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = ?self.kind, "drag session cancelled");
        true
    }

    /// Handle whose grip is within `tolerance` of `pointer`, corners first.
    ///
    /// Handles that do nothing in the current mode are skipped: edges in
    /// [`Mode::Resize`] only scale from corners.
    #[must_use]
    pub fn handle_at(&self, pointer: Point, tolerance: f64) -> Option<Handle> {
        let tolerance2 = tolerance * tolerance;
        Handle::ALL
            .into_iter()
            .filter(|handle| self.mode != Mode::Resize || handle.is_corner())
            .find(|handle| {
                let offset = self.transform.handle_position(*handle) - pointer;
                offset.hypot2() <= tolerance2
            })
    }

    /// Returns `true` if `pointer` lies within the box footprint.
    #[must_use]
    pub fn contains(&self, pointer: Point) -> bool {
        self.transform.screen_rect().contains(pointer)
    }
}
