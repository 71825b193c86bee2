// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use framebox_transform::TransformEngine;
use kurbo::{Point, Size};

use crate::{BoxKind, FrameBox, InteractionError};

/// Identifier of a box on a [`Stage`].
///
/// Ids are never reused within one stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(u64);

impl BoxId {
    /// Raw id value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// The canvas: an ordered set of independent boxes.
///
/// Boxes are kept back to front. Each box owns its transform and drag
/// session, so several boxes may be dragged at once (for example with
/// multi-touch) without affecting one another.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use framebox_interaction::{BoxKind, Stage};
///
/// let mut stage = Stage::default();
/// let below = stage.insert(BoxKind::Image, Size::new(400.0, 300.0));
/// let above = stage.insert(BoxKind::Memo, Size::new(300.0, 200.0));
///
/// // Both boxes start at the same place; the newer one is on top.
/// assert_eq!(stage.hit_test(Point::new(150.0, 150.0)), Some(above));
///
/// stage.raise(below).unwrap();
/// assert_eq!(stage.hit_test(Point::new(150.0, 150.0)), Some(below));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Stage {
    engine: TransformEngine,
    boxes: Vec<(BoxId, FrameBox)>,
    next_id: u64,
}

impl Stage {
    /// Creates an empty stage whose boxes use `engine`.
    #[must_use]
    pub fn new(engine: TransformEngine) -> Self {
        Self {
            engine,
            boxes: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if the stage holds no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Adds a new box on top showing all of `content_size`.
    pub fn insert(&mut self, kind: BoxKind, content_size: Size) -> BoxId {
        let frame_box = FrameBox::with_engine(self.engine, kind, content_size);
        self.insert_box(frame_box)
    }

    /// Adds an existing box on top.
    pub fn insert_box(&mut self, frame_box: FrameBox) -> BoxId {
        let id = BoxId(self.next_id);
        self.next_id += 1;
        self.boxes.push((id, frame_box));
        id
    }

    /// Closes a box, returning it.
    pub fn remove(&mut self, id: BoxId) -> Option<FrameBox> {
        let index = self.index_of(id)?;
        Some(self.boxes.remove(index).1)
    }

    /// Returns the box with `id`.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&FrameBox> {
        self.boxes
            .iter()
            .find(|(box_id, _)| *box_id == id)
            .map(|(_, frame_box)| frame_box)
    }

    /// Returns the box with `id` mutably.
    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut FrameBox> {
        self.boxes
            .iter_mut()
            .find(|(box_id, _)| *box_id == id)
            .map(|(_, frame_box)| frame_box)
    }

    /// Moves a box to the top of the stacking order.
    pub fn raise(&mut self, id: BoxId) -> Result<(), InteractionError> {
        let index = self.index_of(id).ok_or(InteractionError::UnknownBox(id))?;
        let entry = self.boxes.remove(index);
        self.boxes.push(entry);
        Ok(())
    }

    /// Boxes from back to front.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, &FrameBox)> + '_ {
        self.boxes.iter().map(|(id, frame_box)| (*id, frame_box))
    }

    /// Topmost box whose footprint contains `pointer`.
    #[must_use]
    pub fn hit_test(&self, pointer: Point) -> Option<BoxId> {
        self.boxes
            .iter()
            .rev()
            .find(|(_, frame_box)| frame_box.contains(pointer))
            .map(|(id, _)| *id)
    }

    fn index_of(&self, id: BoxId) -> Option<usize> {
        self.boxes.iter().position(|(box_id, _)| *box_id == id)
    }
}
