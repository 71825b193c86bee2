// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framebox Interaction: drag sessions and box entities on top of
//! [`framebox_transform`].
//!
//! The transform engine is a set of pure functions. This crate holds the
//! state around it:
//!
//! - [`session`]: the pointer-down snapshot ([`session::DragSession`]) and
//!   the `Idle` / `Panning` / `Resizing` state it implies.
//! - [`FrameBox`]: one box, owning its mode, live transform and optional
//!   drag session, with pointer-down/move/up/cancel entry points.
//! - [`BoxKind`]: which modes a box offers and panel content sizes.
//! - [`Stage`]: back-to-front collection of boxes with hit testing.
//!
//! The crate does not receive input events itself. Host toolkits translate
//! their pointer events into canvas positions and, after hit testing the
//! handles with [`FrameBox::handle_at`], call into a box.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use framebox_interaction::{BoxKind, InteractionState, Stage};
//! use framebox_transform::{Handle, Mode};
//!
//! let mut stage = Stage::default();
//! let id = stage.insert(BoxKind::ScreenCapture, Size::new(1280.0, 720.0));
//! let capture = stage.get_mut(id).unwrap();
//! capture.set_mode(Mode::Crop).unwrap();
//!
//! // Grab the top-left corner of the crop window and pull it inwards.
//! let grip = capture.transform().handle_position(Handle::Nw);
//! capture.pointer_down(grip, Some(Handle::Nw));
//! assert_eq!(capture.state(), InteractionState::Resizing(Handle::Nw));
//! capture.pointer_move(grip + (100.0, 50.0));
//! capture.pointer_up();
//!
//! assert_eq!(capture.transform().crop, Rect::new(100.0, 50.0, 1280.0, 720.0));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when sessions start, end or are
//!   cancelled, on mode changes, and (at trace level) on every move.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod error;
mod frame_box;
mod kind;
pub mod session;
mod stage;

pub use error::InteractionError;
pub use frame_box::FrameBox;
pub use kind::BoxKind;
pub use session::{DragKind, DragSession, InteractionState};
pub use stage::{BoxId, Stage};
