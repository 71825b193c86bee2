// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framebox Transform: the geometry engine behind draggable, resizable and
//! croppable boxes on a 2D canvas.
//!
//! Every box (a screen capture, an image, a memo panel, a clock) shows a crop
//! window of some content, scaled and placed somewhere on the canvas. This
//! crate models that placement as a [`Transform`] and provides pure
//! transitions on [`TransformEngine`] that map a base transform and a pointer
//! delta to the next transform:
//! - Panning: move the box, or scroll the content under it.
//! - Resizing: scale the whole box from a corner, anchored at the opposite one.
//! - Cropping: move the crop window's edges, clamped to the content.
//! - Content resizing: grow or shrink the content itself (for panel-like boxes).
//!
//! It does **not** capture input or render anything. Callers are expected to:
//! - Snapshot the transform at pointer-down and pass it as the base on every move.
//! - Compute deltas from the pointer-down position, not from the previous move.
//! - Turn [`DisplayProperties`] into positioned, clipped visual elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use framebox_transform::{Handle, Mode, TransformEngine};
//!
//! let engine = TransformEngine::default();
//! let base = engine.default_transform(Size::new(800.0, 600.0));
//!
//! // Pull the left edge of the crop window 200px to the right.
//! let next = engine.drag_handle(Mode::Crop, &base, Vec2::new(200.0, 0.0), Some(Handle::W));
//! assert_eq!(next.crop, Rect::new(200.0, 0.0, 800.0, 600.0));
//!
//! // The box moved with the edge, so the rest of the picture stays put.
//! assert_eq!(next.screen_position.x, base.screen_position.x + 200.0);
//!
//! let props = next.display_properties();
//! assert_eq!(props.container.width(), 600.0);
//! assert_eq!(props.content.x0, -200.0);
//! ```
//!
//! ## Invariants
//!
//! For valid inputs every transition keeps the crop inside the content and
//! keeps the box at least [`EngineConfig::min_size`] on screen. Numeric
//! edge cases saturate through [`adjust`] instead of failing. Non-finite
//! deltas and non-positive scales are outside the contract.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod display;
mod engine;
mod handle;
mod mode;
mod transform;

pub use config::{ConfigError, EngineConfig};
pub use display::DisplayProperties;
pub use engine::{TransformEngine, adjust};
pub use handle::{Handle, ParseHandleError, Side};
pub use mode::Mode;
pub use transform::{Transform, TransformDebugInfo};
