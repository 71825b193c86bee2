// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavioral properties of the `framebox_transform` engine.
//!
//! These sweep every handle and mode over a set of representative transforms
//! and destructive deltas, checking the size floor, crop containment, anchor
//! points and the display projection.

use framebox_transform::{EngineConfig, Handle, Mode, Transform, TransformEngine};
use kurbo::{Point, Rect, Size, Vec2};

const EPS: f64 = 1e-9;

fn bases() -> Vec<Transform> {
    vec![
        Transform::new(Size::new(400.0, 300.0)),
        Transform {
            crop: Rect::from_origin_size((100.0, 50.0), (400.0, 300.0)),
            screen_position: Point::new(-40.0, 25.0),
            scale: 1.0,
            content_size: Size::new(800.0, 600.0),
        },
        Transform {
            crop: Rect::from_origin_size((64.0, 32.0), (256.0, 128.0)),
            screen_position: Point::new(300.0, 300.0),
            scale: 2.0,
            content_size: Size::new(1920.0, 1080.0),
        },
        Transform {
            crop: Rect::from_origin_size((0.0, 0.0), (1280.0, 720.0)),
            screen_position: Point::new(0.0, 0.0),
            scale: 0.5,
            content_size: Size::new(1280.0, 720.0),
        },
    ]
}

fn deltas() -> Vec<Vec2> {
    let mut out = Vec::new();
    for dx in [-5000.0, -250.0, -37.5, 0.0, 12.0, 180.0, 5000.0] {
        for dy in [-5000.0, -90.0, 0.0, 45.5, 5000.0] {
            out.push(Vec2::new(dx, dy));
        }
    }
    out
}

fn assert_contained(t: &Transform, context: &str) {
    assert!(t.crop.x0 >= -EPS, "{context}: crop.x0 = {}", t.crop.x0);
    assert!(t.crop.y0 >= -EPS, "{context}: crop.y0 = {}", t.crop.y0);
    assert!(
        t.crop.x1 <= t.content_size.width + EPS,
        "{context}: crop.x1 = {} > {}",
        t.crop.x1,
        t.content_size.width
    );
    assert!(
        t.crop.y1 <= t.content_size.height + EPS,
        "{context}: crop.y1 = {} > {}",
        t.crop.y1,
        t.content_size.height
    );
}

#[test]
fn zero_delta_is_identity_for_every_mode_and_handle() {
    let engine = TransformEngine::default();
    for base in bases() {
        // Content resizing assumes the crop already covers the whole content.
        let full_crop = base.crop == base.content_size.to_rect();
        for mode in Mode::ALL {
            if mode == Mode::ResizeContent && !full_crop {
                continue;
            }
            assert_eq!(engine.pan(mode, &base, Vec2::ZERO), base, "pan {mode:?}");
            for handle in Handle::ALL {
                let next = engine.drag_handle(mode, &base, Vec2::ZERO, Some(handle));
                assert_eq!(next, base, "{mode:?} {handle}");
            }
            let next = engine.drag_handle(mode, &base, Vec2::new(30.0, 30.0), None);
            assert_eq!(next, base, "{mode:?} without handle");
        }
    }
}

#[test]
fn crop_transitions_keep_min_size_and_containment() {
    let engine = TransformEngine::default();
    let min = engine.config().min_size();
    for base in bases() {
        for delta in deltas() {
            for handle in Handle::ALL {
                let t = engine.handle_drag_on_crop(&base, delta, Some(handle));
                let context = format!("crop {handle} {delta:?}");
                assert!(
                    t.crop.width() >= min / t.scale - EPS,
                    "{context}: width {}",
                    t.crop.width()
                );
                assert!(
                    t.crop.height() >= min / t.scale - EPS,
                    "{context}: height {}",
                    t.crop.height()
                );
                assert_contained(&t, &context);
                assert_eq!(t.scale, base.scale, "{context}");
                assert_eq!(t.content_size, base.content_size, "{context}");
            }
            let t = engine.content_drag_on_crop(&base, delta);
            assert_contained(&t, &format!("pan {delta:?}"));
            assert!((t.crop.width() - base.crop.width()).abs() < EPS, "pan keeps width");
            assert!((t.crop.height() - base.crop.height()).abs() < EPS, "pan keeps height");
        }
    }
}

#[test]
fn crop_keeps_the_opposite_edge_fixed_on_screen() {
    let engine = TransformEngine::default();
    for base in bases() {
        for delta in deltas() {
            for handle in Handle::ALL {
                let t = engine.handle_drag_on_crop(&base, delta, Some(handle));
                let before = base.screen_rect();
                let after = t.screen_rect();
                if handle.is_west() {
                    assert!((after.x1 - before.x1).abs() < 1e-6, "{handle} {delta:?}");
                }
                if handle.is_north() {
                    assert!((after.y1 - before.y1).abs() < 1e-6, "{handle} {delta:?}");
                }
                if handle.is_east() {
                    assert_eq!(after.x0, before.x0, "{handle} {delta:?}");
                }
                if handle.is_south() {
                    assert_eq!(after.y0, before.y0, "{handle} {delta:?}");
                }
            }
        }
    }
}

#[test]
fn resize_keeps_min_size_and_leaves_crop_alone() {
    let engine = TransformEngine::default();
    let min = engine.config().min_size();
    for base in bases() {
        for delta in deltas() {
            for handle in Handle::CORNERS {
                let t = engine.handle_drag_on_resize(&base, delta, Some(handle));
                let size = t.display_size();
                assert!(size.width >= min - 1e-6, "{handle} {delta:?}: {size:?}");
                assert!(size.height >= min - 1e-6, "{handle} {delta:?}: {size:?}");
                assert!(t.scale > 0.0, "{handle} {delta:?}");
                assert_eq!(t.crop, base.crop, "{handle} {delta:?}");
                assert_contained(&t, &format!("resize {handle} {delta:?}"));
            }
        }
    }
}

#[test]
fn resize_anchors_the_opposite_corner() {
    let engine = TransformEngine::default();
    for base in bases() {
        for delta in deltas() {
            let t = engine.handle_drag_on_resize(&base, delta, Some(Handle::Se));
            assert_eq!(t.screen_position, base.screen_position, "se {delta:?}");

            let t = engine.handle_drag_on_resize(&base, delta, Some(Handle::Nw));
            let scale_delta = t.scale - base.scale;
            let expected = Point::new(
                base.screen_position.x - base.crop.width() * scale_delta,
                base.screen_position.y - base.crop.height() * scale_delta,
            );
            assert!(
                (t.screen_position - expected).hypot() < 1e-6,
                "nw {delta:?}: {:?} vs {expected:?}",
                t.screen_position
            );

            for handle in Handle::CORNERS {
                let t = engine.handle_drag_on_resize(&base, delta, Some(handle));
                let anchor = handle.opposite();
                let moved = t.handle_position(anchor) - base.handle_position(anchor);
                assert!(moved.hypot() < 1e-6, "{handle} {delta:?}: anchor moved {moved:?}");
            }
        }
    }
}

#[test]
fn resize_content_keeps_min_size_and_full_crop() {
    let engine = TransformEngine::default();
    let min = engine.config().min_size();
    let base = Transform::new(Size::new(320.0, 240.0));
    for delta in deltas() {
        for handle in Handle::ALL {
            let t = engine.handle_drag_on_resize_content(&base, delta, Some(handle));
            assert!(t.content_size.width >= min, "{handle} {delta:?}");
            assert!(t.content_size.height >= min, "{handle} {delta:?}");
            assert_eq!(t.crop, t.content_size.to_rect(), "{handle} {delta:?}");
            assert_eq!(t.scale, base.scale, "{handle} {delta:?}");
            assert_contained(&t, &format!("resize-content {handle} {delta:?}"));

            let anchor = handle.opposite();
            let moved = t.handle_position(anchor) - base.handle_position(anchor);
            if handle.horizontal().is_some() {
                assert!(moved.x.abs() < EPS, "{handle} {delta:?}: {moved:?}");
            }
            if handle.vertical().is_some() {
                assert!(moved.y.abs() < EPS, "{handle} {delta:?}: {moved:?}");
            }
        }
    }
}

#[test]
fn display_projection_maps_crop_corners_to_container_corners() {
    let engine = TransformEngine::default();
    for base in bases() {
        for delta in deltas() {
            for handle in Handle::ALL {
                let t = engine.handle_drag_on_crop(&base, delta, Some(handle));
                let props = engine.display_properties(&t);
                let top_left = props.content_to_container(t.crop.origin());
                let bottom_right = props.content_to_container(Point::new(t.crop.x1, t.crop.y1));
                assert!(top_left.to_vec2().hypot() < 1e-6, "{top_left:?}");
                assert!(
                    (bottom_right.x - t.crop.width() * t.scale).abs() < 1e-6
                        && (bottom_right.y - t.crop.height() * t.scale).abs() < 1e-6,
                    "{bottom_right:?}"
                );
                assert_eq!(props.container.origin(), t.screen_position);
            }
        }
    }
}

#[test]
fn moves_from_a_frozen_base_do_not_drift() {
    let engine = TransformEngine::default();
    let base = bases()[1];
    let target = Vec2::new(73.25, -41.5);

    // Incremental application of many small steps versus a single jump from the base.
    let direct = engine.handle_drag_on_crop(&base, target, Some(Handle::Sw));
    let mut replayed = None;
    for step in 1..=200_u32 {
        let fraction = f64::from(step) / 200.0;
        let next = engine.handle_drag_on_crop(&base, target * fraction, Some(Handle::Sw));
        // Duplicate delivery of the same move is harmless.
        let again = engine.handle_drag_on_crop(&base, target * fraction, Some(Handle::Sw));
        assert_eq!(next, again, "step {step}");
        replayed = Some(next);
    }
    assert_eq!(replayed, Some(direct));
}

#[test]
fn custom_min_size_is_honored() {
    let config = EngineConfig::default().with_min_size(24.0).unwrap();
    let engine = TransformEngine::new(config);
    let base = Transform::new(Size::new(200.0, 200.0));
    let t = engine.handle_drag_on_crop(&base, Vec2::new(-1000.0, -1000.0), Some(Handle::Se));
    assert_eq!(t.crop, Rect::new(0.0, 0.0, 24.0, 24.0));
    let t = engine.handle_drag_on_resize(&base, Vec2::new(-1000.0, -1000.0), Some(Handle::Se));
    assert!((t.scale - 24.0 / 200.0).abs() < EPS, "scale was {}", t.scale);
}
