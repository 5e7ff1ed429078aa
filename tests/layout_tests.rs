// Host-side tests for cylinder layout math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
}

use crate::core::constants::*;
use crate::core::layout::*;
use std::f64::consts::PI;

#[test]
fn angle_per_face_tiles_full_circle() {
    for faces in 1..=64usize {
        for class in [ViewportClass::Small, ViewportClass::Large] {
            let layout = CylinderLayout::compute(faces, class);
            let per_face = layout.angle_per_face.expect("non-empty layout");
            assert!(
                (per_face * faces as f64 - 360.0).abs() < 1e-9,
                "faces={faces} per_face={per_face}"
            );
        }
    }
}

#[test]
fn viewport_width_selects_cylinder_width() {
    for w in [0.0, 320.0, 639.9, 640.0] {
        assert_eq!(ViewportClass::from_width(w), ViewportClass::Small, "width {w}");
        assert_eq!(ViewportClass::from_width(w).cylinder_width(), 1100.0);
    }
    for w in [640.5, 641.0, 1024.0, 3840.0] {
        assert_eq!(ViewportClass::from_width(w), ViewportClass::Large, "width {w}");
        assert_eq!(ViewportClass::from_width(w).cylinder_width(), 1800.0);
    }
}

#[test]
fn radius_is_circumference_over_two_pi() {
    for class in [ViewportClass::Small, ViewportClass::Large] {
        let layout = CylinderLayout::compute(10, class);
        assert_eq!(layout.radius, layout.cylinder_width / (2.0 * PI));
        // Same inputs, same output
        assert_eq!(layout, CylinderLayout::compute(10, class));
    }
    assert_eq!(
        CylinderLayout::compute(3, ViewportClass::Large).radius,
        CYLINDER_WIDTH_LARGE / (2.0 * PI)
    );
}

#[test]
fn zero_faces_yield_no_transforms() {
    let layout = CylinderLayout::compute(0, ViewportClass::Large);
    assert_eq!(layout.angle_per_face, None);
    assert_eq!(layout.face_angle(0), None);
    assert_eq!(layout.face_transform(0), None);
    assert!(layout.face_transforms().is_empty());
    assert!(layout.radius.is_finite());
}

#[test]
fn face_transform_rotates_then_pushes_out() {
    let layout = CylinderLayout::compute(10, ViewportClass::Large);
    assert_eq!(
        layout.face_transform(0).as_deref(),
        Some(format!("rotateY(0deg) translateZ({}px)", layout.radius).as_str())
    );
    assert_eq!(
        layout.face_transform(3).as_deref(),
        Some(format!("rotateY(108deg) translateZ({}px)", layout.radius).as_str())
    );
    assert_eq!(layout.face_transform(10), None);
    assert_eq!(layout.face_transforms().len(), 10);
}

#[test]
fn face_angles_are_evenly_spaced_in_order() {
    let layout = CylinderLayout::compute(7, ViewportClass::Small);
    let angles: Vec<f64> = (0..7).filter_map(|i| layout.face_angle(i)).collect();
    assert_eq!(angles.len(), 7);
    for pair in angles.windows(2) {
        assert!((pair[1] - pair[0] - 360.0 / 7.0).abs() < 1e-9);
    }
}

#[test]
fn transform_strings_match_css_syntax() {
    assert_eq!(cylinder_transform(0.0), "rotate3d(0, 1, 0, 0deg)");
    assert_eq!(cylinder_transform(-12.5), "rotate3d(0, 1, 0, -12.5deg)");
    let layout = CylinderLayout::compute(4, ViewportClass::Small);
    assert_eq!(
        layout.transform_origin(),
        format!("50% 50% -{}px", 1100.0 / (2.0 * PI))
    );
}
