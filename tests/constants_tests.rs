// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn autoplay_speed_is_31_25_degrees_per_second() {
    let per_sec = AUTOPLAY_STEP_DEG * 1000.0 / AUTOPLAY_TICK_MS as f64;
    assert!((per_sec - 31.25).abs() < 1e-12);
}

#[test]
fn small_cylinder_is_narrower() {
    assert!(CYLINDER_WIDTH_SMALL < CYLINDER_WIDTH_LARGE);
    assert_eq!(SMALL_VIEWPORT_MAX_PX, 640.0);
}

#[test]
fn spring_is_overdamped_and_substep_is_stable() {
    let ratio = SPRING_DAMPING / (2.0 * (SPRING_STIFFNESS * SPRING_MASS).sqrt());
    assert!(ratio > 1.0);
    // Explicit damping term must stay well inside the stability bound
    assert!(SPRING_DAMPING / SPRING_MASS * SPRING_SUBSTEP_SEC < 1.0);
    assert!(SPRING_SUBSTEP_SEC < SPRING_MAX_FRAME_SEC);
}

#[test]
fn drag_threshold_is_small() {
    assert!(DRAG_THRESHOLD_PX > 0.0 && DRAG_THRESHOLD_PX < 10.0);
    assert_eq!(DRAG_FACTOR, 0.05);
}

#[test]
fn default_images_are_distinct_https_urls() {
    let unique: HashSet<&str> = DEFAULT_IMAGES.iter().copied().collect();
    assert_eq!(unique.len(), DEFAULT_IMAGES.len());
    assert!(DEFAULT_IMAGES.iter().all(|u| u.starts_with("https://")));
}
