#![allow(clippy::float_cmp)]

use super::*;

const BOUND: u32 = 1600;

fn aspect(d: Dimensions) -> f64 {
    f64::from(d.width) / f64::from(d.height)
}

// --- Dimensions ---

#[test]
fn max_side_landscape() {
    assert_eq!(Dimensions::new(3000, 2000).max_side(), 3000);
}

#[test]
fn max_side_portrait() {
    assert_eq!(Dimensions::new(1200, 2400).max_side(), 2400);
}

#[test]
fn max_side_square() {
    assert_eq!(Dimensions::new(800, 800).max_side(), 800);
}

// --- Identity plans (source within bound) ---

#[test]
fn small_source_keeps_exact_dimensions() {
    let source = Dimensions::new(1024, 768);
    let plan = fit_within(source, BOUND);
    assert_eq!(plan.target, source);
    assert_eq!(plan.factor, 1.0);
    assert!(!plan.needs_resize());
}

#[test]
fn source_exactly_at_bound_is_identity() {
    let source = Dimensions::new(1600, 900);
    let plan = fit_within(source, BOUND);
    assert_eq!(plan.target, source);
    assert!(!plan.needs_resize());
}

#[test]
fn zero_sized_source_is_identity() {
    let source = Dimensions::new(0, 0);
    let plan = fit_within(source, BOUND);
    assert_eq!(plan.target, source);
    assert!(!plan.needs_resize());
}

// --- Downscale plans (source exceeds bound) ---

#[test]
fn oversized_landscape_bounds_width() {
    let plan = fit_within(Dimensions::new(3200, 2000), BOUND);
    assert_eq!(plan.factor, 0.5);
    assert_eq!(plan.target, Dimensions::new(1600, 1000));
    assert!(plan.needs_resize());
}

#[test]
fn oversized_portrait_bounds_height() {
    let plan = fit_within(Dimensions::new(2000, 3200), BOUND);
    assert_eq!(plan.target, Dimensions::new(1000, 1600));
}

#[test]
fn oversized_square_bounds_both_sides() {
    let plan = fit_within(Dimensions::new(4000, 4000), BOUND);
    assert_eq!(plan.target, Dimensions::new(1600, 1600));
}

#[test]
fn one_pixel_over_bound_still_shrinks() {
    let plan = fit_within(Dimensions::new(1601, 1200), BOUND);
    assert!(plan.needs_resize());
    assert_eq!(plan.target.max_side(), 1600);
    assert_eq!(plan.target, Dimensions::new(1600, 1199));
}

#[test]
fn target_max_side_equals_bound() {
    for (w, h) in [(3000, 2000), (1700, 1699), (5000, 1000), (1601, 1601)] {
        let plan = fit_within(Dimensions::new(w, h), BOUND);
        assert_eq!(plan.target.max_side(), BOUND, "source {w}x{h}");
    }
}

#[test]
fn rounding_keeps_sides_close_to_exact_scale() {
    let plan = fit_within(Dimensions::new(3000, 2000), BOUND);
    // 2000 * (1600/3000) = 1066.67, rounded up.
    assert_eq!(plan.target, Dimensions::new(1600, 1067));
}

#[test]
fn aspect_ratio_preserved_within_rounding() {
    for (w, h) in [(3543, 2480), (2480, 3543), (4032, 3024), (1920, 1081)] {
        let source = Dimensions::new(w, h);
        let plan = fit_within(source, BOUND);
        let drift = (aspect(plan.target) - aspect(source)).abs();
        // One pixel of rounding on a >=1000px side.
        assert!(drift < 2e-3, "source {w}x{h} drifted {drift}");
    }
}

#[test]
fn custom_bound_is_honored() {
    let plan = fit_within(Dimensions::new(1000, 500), 100);
    assert_eq!(plan.target, Dimensions::new(100, 50));
}
