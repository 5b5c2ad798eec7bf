// Host-side tests for tuning constants and their relationships.

use rain_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_well_formed() {
    assert!(GRID_SIZE_MIN < GRID_SIZE_MAX);
    assert!(DISTORT_MIN < DISTORT_MAX);
    assert!(BLUR_MIN < BLUR_MAX);
    assert!(BLUR_MIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn initial_values_sit_where_expected() {
    assert!((GRID_SIZE_MIN..=GRID_SIZE_MAX).contains(&INITIAL_GRID_SIZE));
    assert!((DISTORT_MIN..=DISTORT_MAX).contains(&INITIAL_DISTORT));
    // blur starts above its drag range; the first drag pulls it in
    assert!(INITIAL_BLUR > BLUR_MAX);
    assert_eq!(INITIAL_TIME, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gains_and_step_are_positive() {
    assert!(GRID_SIZE_PER_PX > 0.0);
    assert!(DISTORT_PER_PX > 0.0);
    assert!(BLUR_PER_PX > 0.0);
    assert!(BLUR_PER_PX < DISTORT_PER_PX);
    assert!(TIME_STEP > 0.0);
    assert_eq!(TickMode::default(), TickMode::Fixed(TIME_STEP));
}

#[test]
fn info_text_mentions_both_axes() {
    assert!(INFO_TEXT.starts_with("Drag mouse left button:"));
    assert!(INFO_TEXT.contains("Horizontally"));
    assert!(INFO_TEXT.contains("Vertically"));
    assert_eq!(INFO_TEXT.lines().count(), 3);
}
