use super::*;

#[test]
fn tilt_degrees_spans_plus_minus_ten() {
    assert!((tilt_degrees(0.0) + 10.0).abs() < f64::EPSILON);
    assert!(tilt_degrees(0.5).abs() < f64::EPSILON);
    assert!(tilt_degrees(0.999_999) < 10.0);
}

#[test]
fn tilt_transform_lifts_and_rotates() {
    assert_eq!(tilt_transform(-4.5), "translateY(-10px) rotate(-4.5deg)");
}

#[test]
fn rest_transform_resets_both_axes() {
    assert_eq!(REST_TRANSFORM, "translateY(0) rotate(0)");
}
