use super::*;

#[test]
fn ease_in_out_quad_hits_endpoints_and_midpoint() {
    let easing = Easing::EaseInOutQuad;
    assert_eq!(easing.transform(0.0), 0.0);
    assert_eq!(easing.transform(0.5), 0.5);
    assert_eq!(easing.transform(1.0), 1.0);
    assert_eq!(easing.transform(0.25), 0.125);
    assert_eq!(easing.transform(0.75), 0.875);
}

#[test]
fn ease_in_out_quad_is_monotonic() {
    let easing = Easing::EaseInOutQuad;
    let mut previous = easing.interpolate(0, 0.0, 100.0, 260);
    for elapsed in 1..=300 {
        let value = easing.interpolate(elapsed, 0.0, 100.0, 260);
        assert!(
            value >= previous,
            "value dropped from {previous} to {value} at {elapsed}ms"
        );
        previous = value;
    }
}

#[test]
fn interpolate_matches_endpoints_exactly() {
    for easing in [Easing::LinearEasing, Easing::EaseInOutQuad] {
        assert_eq!(easing.interpolate(0, 12.5, 40.0, 260), 12.5);
        assert_eq!(easing.interpolate(260, 12.5, 40.0, 260), 40.0);
        assert_eq!(easing.interpolate(10_000, 12.5, 40.0, 260), 40.0);
    }
}

#[test]
fn zero_duration_jumps_to_target() {
    assert_eq!(Easing::EaseInOutQuad.interpolate(0, 0.0, 100.0, 0), 100.0);
}

#[test]
fn linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
    assert_eq!(Easing::LinearEasing.transform(1.5), 1.0);
}

#[test]
fn default_easing_is_quadratic_in_out() {
    assert_eq!(Easing::default(), Easing::EaseInOutQuad);
}
