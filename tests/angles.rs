use std::f64::consts::{FRAC_PI_2, PI};

use nominal_astro::core::DomainError;
use nominal_astro::core::angles::{
    acos_quadrant_check, angle_between_vectors, normalize_angle, normalize_angle_2pi, projection,
    rejection, shortest_angular_difference, signed_angle_between_vectors,
};
use nominal_astro::core::constants::TWO_PI;

const TOL: f64 = 1e-12;

#[test]
fn quadrant_check_clamps_rounding_overshoot() {
    let zero = acos_quadrant_check(1.0 + 1e-12, 1.0, 1.0).expect("tiny overshoot is clamped");
    assert_eq!(zero, 0.0);

    let reflected = acos_quadrant_check(1.0 + 1e-12, 1.0, -1.0).unwrap();
    assert_eq!(reflected, TWO_PI);

    let half_turn = acos_quadrant_check(-(1.0 + 1e-12), 1.0, 1.0).expect("clamped to -1");
    assert!((half_turn - PI).abs() < TOL, "expected π, got {half_turn}");
}

#[test]
fn quadrant_check_rejects_real_overshoot() {
    assert!(acos_quadrant_check(1.1, 1.0, -1.0).is_err());
    let err = acos_quadrant_check(1.1, 1.0, 1.0).unwrap_err();
    assert_eq!(
        err,
        DomainError::AdjacentExceedsHypotenuse {
            adjacent: 1.1,
            hypotenuse: 1.0
        }
    );
    assert!(matches!(
        acos_quadrant_check(0.5, 0.0, 1.0),
        Err(DomainError::ZeroMagnitude { .. })
    ));
}

#[test]
fn quadrant_check_reflects_negative_test() {
    let upper = acos_quadrant_check(0.0, 1.0, 1.0).unwrap();
    let lower = acos_quadrant_check(0.0, 1.0, -1.0).unwrap();
    assert!((upper - FRAC_PI_2).abs() < TOL);
    assert!((lower - 3.0 * FRAC_PI_2).abs() < TOL, "got {lower}");
}

#[test]
fn normalize_wraps_into_half_open_range() {
    assert!((normalize_angle_2pi(-0.5) - (TWO_PI - 0.5)).abs() < TOL);
    assert!((normalize_angle_2pi(7.0) - (7.0 - TWO_PI)).abs() < TOL);
    assert_eq!(normalize_angle_2pi(TWO_PI), 0.0);
    // rounds to the upper bound without the guard
    assert_eq!(normalize_angle_2pi(-1e-20), 0.0);
    assert!((normalize_angle(370.0, 360.0) - 10.0).abs() < TOL);
}

#[test]
fn shortest_difference_takes_the_short_way_round() {
    let forward = shortest_angular_difference(0.1, TWO_PI - 0.1);
    let backward = shortest_angular_difference(TWO_PI - 0.1, 0.1);
    assert!((forward - 0.2).abs() < 1e-9, "got {forward}");
    assert!((backward + 0.2).abs() < 1e-9, "got {backward}");
    assert!((shortest_angular_difference(PI, 0.0) - PI).abs() < TOL);
    assert_eq!(shortest_angular_difference(1.0, 1.0), 0.0);
}

#[test]
fn vector_angles() {
    let x = [1.0, 0.0, 0.0];
    let y = [0.0, 2.0, 0.0];
    assert!((angle_between_vectors(&x, &y).unwrap() - FRAC_PI_2).abs() < TOL);
    assert_eq!(angle_between_vectors(&x, &[3.0, 0.0, 0.0]).unwrap(), 0.0);

    let ccw = signed_angle_between_vectors(&x, &y, &[0.0, 0.0, 1.0]).unwrap();
    let cw = signed_angle_between_vectors(&x, &y, &[0.0, 0.0, -1.0]).unwrap();
    assert!((ccw - FRAC_PI_2).abs() < TOL);
    assert!((cw - 3.0 * FRAC_PI_2).abs() < TOL, "got {cw}");

    assert!(matches!(
        angle_between_vectors(&x, &[0.0; 3]),
        Err(DomainError::ZeroMagnitude { .. })
    ));
}

#[test]
fn projection_and_rejection_split_a_vector() {
    let v = [1.0, 2.0, 3.0];
    let axis = [0.0, 0.0, 2.0];
    assert_eq!(projection(&v, &axis).unwrap(), [0.0, 0.0, 3.0]);
    assert_eq!(rejection(&v, &axis).unwrap(), [1.0, 2.0, 0.0]);
    assert!(projection(&v, &[0.0; 3]).is_err());
}
