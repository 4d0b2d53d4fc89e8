use std::f64::consts::{FRAC_PI_2, FRAC_PI_8};

use nominal_astro::core::DomainError;
use nominal_astro::core::matrix::{self, IDENTITY, Matrix3};
use nominal_astro::core::vector::cross;
use nominal_astro::frames::kinematics::{
    euler2, euler3, mrp_to_dcm, rotate_dcm, to_dcm, up_axis_to_dcm,
};
use nominal_astro::frames::mass::{
    center_of_mass_b_to_l, center_of_mass_l_to_b, inertia_point_transform,
    inertia_prime_point_transform, moment_of_inertia_b_to_l, moment_of_inertia_l_to_b,
    moment_of_inertia_prime_l_to_b, skew_matrix,
};

const TOL: f64 = 1e-12;

fn assert_matrix_close(actual: &Matrix3, expected: &Matrix3, label: &str) {
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (actual[i][j] - expected[i][j]).abs() < TOL,
                "{label}[{i}][{j}]: expected {}, got {}",
                expected[i][j],
                actual[i][j]
            );
        }
    }
}

fn assert_vector_close(actual: &[f64; 3], expected: &[f64; 3], label: &str) {
    for i in 0..3 {
        assert!(
            (actual[i] - expected[i]).abs() < TOL,
            "{label}[{i}]: expected {}, got {}",
            expected[i],
            actual[i]
        );
    }
}

fn assert_orthonormal(dcm: &Matrix3, label: &str) {
    assert_matrix_close(&matrix::mul(dcm, &matrix::transpose(dcm)), &IDENTITY, label);
}

#[test]
fn skew_matrix_reproduces_cross_product() {
    let a = [1.0, -2.0, 3.0];
    let b = [0.5, 4.0, -1.0];
    assert_vector_close(&matrix::mul_vec(&skew_matrix(&a), &b), &cross(&a, &b), "a × b");
}

#[test]
fn parallel_axis_shift_without_rotation() {
    let shifted = inertia_point_transform(&[[0.0; 3]; 3], &IDENTITY, &[1.0, 0.0, 0.0], 2.0);
    let expected = [[0.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]];
    assert_matrix_close(&shifted, &expected, "point mass inertia");
}

#[test]
fn inertia_round_trips_between_frames() {
    let moi_l = [[1.0, 0.1, 0.0], [0.1, 2.0, 0.0], [0.0, 0.0, 3.0]];
    let dcm_lb = matrix::mul(&euler3(0.3), &euler2(0.2));
    let com_b = [0.1, 0.2, -0.3];
    let mass = 5.0;

    let moi_b = moment_of_inertia_l_to_b(&moi_l, &dcm_lb, &com_b, mass);
    let back = moment_of_inertia_b_to_l(&moi_b, &dcm_lb, &com_b, mass);
    assert_matrix_close(&back, &moi_l, "round trip");
    assert_matrix_close(&moi_b, &matrix::transpose(&moi_b), "symmetry");
}

#[test]
fn inertia_rate_from_moving_offset() {
    let zero = [[0.0; 3]; 3];
    let rate = inertia_prime_point_transform(&zero, &IDENTITY, &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], 1.0);
    let expected = [[0.0, -1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
    assert_matrix_close(&rate, &expected, "inertia rate");

    let still = moment_of_inertia_prime_l_to_b(&zero, &euler3(0.4), &[1.0, 2.0, 3.0], &[0.0; 3], 7.0);
    assert_matrix_close(&still, &zero, "static offset");
}

#[test]
fn center_of_mass_round_trips() {
    let dcm_lb = euler3(FRAC_PI_2);
    let r_lb_b = [0.0, 0.0, 5.0];
    let com_b = center_of_mass_l_to_b(&[1.0, 0.0, 0.0], &dcm_lb, &r_lb_b);
    assert_vector_close(&com_b, &[0.0, -1.0, 5.0], "com in B");

    let com_l = center_of_mass_b_to_l(&com_b, &dcm_lb, &r_lb_b);
    assert_vector_close(&com_l, &[1.0, 0.0, 0.0], "com in L");
}

#[test]
fn dcm_from_axes() {
    let dcm = to_dcm(&[2.0, 0.0, 0.0], &[0.0, 3.0, 0.0], &[0.0, 0.0, 0.5]).unwrap();
    assert_matrix_close(&dcm, &IDENTITY, "unit axes");
    assert_eq!(
        to_dcm(&[0.0; 3], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]),
        Err(DomainError::ZeroMagnitude {
            quantity: "right axis"
        })
    );
}

#[test]
fn up_axis_dcm_points_third_column_up() {
    assert_matrix_close(&up_axis_to_dcm(&[0.0, 0.0, 1.0]).unwrap(), &IDENTITY, "z up");

    let along_x = up_axis_to_dcm(&[3.0, 0.0, 0.0]).unwrap();
    let expected = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]];
    assert_matrix_close(&along_x, &expected, "x up");

    let against_x = up_axis_to_dcm(&[-1.0, 0.0, 0.0]).unwrap();
    assert_eq!([against_x[0][2], against_x[1][2], against_x[2][2]], [-1.0, 0.0, 0.0]);

    let s = 1.0 / 3.0_f64.sqrt();
    let diagonal = up_axis_to_dcm(&[1.0, 1.0, 1.0]).unwrap();
    assert_orthonormal(&diagonal, "diagonal up");
    assert_vector_close(
        &[diagonal[0][2], diagonal[1][2], diagonal[2][2]],
        &[s, s, s],
        "third column",
    );
}

#[test]
fn mrp_matches_euler_rotation() {
    assert_matrix_close(&mrp_to_dcm(&[0.0; 3]), &IDENTITY, "zero MRP");

    // quarter turn about z: sigma = tan(theta / 4) along the axis
    let quarter = mrp_to_dcm(&[0.0, 0.0, FRAC_PI_8.tan()]);
    assert_matrix_close(&quarter, &matrix::transpose(&euler3(FRAC_PI_2)), "quarter turn");
    assert_orthonormal(&mrp_to_dcm(&[0.1, -0.2, 0.3]), "arbitrary MRP");
}

#[test]
fn euler_rotations() {
    assert_vector_close(
        &matrix::mul_vec(&euler2(FRAC_PI_2), &[1.0, 0.0, 0.0]),
        &[0.0, 0.0, -1.0],
        "euler2",
    );
    assert_vector_close(
        &matrix::mul_vec(&euler3(FRAC_PI_2), &[1.0, 0.0, 0.0]),
        &[0.0, 1.0, 0.0],
        "euler3",
    );
}

#[test]
fn rotate_dcm_about_axis_in_degrees() {
    let rotated = rotate_dcm(&IDENTITY, &[0.0, 0.0, 2.0], 90.0).unwrap();
    assert_matrix_close(&rotated, &euler3(FRAC_PI_2), "about z");

    let twice = rotate_dcm(&rotated, &[0.0, 0.0, 1.0], -90.0).unwrap();
    assert_matrix_close(&twice, &IDENTITY, "undo");

    assert!(rotate_dcm(&IDENTITY, &[0.0; 3], 10.0).is_err());
}
