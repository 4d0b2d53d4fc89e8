//! Parallel-axis transforms for inertia tensors and centre-of-mass vectors.

use nominal_core::matrix::{self, Matrix3};
use nominal_core::vector::{self, Vector3};

/// Cross-product matrix: `skew_matrix(a) · b == a × b`.
pub fn skew_matrix(v: &Vector3) -> Matrix3 {
    [[0.0, -v[2], v[1]], [v[2], 0.0, -v[0]], [-v[1], v[0], 0.0]]
}

/// Re-express a rank-2 tensor in a new frame: `dcmᵀ · T · dcm`.
pub fn tensor_transform(tensor: &Matrix3, dcm: &Matrix3) -> Matrix3 {
    matrix::mul(&matrix::transpose(dcm), &matrix::mul(tensor, dcm))
}

/// Inertia about the centre of mass, rotated by `dcm` and shifted to a point offset by `position`.
pub fn inertia_point_transform(
    inertia: &Matrix3,
    dcm: &Matrix3,
    position: &Vector3,
    mass_kg: f64,
) -> Matrix3 {
    let parallel = tensor_transform(inertia, dcm);
    let r_tilde = skew_matrix(position);
    matrix::sub(&parallel, &matrix::scale(&matrix::mul(&r_tilde, &r_tilde), mass_kg))
}

/// Undo [`inertia_point_transform`]: shift back to the centre of mass, then rotate by `dcm`.
pub fn inertia_inverse_point_transform(
    inertia: &Matrix3,
    dcm: &Matrix3,
    position: &Vector3,
    mass_kg: f64,
) -> Matrix3 {
    let r_tilde = skew_matrix(position);
    let parallel = matrix::add(inertia, &matrix::scale(&matrix::mul(&r_tilde, &r_tilde), mass_kg));
    tensor_transform(&parallel, dcm)
}

/// Time derivative of [`inertia_point_transform`] for an offset moving at `position_dot`.
pub fn inertia_prime_point_transform(
    inertia_prime: &Matrix3,
    dcm: &Matrix3,
    position: &Vector3,
    position_dot: &Vector3,
    mass_kg: f64,
) -> Matrix3 {
    let parallel = tensor_transform(inertia_prime, dcm);
    let r_tilde = skew_matrix(position);
    let r_tilde_dot = skew_matrix(position_dot);
    let coupling = matrix::add(
        &matrix::mul(&r_tilde_dot, &r_tilde),
        &matrix::mul(&r_tilde, &r_tilde_dot),
    );
    matrix::sub(&parallel, &matrix::scale(&coupling, mass_kg))
}

/// Component inertia (L frame, about its own centre of mass) expressed in the B frame
/// about a point `com_b` (B frame) away.
pub fn moment_of_inertia_l_to_b(
    moi_l: &Matrix3,
    dcm_lb: &Matrix3,
    com_b: &Vector3,
    mass_kg: f64,
) -> Matrix3 {
    inertia_point_transform(moi_l, dcm_lb, com_b, mass_kg)
}

/// Inverse of [`moment_of_inertia_l_to_b`].
pub fn moment_of_inertia_b_to_l(
    moi_b: &Matrix3,
    dcm_lb: &Matrix3,
    com_b: &Vector3,
    mass_kg: f64,
) -> Matrix3 {
    inertia_inverse_point_transform(moi_b, &matrix::transpose(dcm_lb), com_b, mass_kg)
}

/// Inertia rate (kg·m²/s) from the L frame into the B frame.
pub fn moment_of_inertia_prime_l_to_b(
    moi_prime_l: &Matrix3,
    dcm_lb: &Matrix3,
    com_b: &Vector3,
    com_dot_b: &Vector3,
    mass_kg: f64,
) -> Matrix3 {
    inertia_prime_point_transform(moi_prime_l, dcm_lb, com_b, com_dot_b, mass_kg)
}

/// Centre of mass given in L coordinates, expressed in B given the L origin `r_lb_b`.
pub fn center_of_mass_l_to_b(com_l: &Vector3, dcm_lb: &Matrix3, r_lb_b: &Vector3) -> Vector3 {
    let com_offset_b = matrix::mul_vec(&matrix::transpose(dcm_lb), com_l);
    vector::add(&com_offset_b, r_lb_b)
}

/// Inverse of [`center_of_mass_l_to_b`].
pub fn center_of_mass_b_to_l(com_b: &Vector3, dcm_lb: &Matrix3, r_lb_b: &Vector3) -> Vector3 {
    matrix::mul_vec(dcm_lb, &vector::sub(com_b, r_lb_b))
}
