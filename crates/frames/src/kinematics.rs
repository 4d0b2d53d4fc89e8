//! Direction cosine matrix construction.

use nominal_core::DomainError;
use nominal_core::matrix::{self, Matrix3};
use nominal_core::vector::{self, Vector3};

const ALIGNMENT_TOLERANCE: f64 = 1e-15;

/// DCM whose columns are the normalised `right`, `forward` and `up` axes.
pub fn to_dcm(right: &Vector3, forward: &Vector3, up: &Vector3) -> Result<Matrix3, DomainError> {
    let r = unit(right, "right axis")?;
    let f = unit(forward, "forward axis")?;
    let u = unit(up, "up axis")?;
    Ok([[r[0], f[0], u[0]], [r[1], f[1], u[1]], [r[2], f[2], u[2]]])
}

/// DCM whose third column points along `up`.
pub fn up_axis_to_dcm(up: &Vector3) -> Result<Matrix3, DomainError> {
    let up = unit(up, "up axis")?;
    let x_axis = [1.0, 0.0, 0.0];
    let y_axis = [0.0, 1.0, 0.0];
    let z_axis = [0.0, 0.0, 1.0];

    let check = vector::dot(&x_axis, &up);
    if check >= 1.0 - ALIGNMENT_TOLERANCE {
        return to_dcm(&vector::scale(&z_axis, -1.0), &y_axis, &x_axis);
    }
    if check <= -1.0 + ALIGNMENT_TOLERANCE {
        return to_dcm(&z_axis, &y_axis, &vector::scale(&x_axis, -1.0));
    }

    let forward = vector::cross(&up, &x_axis);
    let right = vector::cross(&forward, &up);
    to_dcm(&right, &forward, &up)
}

/// Modified Rodrigues Parameters to DCM.
pub fn mrp_to_dcm(sigma: &Vector3) -> Matrix3 {
    let [q1, q2, q3] = *sigma;
    let d1 = vector::dot(sigma, sigma);
    let s = 1.0 - d1;
    let d = (1.0 + d1) * (1.0 + d1);
    let c = [
        [
            4.0 * (2.0 * q1 * q1 - d1) + s * s,
            8.0 * q1 * q2 + 4.0 * q3 * s,
            8.0 * q1 * q3 - 4.0 * q2 * s,
        ],
        [
            8.0 * q2 * q1 - 4.0 * q3 * s,
            4.0 * (2.0 * q2 * q2 - d1) + s * s,
            8.0 * q2 * q3 + 4.0 * q1 * s,
        ],
        [
            8.0 * q3 * q1 + 4.0 * q2 * s,
            8.0 * q3 * q2 - 4.0 * q1 * s,
            4.0 * (2.0 * q3 * q3 - d1) + s * s,
        ],
    ];
    matrix::scale(&c, 1.0 / d)
}

/// Rotation about the Y axis.
pub fn euler2(angle_rad: f64) -> Matrix3 {
    let (s, c) = angle_rad.sin_cos();
    [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]]
}

/// Rotation about the Z axis.
pub fn euler3(angle_rad: f64) -> Matrix3 {
    let (s, c) = angle_rad.sin_cos();
    [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]
}

/// Pre-multiply `dcm` by a rotation of `angle_deg` degrees about `axis`.
pub fn rotate_dcm(dcm: &Matrix3, axis: &Vector3, angle_deg: f64) -> Result<Matrix3, DomainError> {
    let [x, y, z] = unit(axis, "rotation axis")?;
    let (s, c) = angle_deg.to_radians().sin_cos();
    let t = 1.0 - c;
    let rotation = [
        [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
        [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
        [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
    ];
    Ok(matrix::mul(&rotation, dcm))
}

fn unit(v: &Vector3, quantity: &'static str) -> Result<Vector3, DomainError> {
    let n = vector::norm(v);
    if n == 0.0 {
        return Err(DomainError::ZeroMagnitude { quantity });
    }
    Ok(vector::scale(v, 1.0 / n))
}
