//! Quadrant-correct inverse trigonometry and angle bookkeeping.
//!
//! Every helper here is pure: inputs are plain scalars or `[f64; 3]` vectors and the
//! result is freshly computed, so they are safe to call from any thread.

use crate::DomainError;
use crate::constants::TWO_PI;
use crate::vector::{self, Vector3};

/// Relative amount by which `|adjacent|` may exceed the hypotenuse before the inputs
/// are treated as inconsistent rather than rounding noise.
pub const QUADRANT_TOLERANCE: f64 = 1e-10;

/// Arccosine of `adjacent / hypotenuse`, reflected into `[π, 2π]` when `test < 0`.
///
/// Ratios that overshoot ±1 by less than [`QUADRANT_TOLERANCE`] (relative to the
/// hypotenuse) are clamped; larger overshoots fail with
/// [`DomainError::AdjacentExceedsHypotenuse`].
pub fn acos_quadrant_check(adjacent: f64, hypotenuse: f64, test: f64) -> Result<f64, DomainError> {
    if hypotenuse == 0.0 {
        return Err(DomainError::ZeroMagnitude {
            quantity: "hypotenuse",
        });
    }

    let mut ratio = adjacent / hypotenuse;
    if adjacent.abs() > hypotenuse.abs() {
        let excess = ((adjacent.abs() - hypotenuse.abs()) / hypotenuse).abs();
        if excess < QUADRANT_TOLERANCE {
            ratio = ratio.signum();
        } else {
            return Err(DomainError::AdjacentExceedsHypotenuse {
                adjacent,
                hypotenuse,
            });
        }
    }

    let angle = ratio.acos();
    Ok(if test < 0.0 { TWO_PI - angle } else { angle })
}

/// Wrap `angle` into `[0, max)`.
pub fn normalize_angle(angle: f64, max: f64) -> f64 {
    let wrapped = angle.rem_euclid(max);
    // rem_euclid can round up to `max` for tiny negative inputs
    if wrapped >= max { 0.0 } else { wrapped }
}

/// Wrap `angle` into `[0, 2π)`.
#[inline]
pub fn normalize_angle_2pi(angle: f64) -> f64 {
    normalize_angle(angle, TWO_PI)
}

/// Signed difference `a1 - a2`, choosing the smaller of the direct and wrap-around
/// alternatives. The result lies in `(-π, π]`.
pub fn shortest_angular_difference(a1: f64, a2: f64) -> f64 {
    let raw = normalize_angle_2pi(a1 - a2);
    let wrapped = raw - TWO_PI;
    if raw.abs() <= wrapped.abs() { raw } else { wrapped }
}

/// Unsigned angle between two vectors, in `[0, π]`.
pub fn angle_between_vectors(v1: &Vector3, v2: &Vector3) -> Result<f64, DomainError> {
    let magnitude = nonzero_norm(v1)? * nonzero_norm(v2)?;
    acos_quadrant_check(vector::dot(v1, v2), magnitude, 1.0)
}

/// Angle swept from `v1` to `v2` measured right-handed about `normal`, in `[0, 2π)`.
pub fn signed_angle_between_vectors(
    v1: &Vector3,
    v2: &Vector3,
    normal: &Vector3,
) -> Result<f64, DomainError> {
    let magnitude = nonzero_norm(v1)? * nonzero_norm(v2)?;
    let test = vector::dot(&vector::cross(v1, v2), normal);
    let angle = acos_quadrant_check(vector::dot(v1, v2), magnitude, test)?;
    Ok(normalize_angle_2pi(angle))
}

/// Component of `v` along `onto`.
pub fn projection(v: &Vector3, onto: &Vector3) -> Result<Vector3, DomainError> {
    let denom = vector::dot(onto, onto);
    if denom == 0.0 {
        return Err(DomainError::ZeroMagnitude {
            quantity: "projection axis",
        });
    }
    Ok(vector::scale(onto, vector::dot(v, onto) / denom))
}

/// Component of `v` perpendicular to `onto`.
pub fn rejection(v: &Vector3, onto: &Vector3) -> Result<Vector3, DomainError> {
    Ok(vector::sub(v, &projection(v, onto)?))
}

fn nonzero_norm(v: &Vector3) -> Result<f64, DomainError> {
    let n = vector::norm(v);
    if n == 0.0 {
        Err(DomainError::ZeroMagnitude { quantity: "vector" })
    } else {
        Ok(n)
    }
}
