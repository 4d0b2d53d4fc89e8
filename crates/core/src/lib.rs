//! Core units, constants, and shared primitives for the Nominal Astro workspace.

pub mod angles;

use thiserror::Error;

/// Geometric or numeric input that cannot produce a meaningful result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("the adjacent side ({adjacent}) is greater than the hypotenuse ({hypotenuse})")]
    AdjacentExceedsHypotenuse { adjacent: f64, hypotenuse: f64 },
    #[error("{quantity} has zero magnitude")]
    ZeroMagnitude { quantity: &'static str },
    #[error(
        "orbit with eccentricity {eccentricity} is parabolic; the semi-major axis is undefined, use the semi-latus rectum instead"
    )]
    ParabolicOrbit { eccentricity: f64 },
    #[error("eccentricity {eccentricity} is negative")]
    NegativeEccentricity { eccentricity: f64 },
    #[error("{satellites} satellites cannot be divided evenly into {planes} planes")]
    IndivisiblePlanes { satellites: usize, planes: usize },
    #[error("{0}")]
    InvalidInput(String),
}

/// Physical and mathematical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    use std::f64::consts::PI;

    /// Full rotation in radians.
    pub const TWO_PI: f64 = 2.0 * PI;
    /// Degrees to radians.
    pub const D2R: f64 = PI / 180.0;
    /// Radians to degrees.
    pub const R2D: f64 = 180.0 / PI;
    /// rad/s to revolutions per minute.
    pub const RPM: f64 = 0.104_719_755_119_659_77;
    /// Days per second.
    pub const SEC2DAY: f64 = 1.0 / 86_400.0;
    /// Universal gravitational constant (m³/kg/s²).
    pub const G: f64 = 6.672_59e-11;
    /// Astronomical unit (m).
    pub const AU: f64 = 149_597_870_693.0;
    /// Speed of light in vacuum (m/s).
    pub const LIGHT_SPEED: f64 = 299_792_458.0;
    /// Kelvin offset of 0 °C.
    pub const CELSIUS_TO_KELVIN: f64 = 273.15;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }

    /// Focal length (mm) of a camera with a square sensor of `area_mm2` and a full
    /// field of view of `fov_deg`.
    pub fn focal_length_mm(area_mm2: f64, fov_deg: f64) -> f64 {
        area_mm2.sqrt() / (2.0 * (fov_deg.to_radians() / 2.0).tan())
    }

    /// Bytes to whole bits; fractional bits are truncated.
    pub fn bytes_to_bits(bytes: f64) -> Result<u64, crate::DomainError> {
        Ok((checked_size(bytes, "bytes")? * 8.0) as u64)
    }

    /// Kilobytes (1024 bytes) to whole bytes.
    pub fn kilobytes_to_bytes(kilobytes: f64) -> Result<u64, crate::DomainError> {
        Ok((checked_size(kilobytes, "kilobytes")? * 1024.0) as u64)
    }

    pub fn megabytes_to_bytes(megabytes: f64) -> Result<u64, crate::DomainError> {
        kilobytes_to_bytes(checked_size(megabytes, "megabytes")? * 1024.0)
    }

    pub fn gigabytes_to_bytes(gigabytes: f64) -> Result<u64, crate::DomainError> {
        megabytes_to_bytes(checked_size(gigabytes, "gigabytes")? * 1024.0)
    }

    pub fn kilobytes_to_bits(kilobytes: f64) -> Result<u64, crate::DomainError> {
        bytes_to_bits(kilobytes_to_bytes(kilobytes)? as f64)
    }

    pub fn megabytes_to_bits(megabytes: f64) -> Result<u64, crate::DomainError> {
        bytes_to_bits(megabytes_to_bytes(megabytes)? as f64)
    }

    pub fn gigabytes_to_bits(gigabytes: f64) -> Result<u64, crate::DomainError> {
        bytes_to_bits(gigabytes_to_bytes(gigabytes)? as f64)
    }

    fn checked_size(value: f64, unit: &str) -> Result<f64, crate::DomainError> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(crate::DomainError::InvalidInput(format!(
                "{unit} must be a non-negative finite number (got {value})"
            )))
        }
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres or m/s depending on context.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Right-handed cross product `a × b`.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }
}

/// Row-major 3×3 matrix helpers.
pub mod matrix {
    use super::vector::{Vector3, dot};

    pub type Matrix3 = [[f64; 3]; 3];

    pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    /// Matrix-vector product `m · v`.
    #[inline]
    pub fn mul_vec(m: &Matrix3, v: &Vector3) -> Vector3 {
        [dot(&m[0], v), dot(&m[1], v), dot(&m[2], v)]
    }

    /// Matrix product `a · b`.
    pub fn mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        out
    }

    pub fn transpose(m: &Matrix3) -> Matrix3 {
        [
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ]
    }

    pub fn add(a: &Matrix3, b: &Matrix3) -> Matrix3 {
        let mut out = *a;
        for (row, other) in out.iter_mut().zip(b) {
            for (cell, rhs) in row.iter_mut().zip(other) {
                *cell += rhs;
            }
        }
        out
    }

    pub fn sub(a: &Matrix3, b: &Matrix3) -> Matrix3 {
        add(a, &scale(b, -1.0))
    }

    pub fn scale(m: &Matrix3, s: f64) -> Matrix3 {
        m.map(|row| row.map(|cell| cell * s))
    }
}
