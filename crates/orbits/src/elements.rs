//! Classical element and state-vector records.

use nominal_core::DomainError;
use nominal_core::angles::normalize_angle_2pi;
use nominal_core::vector::Vector3;
use serde::{Deserialize, Serialize};

/// Classical (Keplerian) orbital elements. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassicalElements {
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
    pub inclination_rad: f64,
    /// Right ascension of the ascending node.
    pub raan_rad: f64,
    pub arg_periapsis_rad: f64,
    pub true_anomaly_rad: f64,
}

impl ClassicalElements {
    /// Build elements from angles given in degrees.
    pub fn from_degrees(
        semi_major_axis_m: f64,
        eccentricity: f64,
        inclination_deg: f64,
        raan_deg: f64,
        arg_periapsis_deg: f64,
        true_anomaly_deg: f64,
    ) -> Self {
        Self {
            semi_major_axis_m,
            eccentricity,
            inclination_rad: inclination_deg.to_radians(),
            raan_rad: raan_deg.to_radians(),
            arg_periapsis_rad: arg_periapsis_deg.to_radians(),
            true_anomaly_rad: true_anomaly_deg.to_radians(),
        }
    }

    /// `p = a (1 - e²)`. Undefined for parabolic orbits.
    pub fn semi_latus_rectum_m(&self) -> Result<f64, DomainError> {
        let e = self.eccentricity;
        if e < 0.0 {
            return Err(DomainError::NegativeEccentricity { eccentricity: e });
        }
        if e == 1.0 {
            return Err(DomainError::ParabolicOrbit { eccentricity: e });
        }
        Ok(self.semi_major_axis_m * (1.0 - e * e))
    }

    /// True argument of latitude `ω + ν`, wrapped into `[0, 2π)`.
    pub fn argument_of_latitude_rad(&self) -> f64 {
        normalize_angle_2pi(self.arg_periapsis_rad + self.true_anomaly_rad)
    }
}

/// Position (m) and velocity (m/s) in a planet-centred inertial frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub position_m: Vector3,
    pub velocity_m_s: Vector3,
}

/// Which branch of the state-to-elements inversion produced an element set.
///
/// The branch decides which angles are meaningful; the others are reported as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitKind {
    /// RAAN and argument of periapsis are zero; the true-anomaly slot holds the true longitude.
    CircularEquatorial,
    /// RAAN is zero; the argument-of-periapsis slot holds the longitude of periapsis.
    EllipticalEquatorial,
    /// Argument of periapsis is zero; the true-anomaly slot holds the argument of latitude.
    CircularInclined,
    General,
}

impl OrbitKind {
    pub fn name(&self) -> &'static str {
        match self {
            OrbitKind::CircularEquatorial => "circular_equatorial",
            OrbitKind::EllipticalEquatorial => "elliptical_equatorial",
            OrbitKind::CircularInclined => "circular_inclined",
            OrbitKind::General => "general",
        }
    }
}
