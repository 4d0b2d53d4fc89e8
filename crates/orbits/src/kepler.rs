//! Two-body scalar relations (vis-viva, period, argument of latitude).

use nominal_core::DomainError;
use nominal_core::angles::normalize_angle_2pi;
use nominal_core::constants::TWO_PI;

/// True argument of latitude `ω + ν`, wrapped into `[0, 2π)`.
pub fn argument_of_latitude(arg_periapsis: f64, true_anomaly: f64) -> f64 {
    normalize_angle_2pi(arg_periapsis + true_anomaly)
}

/// Orbital speed (m/s) at radius `r` on an orbit with semi-major axis `a` (vis-viva).
pub fn orbital_velocity(
    radius_m: f64,
    semi_major_axis_m: f64,
    mu_m3_s2: f64,
) -> Result<f64, DomainError> {
    if radius_m <= 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "radius must be positive (got {radius_m} m)"
        )));
    }
    if semi_major_axis_m < 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "semi-major axis must not be negative (got {semi_major_axis_m} m)"
        )));
    }
    let radicand = 2.0 * mu_m3_s2 * (1.0 / radius_m - 1.0 / (2.0 * semi_major_axis_m));
    if radicand < 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "vis-viva radicand {radicand} is negative; radius lies beyond apoapsis"
        )));
    }
    Ok(radicand.sqrt())
}

/// Speed (m/s) of a circular orbit of radius `a`.
pub fn circular_orbit_velocity(semi_major_axis_m: f64, mu_m3_s2: f64) -> Result<f64, DomainError> {
    orbital_velocity(semi_major_axis_m, semi_major_axis_m, mu_m3_s2)
}

/// Period (s) of a closed orbit.
pub fn orbital_period(semi_major_axis_m: f64, mu_m3_s2: f64) -> Result<f64, DomainError> {
    if semi_major_axis_m <= 0.0 || mu_m3_s2 <= 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "period is undefined for a = {semi_major_axis_m} m, mu = {mu_m3_s2}"
        )));
    }
    Ok(TWO_PI * (semi_major_axis_m.powi(3) / mu_m3_s2).sqrt())
}
