//! Classical elements ↔ inertial state vectors.
//!
//! The forward path builds the state in the perifocal frame from the conic equations
//! and rotates it with the closed-form 3-1-3 (Ω, i, ω) matrix. The semi-latus-rectum
//! entry point never divides by `1 - e²`, so it covers circular through hyperbolic
//! orbits, parabolic included.
//!
//! The inverse path splits on whether the node vector and the eccentricity vanish;
//! each branch only divides by quantities that are nonzero in that branch.

use nominal_bodies::get_mu;
use nominal_core::DomainError;
use nominal_core::angles::acos_quadrant_check;
use nominal_core::matrix::{self, Matrix3};
use nominal_core::vector::{self, Vector3};

use crate::ConversionError;
use crate::elements::{ClassicalElements, OrbitKind, StateVector};

/// Eccentricities below this are treated as circular by [`state_to_elements`].
pub const ECCENTRICITY_TOLERANCE: f64 = 1e-10;
/// Node magnitudes below this fraction of `|h|` are treated as equatorial.
pub const NODE_TOLERANCE: f64 = 1e-10;

/// Rotation taking perifocal (PQW) coordinates into the planet-centred inertial frame.
pub fn perifocal_to_inertial_dcm(raan: f64, inclination: f64, arg_periapsis: f64) -> Matrix3 {
    let (s_raan, c_raan) = raan.sin_cos();
    let (s_inc, c_inc) = inclination.sin_cos();
    let (s_aop, c_aop) = arg_periapsis.sin_cos();
    [
        [
            c_aop * c_raan - s_aop * c_inc * s_raan,
            -s_aop * c_raan - c_aop * c_inc * s_raan,
            s_raan * s_inc,
        ],
        [
            c_aop * s_raan + s_aop * c_inc * c_raan,
            c_aop * c_inc * c_raan - s_aop * s_raan,
            -c_raan * s_inc,
        ],
        [s_aop * s_inc, c_aop * s_inc, c_inc],
    ]
}

/// Position and velocity in the perifocal frame for a conic with semi-latus rectum `p`.
pub fn perifocal_state(
    semi_latus_rectum_m: f64,
    eccentricity: f64,
    true_anomaly: f64,
    mu_m3_s2: f64,
) -> Result<StateVector, DomainError> {
    let p = semi_latus_rectum_m;
    if !(p.is_finite() && p > 0.0) {
        return Err(DomainError::InvalidInput(format!(
            "semi-latus rectum must be positive and finite (got {p})"
        )));
    }
    if eccentricity < 0.0 {
        return Err(DomainError::NegativeEccentricity { eccentricity });
    }
    if !(mu_m3_s2.is_finite() && mu_m3_s2 > 0.0) {
        return Err(DomainError::InvalidInput(format!(
            "gravitational parameter must be positive (got {mu_m3_s2})"
        )));
    }

    let (sin_nu, cos_nu) = true_anomaly.sin_cos();
    let denom = 1.0 + eccentricity * cos_nu;
    if denom <= 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "true anomaly {true_anomaly} rad is unreachable for eccentricity {eccentricity}"
        )));
    }

    let speed = (mu_m3_s2 / p).sqrt();
    Ok(StateVector {
        position_m: [p * cos_nu / denom, p * sin_nu / denom, 0.0],
        velocity_m_s: [-speed * sin_nu, speed * (eccentricity + cos_nu), 0.0],
    })
}

/// Rotate a perifocal state into the inertial frame.
pub fn perifocal_to_inertial(
    perifocal: &StateVector,
    raan: f64,
    inclination: f64,
    arg_periapsis: f64,
) -> StateVector {
    let dcm = perifocal_to_inertial_dcm(raan, inclination, arg_periapsis);
    StateVector {
        position_m: matrix::mul_vec(&dcm, &perifocal.position_m),
        velocity_m_s: matrix::mul_vec(&dcm, &perifocal.velocity_m_s),
    }
}

/// State vector from the semi-latus rectum; valid for every conic including parabolic.
pub fn semi_latus_rectum_to_state_with_mu(
    semi_latus_rectum_m: f64,
    eccentricity: f64,
    inclination: f64,
    raan: f64,
    arg_periapsis: f64,
    true_anomaly: f64,
    mu_m3_s2: f64,
) -> Result<StateVector, DomainError> {
    let perifocal = perifocal_state(semi_latus_rectum_m, eccentricity, true_anomaly, mu_m3_s2)?;
    Ok(perifocal_to_inertial(
        &perifocal,
        raan,
        inclination,
        arg_periapsis,
    ))
}

/// [`semi_latus_rectum_to_state_with_mu`] with `mu` looked up by body name.
pub fn semi_latus_rectum_to_state(
    semi_latus_rectum_m: f64,
    eccentricity: f64,
    inclination: f64,
    raan: f64,
    arg_periapsis: f64,
    true_anomaly: f64,
    body: &str,
) -> Result<StateVector, ConversionError> {
    let mu = get_mu(body)?;
    Ok(semi_latus_rectum_to_state_with_mu(
        semi_latus_rectum_m,
        eccentricity,
        inclination,
        raan,
        arg_periapsis,
        true_anomaly,
        mu,
    )?)
}

/// Degree-input variant of [`semi_latus_rectum_to_state`].
pub fn semi_latus_rectum_to_state_deg(
    semi_latus_rectum_m: f64,
    eccentricity: f64,
    inclination_deg: f64,
    raan_deg: f64,
    arg_periapsis_deg: f64,
    true_anomaly_deg: f64,
    body: &str,
) -> Result<StateVector, ConversionError> {
    semi_latus_rectum_to_state(
        semi_latus_rectum_m,
        eccentricity,
        inclination_deg.to_radians(),
        raan_deg.to_radians(),
        arg_periapsis_deg.to_radians(),
        true_anomaly_deg.to_radians(),
        body,
    )
}

/// State vector from classical elements with an explicit `mu`.
///
/// Parabolic orbits (`e == 1`) are rejected because `a` is undefined; use
/// [`semi_latus_rectum_to_state_with_mu`] for those.
pub fn semi_major_axis_to_state_with_mu(
    semi_major_axis_m: f64,
    eccentricity: f64,
    inclination: f64,
    raan: f64,
    arg_periapsis: f64,
    true_anomaly: f64,
    mu_m3_s2: f64,
) -> Result<StateVector, DomainError> {
    let elements = ClassicalElements {
        semi_major_axis_m,
        eccentricity,
        inclination_rad: inclination,
        raan_rad: raan,
        arg_periapsis_rad: arg_periapsis,
        true_anomaly_rad: true_anomaly,
    };
    elements_to_state(&elements, mu_m3_s2)
}

/// [`semi_major_axis_to_state_with_mu`] with `mu` looked up by body name.
pub fn semi_major_axis_to_state(
    semi_major_axis_m: f64,
    eccentricity: f64,
    inclination: f64,
    raan: f64,
    arg_periapsis: f64,
    true_anomaly: f64,
    body: &str,
) -> Result<StateVector, ConversionError> {
    let mu = get_mu(body)?;
    Ok(semi_major_axis_to_state_with_mu(
        semi_major_axis_m,
        eccentricity,
        inclination,
        raan,
        arg_periapsis,
        true_anomaly,
        mu,
    )?)
}

/// Degree-input variant of [`semi_major_axis_to_state`].
pub fn semi_major_axis_to_state_deg(
    semi_major_axis_m: f64,
    eccentricity: f64,
    inclination_deg: f64,
    raan_deg: f64,
    arg_periapsis_deg: f64,
    true_anomaly_deg: f64,
    body: &str,
) -> Result<StateVector, ConversionError> {
    semi_major_axis_to_state(
        semi_major_axis_m,
        eccentricity,
        inclination_deg.to_radians(),
        raan_deg.to_radians(),
        arg_periapsis_deg.to_radians(),
        true_anomaly_deg.to_radians(),
        body,
    )
}

/// Convert an element record to an inertial state.
pub fn elements_to_state(
    elements: &ClassicalElements,
    mu_m3_s2: f64,
) -> Result<StateVector, DomainError> {
    let p = elements.semi_latus_rectum_m()?;
    semi_latus_rectum_to_state_with_mu(
        p,
        elements.eccentricity,
        elements.inclination_rad,
        elements.raan_rad,
        elements.arg_periapsis_rad,
        elements.true_anomaly_rad,
        mu_m3_s2,
    )
}

/// Classical elements from an inertial state, with `mu` looked up by body name.
pub fn state_to_elements(
    position_m: &Vector3,
    velocity_m_s: &Vector3,
    body: &str,
) -> Result<ClassicalElements, ConversionError> {
    let mu = get_mu(body)?;
    Ok(state_to_elements_with_mu(position_m, velocity_m_s, mu)?)
}

/// Classical elements from an inertial state with an explicit `mu`.
pub fn state_to_elements_with_mu(
    position_m: &Vector3,
    velocity_m_s: &Vector3,
    mu_m3_s2: f64,
) -> Result<ClassicalElements, DomainError> {
    state_to_elements_detailed(position_m, velocity_m_s, mu_m3_s2).map(|(elements, _)| elements)
}

/// Classical elements plus the degenerate-orbit branch that produced them.
pub fn state_to_elements_detailed(
    position_m: &Vector3,
    velocity_m_s: &Vector3,
    mu_m3_s2: f64,
) -> Result<(ClassicalElements, OrbitKind), DomainError> {
    if !(mu_m3_s2.is_finite() && mu_m3_s2 > 0.0) {
        return Err(DomainError::InvalidInput(format!(
            "gravitational parameter must be positive (got {mu_m3_s2})"
        )));
    }
    let r = position_m;
    let v = velocity_m_s;
    let mu = mu_m3_s2;

    let r_mag = vector::norm(r);
    if r_mag == 0.0 {
        return Err(DomainError::ZeroMagnitude {
            quantity: "position",
        });
    }
    let v_sq = vector::dot(v, v);
    let r_dot_v = vector::dot(r, v);

    let h = vector::cross(r, v);
    let h_mag = vector::norm(&h);
    if h_mag == 0.0 {
        return Err(DomainError::ZeroMagnitude {
            quantity: "angular momentum",
        });
    }

    // K × H with K = (0, 0, 1)
    let node = [-h[1], h[0], 0.0];
    let node_mag = vector::norm(&node);

    let ecc = vector::scale(
        &vector::sub(
            &vector::scale(r, v_sq - mu / r_mag),
            &vector::scale(v, r_dot_v),
        ),
        1.0 / mu,
    );
    let e = vector::norm(&ecc);

    let energy = 0.5 * v_sq - mu / r_mag;
    if (e - 1.0).abs() < f64::EPSILON || energy == 0.0 {
        return Err(DomainError::ParabolicOrbit { eccentricity: e });
    }
    let semi_major_axis_m = -mu / (2.0 * energy);
    let inclination_rad = (h[2] / h_mag).clamp(-1.0, 1.0).acos();

    let equatorial = node_mag <= NODE_TOLERANCE * h_mag;
    let circular = e < ECCENTRICITY_TOLERANCE;

    let (kind, eccentricity, raan_rad, arg_periapsis_rad, true_anomaly_rad) =
        match (equatorial, circular) {
            (true, true) => {
                let true_longitude = acos_quadrant_check(r[0], r_mag, r[1])?;
                (OrbitKind::CircularEquatorial, 0.0, 0.0, 0.0, true_longitude)
            }
            (true, false) => {
                let longitude_of_periapsis = acos_quadrant_check(ecc[0], e, ecc[1])?;
                let true_anomaly = acos_quadrant_check(vector::dot(&ecc, r), e * r_mag, r_dot_v)?;
                (
                    OrbitKind::EllipticalEquatorial,
                    e,
                    0.0,
                    longitude_of_periapsis,
                    true_anomaly,
                )
            }
            (false, true) => {
                let raan = acos_quadrant_check(node[0], node_mag, node[1])?;
                let argument_of_latitude =
                    acos_quadrant_check(vector::dot(&node, r), node_mag * r_mag, r[2])?;
                (
                    OrbitKind::CircularInclined,
                    0.0,
                    raan,
                    0.0,
                    argument_of_latitude,
                )
            }
            (false, false) => {
                let raan = acos_quadrant_check(node[0], node_mag, node[1])?;
                let arg_periapsis =
                    acos_quadrant_check(vector::dot(&node, &ecc), node_mag * e, ecc[2])?;
                let true_anomaly = acos_quadrant_check(vector::dot(&ecc, r), e * r_mag, r_dot_v)?;
                (OrbitKind::General, e, raan, arg_periapsis, true_anomaly)
            }
        };

    Ok((
        ClassicalElements {
            semi_major_axis_m,
            eccentricity,
            inclination_rad,
            raan_rad,
            arg_periapsis_rad,
            true_anomaly_rad,
        },
        kind,
    ))
}
