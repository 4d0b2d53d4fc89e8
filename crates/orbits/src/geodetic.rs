//! Planet-centred planet-fixed (PCPF) ↔ geodetic latitude/longitude/altitude.

use nominal_bodies::get_property;
use nominal_core::DomainError;
use nominal_core::vector::{self, Vector3};

use crate::ConversionError;

const MAX_ITERATIONS: usize = 10;
const ALTITUDE_CONVERGENCE_M: f64 = 0.01;

/// Geodetic `[latitude rad, longitude rad, altitude m]` of a PCPF position on the named body.
pub fn pcpf_to_geodetic_lla(position_m: &Vector3, body: &str) -> Result<Vector3, ConversionError> {
    let (req, flattening) = ellipsoid(body)?;
    Ok(pcpf_to_geodetic_lla_with_ellipsoid(
        position_m, req, flattening,
    )?)
}

/// Degree-output variant of [`pcpf_to_geodetic_lla`]; altitude stays in metres.
pub fn pcpf_to_geodetic_lla_deg(
    position_m: &Vector3,
    body: &str,
) -> Result<Vector3, ConversionError> {
    let lla = pcpf_to_geodetic_lla(position_m, body)?;
    Ok([lla[0].to_degrees(), lla[1].to_degrees(), lla[2]])
}

/// Iterative ellipsoidal inversion for an explicit equatorial radius and flattening.
pub fn pcpf_to_geodetic_lla_with_ellipsoid(
    position_m: &Vector3,
    equatorial_radius_m: f64,
    flattening: f64,
) -> Result<Vector3, DomainError> {
    if vector::norm(position_m) == 0.0 {
        return Ok([0.0, 0.0, 0.0]);
    }
    let [x, y, z] = *position_m;
    let a = equatorial_radius_m;
    let f = flattening;
    let e_sq = 2.0 * f - f * f;

    let longitude = y.atan2(x);
    let p = x.hypot(y);

    let mut altitude = 0.0;
    let mut latitude = z.atan2(p * (1.0 - e_sq));
    let mut n = prime_vertical_radius(a, e_sq, latitude);
    let mut delta_h = f64::INFINITY;
    let mut iterations = 0;

    while delta_h > ALTITUDE_CONVERGENCE_M && iterations < MAX_ITERATIONS {
        let previous = altitude;
        latitude = z.atan2(p * (1.0 - e_sq * (n / (n + altitude))));
        if latitude.is_nan() {
            return Err(DomainError::InvalidInput(
                "geodetic latitude iteration produced NaN".to_string(),
            ));
        }
        n = prime_vertical_radius(a, e_sq, latitude);
        altitude = if latitude.cos() < 1e-10 {
            z.abs() - a * (1.0 - f)
        } else {
            p / latitude.cos() - n
        };
        delta_h = (altitude - previous).abs();
        iterations += 1;
    }

    Ok([latitude, longitude, altitude])
}

/// PCPF position (m) of a geodetic `[latitude rad, longitude rad, altitude m]` on the named body.
pub fn geodetic_lla_to_pcpf(lla: &Vector3, body: &str) -> Result<Vector3, ConversionError> {
    let (req, flattening) = ellipsoid(body)?;
    Ok(geodetic_lla_to_pcpf_with_ellipsoid(lla, req, flattening))
}

/// Degree-input variant of [`geodetic_lla_to_pcpf`]; altitude stays in metres.
pub fn geodetic_lla_to_pcpf_deg(lla_deg: &Vector3, body: &str) -> Result<Vector3, ConversionError> {
    geodetic_lla_to_pcpf(
        &[lla_deg[0].to_radians(), lla_deg[1].to_radians(), lla_deg[2]],
        body,
    )
}

pub fn geodetic_lla_to_pcpf_with_ellipsoid(
    lla: &Vector3,
    equatorial_radius_m: f64,
    flattening: f64,
) -> Vector3 {
    let [lat, lon, alt] = *lla;
    let e_sq = flattening * (2.0 - flattening);
    let n = prime_vertical_radius(equatorial_radius_m, e_sq, lat);
    [
        (n + alt) * lat.cos() * lon.cos(),
        (n + alt) * lat.cos() * lon.sin(),
        ((1.0 - e_sq) * n + alt) * lat.sin(),
    ]
}

fn prime_vertical_radius(equatorial_radius_m: f64, e_sq: f64, latitude: f64) -> f64 {
    equatorial_radius_m / (1.0 - e_sq * latitude.sin().powi(2)).sqrt()
}

fn ellipsoid(body: &str) -> Result<(f64, f64), ConversionError> {
    Ok((get_property(body, "REQ")?, get_property(body, "FLATTENING")?))
}
