//! Per-strategy element generation.

use std::collections::BTreeMap;

use nominal_core::DomainError;
use nominal_core::constants::TWO_PI;
use nominal_orbits::ClassicalElements;
use tracing::debug;

use crate::constellation::Constellation;
use crate::params::{ConstellationParams, LayoutStrategy, ReferenceOrbit, WalkerDelta};
use crate::{ConfigurationError, ConstellationError};

/// Lay out every satellite of the constellation as classical elements.
///
/// Indices run `0..N` in generation order. For Walker-Delta the plane count is
/// clamped to the satellite count and the relative spacing to `[0, P]`; a satellite
/// count that does not divide evenly into the planes is an error, never rounded.
pub fn generate(
    strategy: &LayoutStrategy,
    params: &ConstellationParams,
) -> Result<Constellation<ClassicalElements>, ConstellationError> {
    let constellation = match strategy {
        LayoutStrategy::Coplanar => coplanar(params),
        LayoutStrategy::CoplanarCircular => {
            let eccentricity = params.reference().eccentricity;
            if eccentricity != 0.0 {
                return Err(ConfigurationError::CircularEccentricity { eccentricity }.into());
            }
            coplanar(params)
        }
        LayoutStrategy::WalkerDelta(walker) => walker_delta(walker, params)?,
    };
    debug!(
        strategy = strategy.name(),
        satellites = constellation.len(),
        planes = constellation.planes(),
        "generated constellation elements"
    );
    Ok(constellation)
}

fn coplanar(params: &ConstellationParams) -> Constellation<ClassicalElements> {
    let n = params.satellites();
    let reference = params.reference();
    let relative_phase = TWO_PI / n as f64;
    let satellites = (0..n)
        .map(|k| {
            let true_anomaly = reference.true_anomaly_offset_rad + k as f64 * relative_phase;
            (k, elements_at(reference, reference.raan_rad, true_anomaly))
        })
        .collect();
    Constellation::new(satellites, n)
}

fn walker_delta(
    walker: &WalkerDelta,
    params: &ConstellationParams,
) -> Result<Constellation<ClassicalElements>, DomainError> {
    let n = params.satellites();
    let planes = walker.planes().min(n);
    if n % planes != 0 {
        return Err(DomainError::IndivisiblePlanes {
            satellites: n,
            planes,
        });
    }
    let reference = params.reference();
    let spacing = walker.relative_spacing().clamp(0.0, planes as f64);
    let per_plane = n / planes;

    let relative_phase = spacing * TWO_PI / n as f64;
    let relative_anomaly = TWO_PI / per_plane as f64;
    let plane_step = TWO_PI / planes as f64;

    let mut satellites = BTreeMap::new();
    for plane in 0..planes {
        let raan = plane_step * plane as f64 + reference.raan_rad;
        for slot in 0..per_plane {
            let true_anomaly = relative_phase * plane as f64
                + relative_anomaly * slot as f64
                + reference.true_anomaly_offset_rad;
            satellites.insert(
                plane * per_plane + slot,
                elements_at(reference, raan, true_anomaly),
            );
        }
    }
    Ok(Constellation::new(satellites, per_plane))
}

fn elements_at(reference: &ReferenceOrbit, raan: f64, true_anomaly: f64) -> ClassicalElements {
    ClassicalElements {
        semi_major_axis_m: reference.semi_major_axis_m,
        eccentricity: reference.eccentricity,
        inclination_rad: reference.inclination_rad,
        raan_rad: raan,
        arg_periapsis_rad: reference.arg_periapsis_rad,
        true_anomaly_rad: true_anomaly,
    }
}
