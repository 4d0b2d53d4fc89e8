//! Validated constellation inputs.

use crate::ConfigurationError;

/// Orbit shared by every satellite before the layout spreads them out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceOrbit {
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
    pub inclination_rad: f64,
    pub raan_rad: f64,
    pub arg_periapsis_rad: f64,
    /// True anomaly of satellite 0.
    pub true_anomaly_offset_rad: f64,
}

impl ReferenceOrbit {
    /// Circular reference orbit; the other angles default to zero.
    pub fn circular(semi_major_axis_m: f64, inclination_rad: f64) -> Self {
        Self {
            semi_major_axis_m,
            eccentricity: 0.0,
            inclination_rad,
            raan_rad: 0.0,
            arg_periapsis_rad: 0.0,
            true_anomaly_offset_rad: 0.0,
        }
    }
}

/// Satellite count plus reference orbit, checked once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationParams {
    satellites: usize,
    reference: ReferenceOrbit,
}

impl ConstellationParams {
    pub fn new(satellites: usize, reference: ReferenceOrbit) -> Result<Self, ConfigurationError> {
        if satellites == 0 {
            return Err(ConfigurationError::NoSatellites);
        }
        let finite = [
            ("semi_major_axis", reference.semi_major_axis_m),
            ("eccentricity", reference.eccentricity),
            ("inclination", reference.inclination_rad),
            ("right_ascension", reference.raan_rad),
            ("argument_of_periapsis", reference.arg_periapsis_rad),
            ("true_anomaly_offset", reference.true_anomaly_offset_rad),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigurationError::NonFinite { field });
        }
        if reference.semi_major_axis_m <= 0.0 {
            return Err(ConfigurationError::InvalidSemiMajorAxis {
                value: reference.semi_major_axis_m,
            });
        }
        if reference.eccentricity < 0.0 {
            return Err(ConfigurationError::NegativeEccentricity {
                value: reference.eccentricity,
            });
        }
        Ok(Self {
            satellites,
            reference,
        })
    }

    pub fn satellites(&self) -> usize {
        self.satellites
    }

    pub fn reference(&self) -> &ReferenceOrbit {
        &self.reference
    }
}

/// Walker-Delta pattern parameters (`T/P/F` notation: satellites / planes / spacing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerDelta {
    planes: usize,
    relative_spacing: f64,
}

impl WalkerDelta {
    pub fn new(planes: usize, relative_spacing: f64) -> Result<Self, ConfigurationError> {
        if planes == 0 {
            return Err(ConfigurationError::NoPlanes);
        }
        if !relative_spacing.is_finite() {
            return Err(ConfigurationError::NonFinite {
                field: "relative_spacing",
            });
        }
        if relative_spacing < 0.0 {
            return Err(ConfigurationError::NegativeSpacing {
                value: relative_spacing,
            });
        }
        Ok(Self {
            planes,
            relative_spacing,
        })
    }

    pub fn planes(&self) -> usize {
        self.planes
    }

    pub fn relative_spacing(&self) -> f64 {
        self.relative_spacing
    }
}

impl Default for WalkerDelta {
    fn default() -> Self {
        Self {
            planes: 1,
            relative_spacing: 1.0,
        }
    }
}

/// How satellites are distributed around the reference orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutStrategy {
    /// Evenly spaced in true anomaly within a single plane.
    Coplanar,
    /// [`LayoutStrategy::Coplanar`] restricted to circular orbits.
    CoplanarCircular,
    WalkerDelta(WalkerDelta),
}

impl LayoutStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutStrategy::Coplanar => "coplanar",
            LayoutStrategy::CoplanarCircular => "coplanar_circular",
            LayoutStrategy::WalkerDelta(_) => "walker_delta",
        }
    }
}
