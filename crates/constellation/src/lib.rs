//! Constellation layout: one reference orbit fanned out into per-satellite element sets.
//!
//! Generation is an explicit two-step pipeline: [`generate`] produces an ordered
//! index → [`ClassicalElements`] mapping, and [`elements_to_states`] converts that
//! mapping into inertial state vectors when the caller needs them.

pub mod constellation;
pub mod layout;
pub mod params;

use nominal_bodies::BodyError;
use nominal_core::DomainError;
use nominal_orbits::ConversionError;
use thiserror::Error;

pub use constellation::{
    Assignment, Constellation, Variables, elements_to_states, elements_to_states_with_mu,
};
pub use layout::generate;
pub use params::{ConstellationParams, LayoutStrategy, ReferenceOrbit, WalkerDelta};

pub use nominal_orbits::{ClassicalElements, StateVector};

/// Invalid constellation parameters, rejected before any generation happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("a constellation needs at least one satellite")]
    NoSatellites,
    #[error("a Walker constellation needs at least one orbital plane")]
    NoPlanes,
    #[error("semi-major axis must be positive (got {value} m)")]
    InvalidSemiMajorAxis { value: f64 },
    #[error("eccentricity must not be negative (got {value})")]
    NegativeEccentricity { value: f64 },
    #[error("relative spacing must not be negative (got {value})")]
    NegativeSpacing { value: f64 },
    #[error("`{field}` must be finite")]
    NonFinite { field: &'static str },
    #[error("co-planar circular constellations require zero eccentricity (got {eccentricity})")]
    CircularEccentricity { eccentricity: f64 },
}

/// Any failure while generating or converting a constellation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstellationError {
    #[error("invalid constellation configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Body(#[from] BodyError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("satellite {index} is not part of the constellation")]
    UnknownSatellite { index: usize },
    #[error("`{name}` has {actual} values for {expected} satellites")]
    VariableLength {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("satellite {index}: {source}")]
    Conversion {
        index: usize,
        #[source]
        source: ConversionError,
    },
}
