//! Orbit utilities: classical elements, state vectors, and the conversions between them.
//!
//! Primitive entry points take the gravitational parameter directly (`*_with_mu`);
//! the body-name variants resolve `mu` through [`nominal_bodies`] first.

pub mod conversion;
pub mod elements;
pub mod geodetic;
pub mod kepler;

use nominal_bodies::BodyError;
use nominal_core::DomainError;
use thiserror::Error;

pub use conversion::{
    ECCENTRICITY_TOLERANCE, NODE_TOLERANCE, elements_to_state, perifocal_state,
    perifocal_to_inertial, perifocal_to_inertial_dcm, semi_latus_rectum_to_state,
    semi_latus_rectum_to_state_deg, semi_latus_rectum_to_state_with_mu, semi_major_axis_to_state,
    semi_major_axis_to_state_deg, semi_major_axis_to_state_with_mu, state_to_elements,
    state_to_elements_detailed, state_to_elements_with_mu,
};
pub use elements::{ClassicalElements, OrbitKind, StateVector};
pub use kepler::{argument_of_latitude, circular_orbit_velocity, orbital_period, orbital_velocity};

/// Failure converting between element sets and state vectors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Body(#[from] BodyError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
