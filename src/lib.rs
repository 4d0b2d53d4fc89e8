//! Astrodynamics core: body constants, orbit conversions, constellation layout,
//! and mass/frame transforms.
//!
//! Each concern lives in its own workspace crate; this crate re-exports them under
//! short names so front-ends and tests depend on a single package.

pub use nominal_bodies as bodies;
pub use nominal_config as config;
pub use nominal_constellation as constellation;
pub use nominal_core as core;
pub use nominal_export as export;
pub use nominal_frames as frames;
pub use nominal_orbits as orbits;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
