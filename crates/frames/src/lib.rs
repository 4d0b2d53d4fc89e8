//! Reference-frame helpers shared by spacecraft models.
//!
//! Frame labels used in names: `L` is a component (local) frame, `B` the spacecraft
//! body frame. A `dcm_lb` maps B-frame components into the L frame.

pub mod kinematics;
pub mod mass;

pub use kinematics::{euler2, euler3, mrp_to_dcm, rotate_dcm, to_dcm, up_axis_to_dcm};
pub use mass::skew_matrix;
