//! k-space sampling patterns for simulated accelerated MRI.
//!
//! * [`masking`]: random and equidistant column masks with a fully sampled
//!   calibration band.
//! * [`trajectory`]: golden-angle radial, multi-shot spiral and a fixed-size
//!   Cartesian debugging trajectory.
//! * [`config`]: serializable descriptions of both, for data pipelines.
//!
//! Every random operation has a `*_with_rng` variant taking an explicit
//! generator; the plain variants draw from the thread-local one.

pub mod config;
pub mod error;
pub mod masking;
pub mod trajectory;

#[cfg(feature = "python")]
mod bindings;

pub use config::{MaskConfig, MaskKind, TrajectoryConfig, TrajectoryKind};
pub use error::{Result, SamplingError};
pub use masking::{apply_mask, mask_equidistant, mask_random, reshape_and_broadcast, Mask};
pub use trajectory::{
    debugging_cartesian_trajectory, radial_trajectory, spiral_trajectory, SpokeBudget, Trajectory,
};
