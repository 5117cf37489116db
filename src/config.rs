//! Serializable descriptions of a sampling pattern.
//!
//! These are what a data pipeline stores in its settings: which mask or
//! trajectory to draw and with which factors. Both kinds parse from the
//! short names used on the command line (`"random"`, `"spiral"`, ...).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplingError};
use crate::masking::{mask_equidistant_with_rng, mask_random_with_rng, Mask};
use crate::trajectory::{
    debugging_cartesian_trajectory, radial_trajectory, radial_trajectory_len, spiral_trajectory,
    spiral_trajectory_len, Trajectory, DEBUG_TRAJECTORY_LEN, DEFAULT_NUM_REVOLUTIONS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    Random,
    Equidistant,
}

impl FromStr for MaskKind {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(MaskKind::Random),
            "equidistant" => Ok(MaskKind::Equidistant),
            _ => Err(SamplingError::UnknownKind {
                kind: "mask",
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskKind::Random => write!(f, "random"),
            MaskKind::Equidistant => write!(f, "equidistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    pub kind: MaskKind,
    pub accel_factor: usize,
    #[serde(default)]
    pub multicoil: bool,
    #[serde(default)]
    pub slice_different: bool,
}

impl MaskConfig {
    pub fn new(kind: MaskKind, accel_factor: usize) -> Self {
        Self {
            kind,
            accel_factor,
            multicoil: false,
            slice_different: false,
        }
    }

    pub fn generate(&self, kspace_shape: &[usize]) -> Result<Mask> {
        self.generate_with_rng(kspace_shape, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, kspace_shape: &[usize], rng: &mut R) -> Result<Mask> {
        match self.kind {
            MaskKind::Random => mask_random_with_rng(
                kspace_shape,
                self.accel_factor,
                self.multicoil,
                self.slice_different,
                rng,
            ),
            MaskKind::Equidistant => mask_equidistant_with_rng(
                kspace_shape,
                self.accel_factor,
                self.multicoil,
                self.slice_different,
                rng,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryKind {
    Radial,
    Spiral,
    DebuggingCartesian,
}

impl FromStr for TrajectoryKind {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "radial" => Ok(TrajectoryKind::Radial),
            "spiral" => Ok(TrajectoryKind::Spiral),
            "debugging_cartesian" | "debug" => Ok(TrajectoryKind::DebuggingCartesian),
            _ => Err(SamplingError::UnknownKind {
                kind: "trajectory",
                name: s.to_string(),
            }),
        }
    }
}

fn default_num_revolutions() -> usize {
    DEFAULT_NUM_REVOLUTIONS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    pub kind: TrajectoryKind,
    #[serde(default)]
    pub af: Option<usize>,
    #[serde(default)]
    pub us: Option<f64>,
    #[serde(default = "default_num_revolutions")]
    pub num_revolutions: usize,
}

impl TrajectoryConfig {
    pub fn new(kind: TrajectoryKind, af: Option<usize>, us: Option<f64>) -> Self {
        Self {
            kind,
            af,
            us,
            num_revolutions: DEFAULT_NUM_REVOLUTIONS,
        }
    }

    /// Sample count `M` of the `[1, 2, M]` trajectory for `image_shape`.
    ///
    /// The debugging trajectory ignores the image shape and factors.
    pub fn expected_len(&self, image_shape: &[usize]) -> Result<usize> {
        match self.kind {
            TrajectoryKind::Radial => radial_trajectory_len(image_shape, self.af, self.us),
            TrajectoryKind::Spiral => {
                spiral_trajectory_len(image_shape, self.af, self.us, self.num_revolutions)
            }
            TrajectoryKind::DebuggingCartesian => Ok(DEBUG_TRAJECTORY_LEN),
        }
    }

    pub fn generate(&self, image_shape: &[usize]) -> Result<Trajectory> {
        match self.kind {
            TrajectoryKind::Radial => radial_trajectory(image_shape, self.af, self.us),
            TrajectoryKind::Spiral => {
                spiral_trajectory(image_shape, self.af, self.us, self.num_revolutions)
            }
            TrajectoryKind::DebuggingCartesian => debugging_cartesian_trajectory(),
        }
    }
}
