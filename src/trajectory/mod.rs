//! # Non-Cartesian k-space trajectories
//!
//! Every generator returns a `[1, 2, M]` array of k-space coordinates in
//! radians. `M` only depends on the image shape and the sampling factors,
//! so it can be queried up front with the matching `*_len` function and is
//! checked again once the coordinates are built.

pub mod cartesian;
pub mod radial;
pub mod spiral;

use std::f64::consts::PI;

use ndarray::{Array2, Array3, Axis};

use crate::error::{Result, SamplingError};

pub use self::cartesian::{
    debugging_cartesian_trajectory, debugging_cartesian_trajectory_with_rng, DEBUG_TRAJECTORY_LEN,
};
pub use self::radial::{golden_angle, radial_trajectory, radial_trajectory_len};
pub use self::spiral::{spiral_trajectory, spiral_trajectory_len, DEFAULT_NUM_REVOLUTIONS};

/// `[1, 2, M]` coordinate array.
pub type Trajectory = Array3<f32>;

/// How many spokes (or shots) a trajectory gets.
///
/// Built from exactly one of an acceleration factor or an undersampling
/// factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpokeBudget {
    Acceleration(usize),
    Undersampling(f64),
}

impl SpokeBudget {
    pub fn from_factors(af: Option<usize>, us: Option<f64>) -> Result<Self> {
        match (af, us) {
            (Some(_), Some(_)) => Err(SamplingError::BothFactorsSet),
            (None, None) => Err(SamplingError::NoFactorSet),
            (Some(0), None) => Err(SamplingError::InvalidAccelFactor(0)),
            (Some(af), None) => Ok(SpokeBudget::Acceleration(af)),
            (None, Some(us)) if us.is_finite() && us > 0.0 => Ok(SpokeBudget::Undersampling(us)),
            (None, Some(us)) => Err(SamplingError::InvalidUndersampling(us)),
        }
    }

    /// Spoke count for an image of `width` columns.
    ///
    /// `theta_max` is the angle swept by a single spoke: 1 for radial lines,
    /// `2π · revolutions` for spirals. It only matters for undersampling.
    pub fn num_spokes(&self, width: usize, theta_max: f64) -> Result<usize> {
        let nspokes = match *self {
            SpokeBudget::Acceleration(af) => width / af,
            SpokeBudget::Undersampling(us) => {
                let spokes = (width as f64 * PI / (2.0 * us * theta_max)).floor();
                if !spokes.is_finite() || spokes >= usize::MAX as f64 {
                    return Err(SamplingError::TooManySamples {
                        spokes,
                        samples_per_spoke: 1,
                    });
                }
                spokes as usize
            }
        };
        if nspokes == 0 {
            return Err(SamplingError::NoSpokes { width });
        }
        Ok(nspokes)
    }
}

/// Total sample count `nspokes * samples_per_spoke`, or an error if the
/// `[2, M]` coordinate buffer could not be addressed.
pub(crate) fn sample_count(nspokes: usize, samples_per_spoke: usize) -> Result<usize> {
    let max_len = isize::MAX as usize / (2 * std::mem::size_of::<f32>());
    nspokes
        .checked_mul(samples_per_spoke)
        .filter(|&len| len <= max_len)
        .ok_or(SamplingError::TooManySamples {
            spokes: nspokes as f64,
            samples_per_spoke,
        })
}

/// `(spokelength, width)` taken from the two trailing axes of an image shape.
pub(crate) fn image_dims(image_shape: &[usize]) -> Result<(usize, usize)> {
    match *image_shape {
        [.., spokelength, width] if spokelength > 0 && width > 0 => Ok((spokelength, width)),
        [.., _, _] => Err(SamplingError::EmptyAxis {
            shape: image_shape.to_vec(),
        }),
        _ => Err(SamplingError::RankTooLow {
            shape: image_shape.to_vec(),
            expected: 2,
        }),
    }
}

/// Adds the leading batch axis after checking the declared sample count.
pub(crate) fn pin_static_len(
    what: &'static str,
    coords: Array2<f32>,
    expected: usize,
) -> Result<Trajectory> {
    let actual = coords.len_of(Axis(1));
    if actual != expected {
        return Err(SamplingError::StaticShapeMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(coords.insert_axis(Axis(0)))
}

#[cfg(test)]
mod __test__;
