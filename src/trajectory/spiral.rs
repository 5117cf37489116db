use std::f64::consts::PI;

use log::debug;
use ndarray::{Array2, Axis};
use num_complex::Complex64;
use rayon::prelude::*;

use super::{image_dims, pin_static_len, sample_count, SpokeBudget, Trajectory};
use crate::error::{Result, SamplingError};

pub const DEFAULT_NUM_REVOLUTIONS: usize = 3;

/// `(nshots, spokelength, nshots * (spokelength - 1))` for an image shape.
fn spiral_shots(
    image_shape: &[usize],
    af: Option<usize>,
    us: Option<f64>,
    num_revolutions: usize,
) -> Result<(usize, usize, usize)> {
    if num_revolutions == 0 {
        return Err(SamplingError::InvalidRevolutions(num_revolutions));
    }
    let (spokelength, width) = image_dims(image_shape)?;
    let theta_max = 2.0 * PI * num_revolutions as f64;
    let nshots = SpokeBudget::from_factors(af, us)?.num_spokes(width, theta_max)?;
    let len = sample_count(nshots, spokelength - 1)?;
    Ok((nshots, spokelength, len))
}

/// Number of samples `nshots * (spokelength - 1)` of [`spiral_trajectory`].
pub fn spiral_trajectory_len(
    image_shape: &[usize],
    af: Option<usize>,
    us: Option<f64>,
    num_revolutions: usize,
) -> Result<usize> {
    let (_, _, len) = spiral_shots(image_shape, af, us, num_revolutions)?;
    Ok(len)
}

/// One shot through the origin: an Archimedean arm of `spokelength / 2`
/// points, reversed, followed by its point reflection without the shared
/// center.
pub fn single_shot(spokelength: usize, num_revolutions: usize) -> Vec<Complex64> {
    let half = spokelength / 2;
    let arm: Vec<Complex64> = (0..half)
        .map(|k| {
            let t = k as f64 / half as f64;
            Complex64::from_polar(t * PI, 2.0 * PI * t * num_revolutions as f64)
        })
        .collect();
    arm.iter()
        .rev()
        .copied()
        .chain(arm.iter().skip(1).map(|z| -z))
        .collect()
}

/// Multi-shot spiral trajectory.
///
/// Shot `i` is [`single_shot`] rotated by `π · i / nshots`. Row 0 holds the
/// real part, row 1 the imaginary part. Samples are interleaved across
/// shots: column `sample * nshots + shot`.
///
/// Only even `image_shape[-2]` produce the declared `spokelength - 1`
/// samples per shot; odd lengths are rejected.
pub fn spiral_trajectory(
    image_shape: &[usize],
    af: Option<usize>,
    us: Option<f64>,
    num_revolutions: usize,
) -> Result<Trajectory> {
    let (nshots, spokelength, len) = spiral_shots(image_shape, af, us, num_revolutions)?;
    debug!(
        "spiral trajectory: {} shots of {} samples, {} revolutions",
        nshots,
        spokelength - 1,
        num_revolutions
    );

    let shot = single_shot(spokelength, num_revolutions);
    let mut coords = Array2::<f32>::zeros((2, shot.len() * nshots));
    coords
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .enumerate()
        .for_each(|(idx, mut point)| {
            let rotation = Complex64::from_polar(1.0, PI * (idx % nshots) as f64 / nshots as f64);
            let z = shot[idx / nshots] * rotation;
            point[0] = z.re as f32;
            point[1] = z.im as f32;
        });

    pin_static_len("spiral trajectory", coords, len)
}
