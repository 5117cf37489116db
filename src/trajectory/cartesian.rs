use std::f32::consts::PI;

use log::{debug, trace};
use ndarray::{Array2, Axis};
use rand::Rng;
use rayon::prelude::*;

use super::{pin_static_len, Trajectory};
use crate::error::{Result, SamplingError};
use crate::masking::{mask_random_with_rng, retained_columns};

pub const DEBUG_ACCEL_FACTOR: usize = 4;
pub const DEBUG_READOUT_DIM: usize = 400;
pub const DEBUG_SPOKELENGTH: usize = 640;
/// Readout columns kept by every debugging trajectory.
pub const DEBUG_RETAINED_COLUMNS: usize = 97;
pub const DEBUG_TRAJECTORY_LEN: usize = DEBUG_RETAINED_COLUMNS * DEBUG_SPOKELENGTH;

const MAX_MASK_DRAWS: usize = 4096;

/// Maps `index` in `0..dim` onto `[-π, π)`.
pub fn normalized_frequency(index: usize, dim: usize) -> f32 {
    let half = dim as f32 / 2.0;
    (index as f32 - half) / half * PI
}

/// Readout columns of a 4x random mask, redrawn until exactly
/// [`DEBUG_RETAINED_COLUMNS`] survive.
fn draw_readout_columns<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<usize>> {
    let shape = [1, DEBUG_SPOKELENGTH, DEBUG_READOUT_DIM];
    for draw in 1..=MAX_MASK_DRAWS {
        let mask = mask_random_with_rng(&shape, DEBUG_ACCEL_FACTOR, false, false, &mut *rng)?;
        let columns = retained_columns(mask.view());
        if columns.len() == DEBUG_RETAINED_COLUMNS {
            debug!("debugging trajectory: readout mask accepted after {} draws", draw);
            return Ok(columns);
        }
        trace!(
            "debugging trajectory: draw {} kept {} columns",
            draw,
            columns.len()
        );
    }
    Err(SamplingError::RetainedColumnsUnreachable {
        target: DEBUG_RETAINED_COLUMNS,
        draws: MAX_MASK_DRAWS,
    })
}

/// Fixed-size Cartesian trajectory built from a random 4x column mask.
///
/// See [`debugging_cartesian_trajectory_with_rng`].
pub fn debugging_cartesian_trajectory() -> Result<Trajectory> {
    debugging_cartesian_trajectory_with_rng(&mut rand::thread_rng())
}

/// Fixed-size Cartesian trajectory built from a random 4x column mask.
///
/// The grid covers the retained columns of a `400`-column readout against
/// all `640` spoke positions, giving exactly [`DEBUG_TRAJECTORY_LEN`]
/// points. Row 0 holds the readout coordinate, row 1 the spoke coordinate,
/// and the readout index varies fastest.
pub fn debugging_cartesian_trajectory_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Result<Trajectory> {
    let readout: Vec<f32> = draw_readout_columns(rng)?
        .into_iter()
        .map(|col| normalized_frequency(col, DEBUG_READOUT_DIM))
        .collect();
    let spokes: Vec<f32> = (0..DEBUG_SPOKELENGTH)
        .map(|pos| normalized_frequency(pos, DEBUG_SPOKELENGTH))
        .collect();

    let mut coords = Array2::<f32>::zeros((2, readout.len() * spokes.len()));
    coords
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .enumerate()
        .for_each(|(idx, mut point)| {
            point[0] = readout[idx % readout.len()];
            point[1] = spokes[idx / readout.len()];
        });

    pin_static_len("debugging cartesian trajectory", coords, DEBUG_TRAJECTORY_LEN)
}
