use log::debug;
use ndarray::{s, Array1, Array2, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use super::{calibration_band, check_rank, min_rank, num_cols_of, reshape_and_broadcast, Mask};
use crate::error::Result;

/// Uniform random column mask drawn from the thread-local generator.
///
/// See [`mask_random_with_rng`].
pub fn mask_random(
    kspace_shape: &[usize],
    accel_factor: usize,
    multicoil: bool,
    slice_different: bool,
) -> Result<Mask> {
    mask_random_with_rng(
        kspace_shape,
        accel_factor,
        multicoil,
        slice_different,
        &mut rand::thread_rng(),
    )
}

/// Uniform random column mask.
///
/// Columns outside the calibration band are kept independently with
/// probability `(num_cols / accel_factor - num_low_freqs) / (num_cols - num_low_freqs)`,
/// so on average `num_cols / accel_factor` columns survive.
///
/// With `slice_different` every slice (axis 0) gets its own row and the
/// result has shape `[slices, 1, num_cols]`. Otherwise a single row is tiled
/// over the batch axis. `multicoil` adds a singleton coil axis in both cases.
pub fn mask_random_with_rng<R: Rng + ?Sized>(
    kspace_shape: &[usize],
    accel_factor: usize,
    multicoil: bool,
    slice_different: bool,
    rng: &mut R,
) -> Result<Mask> {
    let num_cols = num_cols_of(kspace_shape)?;
    let band = calibration_band(num_cols, accel_factor)?;
    let num_low_freqs = band.len();
    let prob = (num_cols as f64 / accel_factor as f64 - num_low_freqs as f64)
        / (num_cols - num_low_freqs) as f64;
    debug!(
        "random mask: {} columns, band {:?}, keep probability {:.4}",
        num_cols, band, prob
    );

    let uniform = Uniform::new(0.0f64, 1.0);
    if slice_different {
        check_rank(kspace_shape, min_rank(multicoil))?;
        let num_slices = kspace_shape[0];
        let mut rows = Array2::random_using((num_slices, num_cols), uniform, rng)
            .mapv(|u: f64| u8::from(u < prob));
        rows.slice_mut(s![.., band]).fill(1);

        let mut mask = rows.into_dyn().insert_axis(Axis(1));
        if multicoil {
            mask = mask.insert_axis(Axis(1));
        }
        Ok(mask)
    } else {
        let mut row = Array1::random_using(num_cols, uniform, rng).mapv(|u: f64| u8::from(u < prob));
        row.slice_mut(s![band]).fill(1);
        reshape_and_broadcast(row.view(), kspace_shape, multicoil)
    }
}
