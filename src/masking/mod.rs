//! # Frequency-column subsampling masks
//!
//! A mask selects which readout columns (the last axis of a k-space array)
//! survive a simulated accelerated acquisition. Every variant keeps a
//! centered calibration band fully sampled and picks the remaining columns
//! either at random or on a regular grid.
//!
//! Masks are `u8` arrays of zeros and ones whose shape broadcasts against
//! the k-space array they were generated for.

pub mod equidistant;
pub mod random;

use std::ops::Range;

use ndarray::{ArrayD, ArrayView1, ArrayViewD, Axis, IxDyn};
use num_integer::Integer;
use num_traits::Zero;

use crate::error::{Result, SamplingError};

pub use self::equidistant::{mask_equidistant, mask_equidistant_with_rng, EquidistantLayout};
pub use self::random::{mask_random, mask_random_with_rng};

/// Binary column mask, broadcastable against the k-space it was made for.
pub type Mask = ArrayD<u8>;

/// The calibration band spans `CENTER_PERCENT / accel_factor` percent of the columns.
const CENTER_PERCENT: usize = 32;

/// Width of the fully sampled calibration band for `num_cols` columns.
///
/// The percentage is an integer division, so acceleration factors above 32
/// get no band at all. Rounding is half-to-even on an `f32` product.
pub fn num_low_freqs(num_cols: usize, accel_factor: usize) -> Result<usize> {
    if accel_factor == 0 {
        return Err(SamplingError::InvalidAccelFactor(accel_factor));
    }
    let center_fraction = (CENTER_PERCENT / accel_factor) as f32 / 100.0;
    Ok((num_cols as f32 * center_fraction).round_ties_even() as usize)
}

/// Column range of the centered calibration band.
///
/// The band starts after `ceil((num_cols - num_low_freqs) / 2)` columns. It
/// covers at most 32% of them, so it always fits.
pub fn calibration_band(num_cols: usize, accel_factor: usize) -> Result<Range<usize>> {
    let num_low_freqs = num_low_freqs(num_cols, accel_factor)?;
    let pad = Integer::div_ceil(&(num_cols - num_low_freqs), &2);
    Ok(pad..pad + num_low_freqs)
}

pub(crate) fn min_rank(multicoil: bool) -> usize {
    if multicoil {
        3
    } else {
        2
    }
}

pub(crate) fn check_rank(shape: &[usize], expected: usize) -> Result<()> {
    if shape.len() < expected {
        return Err(SamplingError::RankTooLow {
            shape: shape.to_vec(),
            expected,
        });
    }
    Ok(())
}

/// Number of readout columns of a k-space shape.
pub(crate) fn num_cols_of(kspace_shape: &[usize]) -> Result<usize> {
    match kspace_shape.last() {
        None => Err(SamplingError::RankTooLow {
            shape: Vec::new(),
            expected: 1,
        }),
        Some(0) => Err(SamplingError::EmptyAxis {
            shape: kspace_shape.to_vec(),
        }),
        Some(&n) => Ok(n),
    }
}

/// Lifts a 1-D column mask to the rank of `target_shape` and tiles it over
/// the batch axis.
///
/// The result has shape `[batch, 1, num_cols]`, or `[batch, 1, 1, num_cols]`
/// when `multicoil` is set, where `batch = target_shape[0]`.
pub fn reshape_and_broadcast<T>(
    mask: ArrayView1<'_, T>,
    target_shape: &[usize],
    multicoil: bool,
) -> Result<Mask>
where
    T: Copy + Into<u8>,
{
    let rank = min_rank(multicoil);
    check_rank(target_shape, rank)?;
    let num_cols = num_cols_of(target_shape)?;
    if mask.len() != num_cols {
        return Err(SamplingError::MaskLengthMismatch {
            mask_len: mask.len(),
            num_cols,
        });
    }

    let mut lifted = mask.mapv(Into::<u8>::into).into_dyn();
    for _ in 0..rank {
        lifted = lifted.insert_axis(Axis(0));
    }

    let mut tiled_shape = vec![1; rank + 1];
    tiled_shape[0] = target_shape[0];
    tiled_shape[rank] = num_cols;
    let tiled = lifted
        .broadcast(IxDyn(&tiled_shape))
        .ok_or_else(|| SamplingError::MaskShapeMismatch {
            mask: lifted.shape().to_vec(),
            kspace: target_shape.to_vec(),
        })?
        .to_owned();
    Ok(tiled)
}

/// Indices of the retained columns in the first row of a mask.
pub fn retained_columns(mask: ArrayViewD<'_, u8>) -> Vec<usize> {
    if mask.ndim() == 0 {
        return Vec::new();
    }
    let last = Axis(mask.ndim() - 1);
    match mask.lanes(last).into_iter().next() {
        Some(row) => row
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m != 0)
            .map(|(col, _)| col)
            .collect(),
        None => Vec::new(),
    }
}

/// Zeroes every k-space sample whose column is not retained by `mask`.
pub fn apply_mask<T>(kspace: ArrayViewD<'_, T>, mask: ArrayViewD<'_, u8>) -> Result<ArrayD<T>>
where
    T: Clone + Zero,
{
    let mask = mask
        .broadcast(kspace.raw_dim())
        .ok_or_else(|| SamplingError::MaskShapeMismatch {
            mask: mask.shape().to_vec(),
            kspace: kspace.shape().to_vec(),
        })?;
    let mut masked = kspace.to_owned();
    masked.zip_mut_with(&mask, |k, &m| {
        if m == 0 {
            *k = T::zero();
        }
    });
    Ok(masked)
}
