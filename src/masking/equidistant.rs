use std::ops::Range;

use log::{debug, warn};
use ndarray::Array1;
use rand::Rng;

use super::{calibration_band, num_cols_of, reshape_and_broadcast, Mask};
use crate::error::{Result, SamplingError};

/// Periodic sampling grid for one column count and acceleration factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquidistantLayout {
    pub num_cols: usize,
    pub band: Range<usize>,
    pub num_high_freqs: usize,
    pub spacing: usize,
}

impl EquidistantLayout {
    pub fn new(num_cols: usize, accel_factor: usize) -> Result<Self> {
        let band = calibration_band(num_cols, accel_factor)?;
        let num_high_freqs = (num_cols / accel_factor)
            .checked_sub(band.len())
            .filter(|&n| n > 0)
            .ok_or(SamplingError::NoHighFrequencies {
                accel_factor,
                num_cols,
            })?;
        let spacing = (num_cols - band.len()) / num_high_freqs;
        Ok(Self {
            num_cols,
            band,
            num_high_freqs,
            spacing,
        })
    }

    /// Sampled column indices for a grid starting at `offset`.
    ///
    /// Periodic and band indices may coincide; duplicates are not removed.
    pub fn locations(&self, offset: usize) -> impl Iterator<Item = usize> + '_ {
        (offset..self.num_cols)
            .step_by(self.spacing)
            .chain(self.band.clone())
    }

    /// 1-D mask with ones at the union of [`locations`](Self::locations).
    pub fn mask(&self, offset: usize) -> Array1<u8> {
        let mut mask = Array1::<u8>::zeros(self.num_cols);
        for col in self.locations(offset) {
            mask[col] = 1;
        }
        mask
    }
}

/// Equidistant column mask drawn from the thread-local generator.
///
/// See [`mask_equidistant_with_rng`].
pub fn mask_equidistant(
    kspace_shape: &[usize],
    accel_factor: usize,
    multicoil: bool,
    slice_different: bool,
) -> Result<Mask> {
    mask_equidistant_with_rng(
        kspace_shape,
        accel_factor,
        multicoil,
        slice_different,
        &mut rand::thread_rng(),
    )
}

/// Equidistant column mask with a random phase.
///
/// Columns `offset, offset + spacing, ...` are kept on top of the
/// calibration band, with `offset` uniform in `[0, spacing)`. One mask is
/// shared by all slices even when `slice_different` is set.
pub fn mask_equidistant_with_rng<R: Rng + ?Sized>(
    kspace_shape: &[usize],
    accel_factor: usize,
    multicoil: bool,
    slice_different: bool,
    rng: &mut R,
) -> Result<Mask> {
    let num_cols = num_cols_of(kspace_shape)?;
    let layout = EquidistantLayout::new(num_cols, accel_factor)?;
    let offset = rng.gen_range(0..layout.spacing);
    debug!(
        "equidistant mask: {} columns, band {:?}, {} periodic samples every {} from {}",
        num_cols, layout.band, layout.num_high_freqs, layout.spacing, offset
    );
    if slice_different {
        warn!("equidistant masks are shared across slices; slice_different is ignored");
    }

    reshape_and_broadcast(layout.mask(offset).view(), kspace_shape, multicoil)
}
