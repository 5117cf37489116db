use std::f64::consts::PI;

use log::debug;
use ndarray::{s, Array1, Array2};

use super::{image_dims, pin_static_len, sample_count, SpokeBudget, Trajectory};
use crate::error::Result;

/// Angle between consecutive spokes: `180° / φ`, in radians.
pub fn golden_angle() -> f64 {
    let golden_ratio = (1.0 + 5f64.sqrt()) / 2.0;
    (180.0 / golden_ratio).to_radians()
}

/// `(nspokes, spokelength, nspokes * spokelength)` for an image shape.
fn radial_spokes(image_shape: &[usize], af: Option<usize>, us: Option<f64>) -> Result<(usize, usize, usize)> {
    let (spokelength, width) = image_dims(image_shape)?;
    let nspokes = SpokeBudget::from_factors(af, us)?.num_spokes(width, 1.0)?;
    let len = sample_count(nspokes, spokelength)?;
    Ok((nspokes, spokelength, len))
}

/// Number of samples `nspokes * spokelength` of [`radial_trajectory`].
pub fn radial_trajectory_len(image_shape: &[usize], af: Option<usize>, us: Option<f64>) -> Result<usize> {
    let (_, _, len) = radial_spokes(image_shape, af, us)?;
    Ok(len)
}

/// Golden-angle radial trajectory.
///
/// Spokes are `image_shape[-2]` samples long. The first one runs from `-π`
/// to `π` along ky, and each following spoke is the previous one rotated by
/// the golden angle. Row 0 holds ky, row 1 holds kx, and samples are stored
/// spoke after spoke.
pub fn radial_trajectory(image_shape: &[usize], af: Option<usize>, us: Option<f64>) -> Result<Trajectory> {
    let (nspokes, spokelength, len) = radial_spokes(image_shape, af, us)?;
    debug!(
        "radial trajectory: {} spokes of {} samples",
        nspokes, spokelength
    );

    let (sin_ga, cos_ga) = golden_angle().sin_cos();
    let mut ky: Array1<f64> = Array1::linspace(-PI, PI, spokelength);
    let mut kx: Array1<f64> = Array1::zeros(spokelength);

    let mut coords = Array2::<f32>::zeros((2, len));
    for spoke in 0..nspokes {
        if spoke > 0 {
            let next_kx = cos_ga * &kx - sin_ga * &ky;
            let next_ky = sin_ga * &kx + cos_ga * &ky;
            kx = next_kx;
            ky = next_ky;
        }
        let start = spoke * spokelength;
        coords
            .slice_mut(s![0, start..start + spokelength])
            .assign(&ky.mapv(|v| v as f32));
        coords
            .slice_mut(s![1, start..start + spokelength])
            .assign(&kx.mapv(|v| v as f32));
    }

    pin_static_len("radial trajectory", coords, len)
}
