use numpy::{IntoPyArray, PyArray3};
use pyo3::prelude::*;

use crate::trajectory::{self, DEFAULT_NUM_REVOLUTIONS};

#[pyfunction]
#[pyo3(signature = (image_shape, af = None, us = None))]
pub fn radial_trajectory<'py>(
    py: Python<'py>,
    image_shape: Vec<usize>,
    af: Option<usize>,
    us: Option<f64>,
) -> PyResult<&'py PyArray3<f32>> {
    let traj = py.allow_threads(|| trajectory::radial_trajectory(&image_shape, af, us))?;
    Ok(traj.into_pyarray(py))
}

#[pyfunction]
#[pyo3(signature = (image_shape, af = None, us = None, num_revolutions = DEFAULT_NUM_REVOLUTIONS))]
pub fn spiral_trajectory<'py>(
    py: Python<'py>,
    image_shape: Vec<usize>,
    af: Option<usize>,
    us: Option<f64>,
    num_revolutions: usize,
) -> PyResult<&'py PyArray3<f32>> {
    let traj = py.allow_threads(|| {
        trajectory::spiral_trajectory(&image_shape, af, us, num_revolutions)
    })?;
    Ok(traj.into_pyarray(py))
}

#[pyfunction]
pub fn debugging_cartesian_trajectory(py: Python<'_>) -> PyResult<&PyArray3<f32>> {
    let traj = py.allow_threads(trajectory::debugging_cartesian_trajectory)?;
    Ok(traj.into_pyarray(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(radial_trajectory, m)?)?;
    m.add_function(wrap_pyfunction!(spiral_trajectory, m)?)?;
    m.add_function(wrap_pyfunction!(debugging_cartesian_trajectory, m)?)?;
    Ok(())
}
