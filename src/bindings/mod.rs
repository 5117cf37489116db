mod masking;
mod trajectory;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::SamplingError;

impl From<SamplingError> for PyErr {
    fn from(err: SamplingError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// k-space sampling masks and non-Cartesian trajectories
#[pymodule]
pub fn kspace_sampling(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Column masks
    masking::register(m)?;
    // Radial, spiral and debugging trajectories
    trajectory::register(m)?;
    Ok(())
}
