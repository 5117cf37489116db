use num_complex::Complex32;
use numpy::{IntoPyArray, PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::prelude::*;

use crate::masking;

#[pyfunction]
#[pyo3(signature = (shape, accel_factor, multicoil = false, slice_different = false))]
pub fn mask_random<'py>(
    py: Python<'py>,
    shape: Vec<usize>,
    accel_factor: usize,
    multicoil: bool,
    slice_different: bool,
) -> PyResult<&'py PyArrayDyn<u8>> {
    let mask = masking::mask_random(&shape, accel_factor, multicoil, slice_different)?;
    Ok(mask.into_pyarray(py))
}

#[pyfunction]
#[pyo3(signature = (shape, accel_factor, multicoil = false, slice_different = false))]
pub fn mask_equidistant<'py>(
    py: Python<'py>,
    shape: Vec<usize>,
    accel_factor: usize,
    multicoil: bool,
    slice_different: bool,
) -> PyResult<&'py PyArrayDyn<u8>> {
    let mask = masking::mask_equidistant(&shape, accel_factor, multicoil, slice_different)?;
    Ok(mask.into_pyarray(py))
}

#[pyfunction]
pub fn apply_mask<'py>(
    py: Python<'py>,
    kspace: PyReadonlyArrayDyn<Complex32>,
    mask: PyReadonlyArrayDyn<u8>,
) -> PyResult<&'py PyArrayDyn<Complex32>> {
    let masked = masking::apply_mask(kspace.as_array(), mask.as_array())?;
    Ok(masked.into_pyarray(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mask_random, m)?)?;
    m.add_function(wrap_pyfunction!(mask_equidistant, m)?)?;
    m.add_function(wrap_pyfunction!(apply_mask, m)?)?;
    Ok(())
}
