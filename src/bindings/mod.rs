mod lamination;

use pyo3::prelude::*;
use pyo3::types::PyModule;

pub fn register(_py: Python, m: &PyModule) -> PyResult<()> {
    // Lamination model and the occlusion morph
    lamination::register(m)?;
    Ok(())
}
