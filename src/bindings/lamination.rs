use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

use crate::animation::MorphOcclusion;
use crate::geometry::{positions_to_cartesian, FrameGeometry};
use crate::lamination::Lamination;
use crate::ops::{MorphMap, Occlusion};
use crate::points::CirclePoint;

type Geometry<'py> = (
    &'py PyArray1<f64>,
    &'py PyArray2<f64>,
    Vec<&'py PyArray1<f64>>,
);

fn geometry_arrays<'py>(py: Python<'py>, lamination: &Lamination) -> Geometry<'py> {
    let geometry = FrameGeometry::from_lamination(lamination);
    (
        geometry.points.into_pyarray(py),
        geometry.chords.into_pyarray(py),
        geometry
            .polygons
            .into_iter()
            .map(|p| p.into_pyarray(py))
            .collect(),
    )
}

#[pyclass(name = "Lamination")]
#[derive(Clone)]
pub struct PyLamination {
    inner: Lamination,
}

#[pymethods]
impl PyLamination {
    #[staticmethod]
    pub fn from_json(json: &str) -> PyResult<Self> {
        Ok(Self {
            inner: Lamination::from_json(json)?,
        })
    }

    pub fn to_json(&self) -> PyResult<String> {
        Ok(self.inner.to_json()?)
    }

    #[getter]
    pub fn radix(&self) -> u32 {
        self.inner.radix()
    }

    #[getter]
    pub fn polygon_count(&self) -> usize {
        self.inner.polygons().len()
    }

    pub fn positions<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.inner.positions().into_pyarray(py)
    }

    /// `(points, chords, polygons)` as numpy arrays.
    pub fn geometry<'py>(&self, py: Python<'py>) -> Geometry<'py> {
        geometry_arrays(py, &self.inner)
    }
}

#[pyclass(name = "MorphOcclusion")]
pub struct PyMorphOcclusion {
    inner: MorphOcclusion,
}

#[pymethods]
impl PyMorphOcclusion {
    /// Arc between two labels in the lamination's radix.
    #[new]
    pub fn new(lamination: PyRef<'_, PyLamination>, start: &str, end: &str) -> PyResult<Self> {
        let radix = lamination.inner.radix();
        let occlusion = Occlusion::new(
            CirclePoint::parse(start, radix)?,
            CirclePoint::parse(end, radix)?,
        )?;
        Ok(Self {
            inner: MorphOcclusion::new(&lamination.inner, occlusion)?,
        })
    }

    /// Arc between vertices `start` and `end` of polygon `polygon`.
    #[staticmethod]
    pub fn from_polygon(
        lamination: PyRef<'_, PyLamination>,
        polygon: usize,
        start: usize,
        end: usize,
    ) -> PyResult<Self> {
        let polygons = lamination.inner.polygons();
        let chosen = polygons.get(polygon).ok_or_else(|| {
            PyIndexError::new_err(format!(
                "polygon {polygon} out of range for {} polygons",
                polygons.len()
            ))
        })?;
        let occlusion = Occlusion::from_polygon(chosen, start, end)?;
        Ok(Self {
            inner: MorphOcclusion::new(&lamination.inner, occlusion)?,
        })
    }

    #[getter]
    pub fn reported_initial(&self) -> PyLamination {
        PyLamination {
            inner: self.inner.reported_initial().clone(),
        }
    }

    #[getter]
    pub fn reported_final(&self) -> PyLamination {
        PyLamination {
            inner: self.inner.reported_final().clone(),
        }
    }

    pub fn frame(&self, t: f64) -> PyResult<PyLamination> {
        Ok(PyLamination {
            inner: self.inner.at(t)?,
        })
    }

    pub fn frame_geometry<'py>(&self, py: Python<'py>, t: f64) -> PyResult<Geometry<'py>> {
        Ok(geometry_arrays(py, &self.inner.at(t)?))
    }
}

#[pyfunction]
#[pyo3(name = "morph_function")]
pub fn morph_function_py(x: f64, start: f64, end: f64) -> PyResult<f64> {
    Ok(MorphMap::new(start, end)?.apply(x))
}

/// `(n,)` circle positions to `(n, 2)` points on the unit circle.
#[pyfunction]
#[pyo3(name = "to_cartesian")]
pub fn to_cartesian_py<'py>(
    py: Python<'py>,
    positions: PyReadonlyArray1<'py, f64>,
) -> &'py PyArray2<f64> {
    positions_to_cartesian(positions.as_array()).into_pyarray(py)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyLamination>()?;
    m.add_class::<PyMorphOcclusion>()?;
    m.add_function(wrap_pyfunction!(morph_function_py, m)?)?;
    m.add_function(wrap_pyfunction!(to_cartesian_py, m)?)?;
    Ok(())
}
