//! Exact circle laminations and the occlusion morph.
//!
//! Points on the circle are eventually periodic base-`radix` expansions
//! ([`SymbolicPoint`]) or plain floats ([`NumericPoint`]). A [`Lamination`]
//! collects them into isolated points, chords and polygons.
//! [`MorphOcclusion`] closes up a chosen arc and exposes the animation as a
//! pure function of `t`.

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod lamination;
pub mod ops;
pub mod points;

#[cfg(feature = "python")]
mod bindings;

pub use animation::{Interpolation, MorphOcclusion};
pub use config::{AnimationConfig, SeamPolicy};
pub use error::{LaminationError, Result};
pub use geometry::FrameGeometry;
pub use lamination::{Chord, Lamination, LaminationDescription, LaminationShape, Polygon};
pub use ops::{
    interpolate, interpolate_with, morph_function, morph_lamination, remove_occluded, result,
    MorphMap, Occlusion,
};
pub use points::{CirclePoint, NumericPoint, SymbolicPoint};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Lamination morph - circle laminations for animation engines
#[cfg(feature = "python")]
#[pymodule]
fn lamination_morph(py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    bindings::register(py, m)?;
    Ok(())
}
