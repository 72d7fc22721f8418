//! Error types for lamination construction, morphing and interpolation.
//!
//! Every variant is a precondition violation surfaced to the caller. The
//! core performs no I/O, so nothing here is transient or retried.

use thiserror::Error;

/// Errors raised by the lamination core.
#[derive(Error, Debug)]
pub enum LaminationError {
    /// A symbolic digit is not in `[0, radix)`.
    #[error("Digit {digit} is out of range for radix {radix}")]
    InvalidDigit { digit: u32, radix: u32 },

    /// Radix outside the supported range.
    #[error("Invalid radix: {0} (must be 2-36)")]
    InvalidRadix(u32),

    /// A point label that is not `<pre-period>_<period>`.
    #[error("Malformed point label: {0:?}")]
    MalformedLabel(String),

    /// A symbolic point does not share the lamination's radix.
    #[error("Radix mismatch: lamination uses {expected}, point uses {found}")]
    RadixMismatch { expected: u32, found: u32 },

    /// A polygon with fewer than three vertices.
    #[error("Polygon needs at least 3 vertices, got {0}")]
    InvalidPolygon(usize),

    /// A vertex index that does not exist on the polygon.
    #[error("Vertex index {index} out of range for polygon with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    /// The morph was requested from a lamination that carries no occlusion.
    #[error("Morph requires an occlusion arc but none was assigned")]
    MissingOcclusion,

    /// The occluded arc is empty or covers the whole circle.
    #[error("Degenerate occlusion arc [{start}, {end}]")]
    DegenerateOcclusion { start: f64, end: f64 },

    /// The occluded arc wraps the 0/1 seam. Callers must order the pair.
    #[error("Occlusion arc [{start}, {end}] is reversed; expected start < end")]
    UnorderedOcclusion { start: f64, end: f64 },

    /// Two laminations with different combinatorial shapes.
    #[error("Lamination shapes differ: {0}")]
    ShapeMismatch(String),

    /// Interpolation parameter outside `[0, 1]`.
    #[error("Invalid animation parameter: {0} (must be in [0, 1])")]
    InvalidParameter(f64),

    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A numeric point reached a path that needs an exact label.
    #[error("Point {0} has no exact label")]
    NotSymbolic(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LaminationError>;

#[cfg(feature = "python")]
impl From<LaminationError> for pyo3::PyErr {
    fn from(err: LaminationError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
