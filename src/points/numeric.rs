use std::fmt;

/// Floating-point circle position with no exact label.
///
/// Produced by the occlusion morph and by interpolation. The stored value
/// is always wrapped into `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NumericPoint(f64);

impl NumericPoint {
    pub fn new(x: f64) -> Self {
        NumericPoint(super::wrap_unit(x))
    }

    #[inline]
    pub fn to_float(self) -> f64 {
        self.0
    }
}

impl From<f64> for NumericPoint {
    fn from(x: f64) -> Self {
        NumericPoint::new(x)
    }
}

impl fmt::Display for NumericPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
