//! # Circle points
//!
//! Positions on the unit circle, parametrized by `[0, 1)`. A point is
//! either an exact eventually periodic expansion in some radix, or a plain
//! float produced by the morph. Both expose `to_float`, and all position
//! comparisons go through it.

pub mod numeric;
pub mod symbolic;

use std::cmp::Ordering;
use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

pub use numeric::NumericPoint;
pub use symbolic::{SymbolicPoint, MAX_RADIX, MIN_RADIX};

/// Reduces `x` mod 1 into `[0, 1)`.
///
/// `rem_euclid` rounds tiny negatives up to exactly `1.0`; those land on 0.
#[inline]
pub fn wrap_unit(x: f64) -> f64 {
    let wrapped = x.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// A marked position on the circle.
#[derive(Debug, Clone, PartialEq)]
pub enum CirclePoint {
    Symbolic(SymbolicPoint),
    Numeric(NumericPoint),
}

impl CirclePoint {
    pub fn parse(label: &str, radix: u32) -> crate::Result<Self> {
        SymbolicPoint::parse(label, radix).map(CirclePoint::Symbolic)
    }

    pub fn numeric(x: f64) -> Self {
        CirclePoint::Numeric(NumericPoint::new(x))
    }

    pub fn to_float(&self) -> f64 {
        match self {
            CirclePoint::Symbolic(p) => p.to_float(),
            CirclePoint::Numeric(p) => p.to_float(),
        }
    }

    pub fn as_symbolic(&self) -> Option<&SymbolicPoint> {
        match self {
            CirclePoint::Symbolic(p) => Some(p),
            CirclePoint::Numeric(_) => None,
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, CirclePoint::Symbolic(_))
    }

    /// Same position on the circle, regardless of label.
    ///
    /// Two symbolic points compare exactly; anything involving a numeric
    /// point falls back to float equality.
    pub fn same_position(&self, other: &CirclePoint) -> bool {
        self.cmp_position(other) == Ordering::Equal
    }

    pub fn cmp_position(&self, other: &CirclePoint) -> Ordering {
        match (self, other) {
            (CirclePoint::Symbolic(a), CirclePoint::Symbolic(b)) => a.value().cmp(b.value()),
            _ => self.to_float().total_cmp(&other.to_float()),
        }
    }
}

impl From<SymbolicPoint> for CirclePoint {
    fn from(p: SymbolicPoint) -> Self {
        CirclePoint::Symbolic(p)
    }
}

impl From<NumericPoint> for CirclePoint {
    fn from(p: NumericPoint) -> Self {
        CirclePoint::Numeric(p)
    }
}

impl fmt::Display for CirclePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CirclePoint::Symbolic(p) => fmt::Display::fmt(p, f),
            CirclePoint::Numeric(p) => fmt::Display::fmt(p, f),
        }
    }
}

// Positional closeness, for comparing morphed and interpolated frames.
impl AbsDiffEq for CirclePoint {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_float().abs_diff_eq(&other.to_float(), epsilon)
    }
}

impl RelativeEq for CirclePoint {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.to_float()
            .relative_eq(&other.to_float(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(0.25), 0.25);
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(1.0), 0.0);
        assert_eq!(wrap_unit(1.5), 0.5);
        assert_eq!(wrap_unit(-1e-18), 0.0);
    }

    #[test]
    fn test_numeric_point_is_wrapped() {
        assert_eq!(CirclePoint::numeric(1.25).to_float(), 0.25);
        assert_eq!(CirclePoint::numeric(-0.1).to_float(), wrap_unit(-0.1));
        assert!(!CirclePoint::numeric(0.5).is_symbolic());
    }

    #[test]
    fn test_distinct_labels_share_position() {
        let a = CirclePoint::parse("0_030", 4).unwrap();
        let b = CirclePoint::parse("_003", 4).unwrap();
        assert_ne!(a, b);
        assert!(a.same_position(&b));

        let zero = CirclePoint::parse("_", 4).unwrap();
        let one = CirclePoint::parse("_3", 4).unwrap();
        assert!(zero.same_position(&one));
    }

    #[test]
    fn test_mixed_comparison_uses_floats() {
        let half = CirclePoint::parse("2_", 4).unwrap();
        assert!(half.same_position(&CirclePoint::numeric(0.5)));
        assert_eq!(
            half.cmp_position(&CirclePoint::numeric(0.75)),
            Ordering::Less
        );
        assert_abs_diff_eq!(half, CirclePoint::numeric(0.5 + 1e-17));
    }

    #[test]
    fn test_display() {
        assert_eq!(CirclePoint::parse("1_003", 4).unwrap().to_string(), "1_003");
        assert_eq!(CirclePoint::numeric(0.5).to_string(), "0.5");
    }
}
