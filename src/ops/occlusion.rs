use crate::error::{LaminationError, Result};
use crate::lamination::Polygon;
use crate::points::CirclePoint;

/// The bitten arc `[start, end]`, with `start < end` as floats.
///
/// Arcs across the 0/1 seam are not representable: callers order the pair
/// so the arc they mean does not wrap.
#[derive(Debug, Clone, PartialEq)]
pub struct Occlusion {
    start: CirclePoint,
    end: CirclePoint,
}

pub(crate) fn check_bounds(a: f64, b: f64) -> Result<()> {
    if a.is_nan() || b.is_nan() || a == b || b - a >= 1.0 {
        return Err(LaminationError::DegenerateOcclusion { start: a, end: b });
    }
    if a > b {
        return Err(LaminationError::UnorderedOcclusion { start: a, end: b });
    }
    Ok(())
}

impl Occlusion {
    pub fn new(start: CirclePoint, end: CirclePoint) -> Result<Self> {
        check_bounds(start.to_float(), end.to_float())?;
        Ok(Self { start, end })
    }

    /// Arc between two vertices of `polygon`, e.g. `(0, 2)` for a triangle.
    pub fn from_polygon(polygon: &Polygon, start: usize, end: usize) -> Result<Self> {
        Self::new(polygon.vertex(start)?.clone(), polygon.vertex(end)?.clone())
    }

    pub fn start(&self) -> &CirclePoint {
        &self.start
    }

    pub fn end(&self) -> &CirclePoint {
        &self.end
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.start.to_float(), self.end.to_float())
    }

    pub fn bite_length(&self) -> f64 {
        let (a, b) = self.bounds();
        b - a
    }

    pub fn midpoint(&self) -> f64 {
        let (a, b) = self.bounds();
        (a + b) / 2.0
    }

    /// Antipode of the midpoint.
    pub fn opposite(&self) -> f64 {
        antipode(self.midpoint())
    }

    /// Closed-interval membership.
    pub fn contains(&self, x: f64) -> bool {
        let (a, b) = self.bounds();
        x >= a && x <= b
    }

    /// Strictly outside the arc; what stays visible after removal.
    pub fn is_visible(&self, point: &CirclePoint) -> bool {
        !self.contains(point.to_float())
    }
}

#[inline]
pub(crate) fn antipode(x: f64) -> f64 {
    if x < 0.5 {
        x + 0.5
    } else {
        x - 0.5
    }
}
