//! Renderer-facing arrays for one lamination frame.

use std::f64::consts::TAU;

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::lamination::Lamination;
use crate::points::CirclePoint;

/// Float positions of a frame, grouped the way they are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    /// Isolated points, shape `(n,)`.
    pub points: Array1<f64>,
    /// One row per chord, shape `(n, 2)`.
    pub chords: Array2<f64>,
    /// Vertex positions of each polygon, in cyclic order.
    pub polygons: Vec<Array1<f64>>,
}

impl FrameGeometry {
    pub fn from_lamination(lamination: &Lamination) -> Self {
        let points = lamination.points().iter().map(CirclePoint::to_float).collect();
        let chords = Array2::from_shape_fn((lamination.chords().len(), 2), |(i, j)| {
            lamination.chords()[i].endpoints()[j].to_float()
        });
        let polygons = lamination
            .polygons()
            .iter()
            .map(|p| p.vertices().iter().map(CirclePoint::to_float).collect())
            .collect();
        Self {
            points,
            chords,
            polygons,
        }
    }
}

/// Point on the unit circle for position `x`.
#[inline]
pub fn to_cartesian(x: f64) -> (f64, f64) {
    let angle = TAU * x;
    (angle.cos(), angle.sin())
}

/// `(n,) -> (n, 2)` cartesian coordinates.
pub fn positions_to_cartesian(positions: ArrayView1<'_, f64>) -> Array2<f64> {
    let mut out = Array2::zeros((positions.len(), 2));
    for (mut row, &x) in out.axis_iter_mut(Axis(0)).zip(positions.iter()) {
        let (cx, cy) = to_cartesian(x);
        row[0] = cx;
        row[1] = cy;
    }
    out
}
