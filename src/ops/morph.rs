use tracing::trace;

use super::occlusion::{antipode, check_bounds, Occlusion};
use crate::error::{LaminationError, Result};
use crate::lamination::Lamination;
use crate::points::CirclePoint;

/// Closed-form circle reparametrization for one occluded arc `[a, b]`.
///
/// The arc collapses to its midpoint. Below `a` the circle is stretched
/// by `1 / (1 - bite)` about the midpoint's antipode, above `b` about the
/// midpoint itself. Outputs are raw: they may leave `[0, 1)` and are only
/// wrapped when turned back into points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphMap {
    start: f64,
    end: f64,
    midpoint: f64,
    opposite: f64,
    remaining: f64,
}

impl MorphMap {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        check_bounds(start, end)?;
        Ok(Self::between(start, end))
    }

    fn between(start: f64, end: f64) -> Self {
        let midpoint = (start + end) / 2.0;
        Self {
            start,
            end,
            midpoint,
            opposite: antipode(midpoint),
            remaining: 1.0 - (end - start),
        }
    }

    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    pub fn opposite(&self) -> f64 {
        self.opposite
    }

    pub fn remaining_length(&self) -> f64 {
        self.remaining
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        if x >= self.start && x <= self.end {
            self.midpoint
        } else if x < self.start {
            (x - self.opposite) / self.remaining + self.opposite
        } else {
            (x - self.end) / self.remaining + self.midpoint
        }
    }
}

impl From<&Occlusion> for MorphMap {
    fn from(occlusion: &Occlusion) -> Self {
        let (start, end) = occlusion.bounds();
        MorphMap::between(start, end)
    }
}

/// Position of `x` after the occluded arc is closed up.
pub fn morph_function(x: f64, occlusion: &Occlusion) -> f64 {
    MorphMap::from(occlusion).apply(x)
}

/// Copy of `lamination` with the points and polygons inside the arc dropped.
///
/// Polygons are judged by their first vertex. Chords pass through
/// untouched. The copy carries no occlusion.
pub fn remove_occluded(lamination: &Lamination, occlusion: &Occlusion) -> Lamination {
    let visible = lamination.retain_visible(|p| occlusion.is_visible(p));
    trace!(
        points_removed = lamination.points().len() - visible.points().len(),
        polygons_removed = lamination.polygons().len() - visible.polygons().len(),
        "removed occluded region"
    );
    visible
}

/// Every point of `lamination` sent through the morph for `occlusion`.
pub fn morph_lamination(lamination: &Lamination, occlusion: &Occlusion) -> Lamination {
    let map = MorphMap::from(occlusion);
    lamination.apply_function(|p| CirclePoint::numeric(map.apply(p.to_float())))
}

/// Morphs a lamination by the occlusion it carries.
pub fn result(lamination: &Lamination) -> Result<Lamination> {
    let occlusion = lamination
        .occlusion()
        .ok_or(LaminationError::MissingOcclusion)?;
    Ok(morph_lamination(lamination, occlusion))
}
