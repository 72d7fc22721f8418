//! # Laminations
//!
//! Marked points, chords and polygons inscribed in the unit circle, all
//! sharing one radix. Laminations are values: every transform returns a
//! new one.

pub mod description;

use rayon::prelude::*;

use crate::error::{LaminationError, Result};
use crate::ops::Occlusion;
use crate::points::{symbolic::check_radix, CirclePoint};

pub use description::LaminationDescription;

/// Two endpoints. Order is kept so frames correspond one to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord(pub CirclePoint, pub CirclePoint);

impl Chord {
    pub fn endpoints(&self) -> [&CirclePoint; 2] {
        [&self.0, &self.1]
    }
}

/// Cyclically ordered vertices, at least three.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(Vec<CirclePoint>);

impl Polygon {
    pub fn new(vertices: Vec<CirclePoint>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(LaminationError::InvalidPolygon(vertices.len()));
        }
        Ok(Polygon(vertices))
    }

    pub fn vertices(&self) -> &[CirclePoint] {
        &self.0
    }

    /// First vertex; stands in for the whole polygon when filtering.
    pub fn representative(&self) -> &CirclePoint {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn vertex(&self, index: usize) -> Result<&CirclePoint> {
        self.0.get(index).ok_or(LaminationError::VertexOutOfRange {
            index,
            len: self.0.len(),
        })
    }
}

/// Counts that two laminations must share to be interpolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaminationShape {
    pub points: usize,
    pub chords: usize,
    pub polygons: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lamination {
    points: Vec<CirclePoint>,
    chords: Vec<Chord>,
    polygons: Vec<Polygon>,
    radix: u32,
    occlusion: Option<Occlusion>,
}

impl Lamination {
    /// Builds a lamination, checking that every symbolic point uses `radix`.
    pub fn new(
        points: Vec<CirclePoint>,
        chords: Vec<Chord>,
        polygons: Vec<Polygon>,
        radix: u32,
    ) -> Result<Self> {
        check_radix(radix)?;
        let lamination = Self::from_parts(points, chords, polygons, radix);
        if let Some(found) = lamination
            .all_points()
            .filter_map(CirclePoint::as_symbolic)
            .map(|p| p.radix())
            .find(|&r| r != radix)
        {
            return Err(LaminationError::RadixMismatch {
                expected: radix,
                found,
            });
        }
        Ok(lamination)
    }

    pub(crate) fn from_parts(
        points: Vec<CirclePoint>,
        chords: Vec<Chord>,
        polygons: Vec<Polygon>,
        radix: u32,
    ) -> Self {
        Self {
            points,
            chords,
            polygons,
            radix,
            occlusion: None,
        }
    }

    pub fn points(&self) -> &[CirclePoint] {
        &self.points
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn occlusion(&self) -> Option<&Occlusion> {
        self.occlusion.as_ref()
    }

    /// The same lamination with `occlusion` marked as the bitten arc.
    pub fn with_occlusion(mut self, occlusion: Occlusion) -> Self {
        self.occlusion = Some(occlusion);
        self
    }

    /// Isolated points, then chord endpoints, then polygon vertices.
    pub fn all_points(&self) -> impl Iterator<Item = &CirclePoint> + '_ {
        self.points
            .iter()
            .chain(self.chords.iter().flat_map(|c| c.endpoints()))
            .chain(self.polygons.iter().flat_map(|p| p.vertices().iter()))
    }

    /// Float positions in `all_points` order.
    pub fn positions(&self) -> Vec<f64> {
        self.all_points().map(CirclePoint::to_float).collect()
    }

    pub fn shape(&self) -> LaminationShape {
        LaminationShape {
            points: self.points.len(),
            chords: self.chords.len(),
            polygons: self.polygons.iter().map(Polygon::len).collect(),
        }
    }

    /// Fails with `ShapeMismatch` unless `other` has the same shape.
    pub fn check_shape(&self, other: &Lamination) -> Result<()> {
        let (ours, theirs) = (self.shape(), other.shape());
        if ours == theirs {
            return Ok(());
        }
        Err(LaminationError::ShapeMismatch(format!(
            "{} points / {} chords / polygons {:?} vs {} points / {} chords / polygons {:?}",
            ours.points, ours.chords, ours.polygons, theirs.points, theirs.chords, theirs.polygons
        )))
    }

    /// Replaces every point occurrence with `f(point)`.
    ///
    /// `f` runs once per occurrence, duplicates included, with no
    /// memoization. Radix is kept and the occlusion is dropped.
    pub fn apply_function<F>(&self, f: F) -> Lamination
    where
        F: Fn(&CirclePoint) -> CirclePoint,
    {
        let points = self.points.iter().map(&f).collect();
        let chords = self
            .chords
            .iter()
            .map(|Chord(a, b)| Chord(f(a), f(b)))
            .collect();
        let polygons = self
            .polygons
            .iter()
            .map(|p| Polygon(p.vertices().iter().map(&f).collect()))
            .collect();
        Lamination::from_parts(points, chords, polygons, self.radix)
    }

    /// `apply_function` for maps that can fail. Stops at the first error.
    pub fn try_apply_function<F>(&self, f: F) -> Result<Lamination>
    where
        F: Fn(&CirclePoint) -> Result<CirclePoint>,
    {
        let points = self.points.iter().map(&f).collect::<Result<_>>()?;
        let chords = self
            .chords
            .iter()
            .map(|Chord(a, b)| Ok(Chord(f(a)?, f(b)?)))
            .collect::<Result<_>>()?;
        let polygons = self
            .polygons
            .iter()
            .map(|p| p.vertices().iter().map(&f).collect::<Result<_>>().map(Polygon))
            .collect::<Result<_>>()?;
        Ok(Lamination::from_parts(points, chords, polygons, self.radix))
    }

    /// `apply_function` spread over the rayon pool.
    pub fn par_apply_function<F>(&self, f: F) -> Lamination
    where
        F: Fn(&CirclePoint) -> CirclePoint + Sync + Send,
    {
        let points = self.points.par_iter().map(&f).collect();
        let chords = self
            .chords
            .par_iter()
            .map(|Chord(a, b)| Chord(f(a), f(b)))
            .collect();
        let polygons = self
            .polygons
            .par_iter()
            .map(|p| Polygon(p.vertices().iter().map(&f).collect()))
            .collect();
        Lamination::from_parts(points, chords, polygons, self.radix)
    }

    /// Pairs up corresponding points of two same-shaped laminations.
    ///
    /// The result takes `self`'s radix and carries no occlusion.
    pub fn zip_with<F>(&self, other: &Lamination, f: F) -> Result<Lamination>
    where
        F: Fn(&CirclePoint, &CirclePoint) -> CirclePoint,
    {
        self.check_shape(other)?;
        let points = self
            .points
            .iter()
            .zip(&other.points)
            .map(|(a, b)| f(a, b))
            .collect();
        let chords = self
            .chords
            .iter()
            .zip(&other.chords)
            .map(|(Chord(a0, b0), Chord(a1, b1))| Chord(f(a0, a1), f(b0, b1)))
            .collect();
        let polygons = self
            .polygons
            .iter()
            .zip(&other.polygons)
            .map(|(p, q)| {
                Polygon(
                    p.vertices()
                        .iter()
                        .zip(q.vertices())
                        .map(|(a, b)| f(a, b))
                        .collect(),
                )
            })
            .collect();
        Ok(Lamination::from_parts(points, chords, polygons, self.radix))
    }

    /// Keeps isolated points and polygons that satisfy `keep`.
    /// Polygons are judged by their representative vertex.
    pub(crate) fn retain_visible<F>(&self, keep: F) -> Lamination
    where
        F: Fn(&CirclePoint) -> bool,
    {
        let points = self.points.iter().filter(|p| keep(p)).cloned().collect();
        let polygons = self
            .polygons
            .iter()
            .filter(|p| keep(p.representative()))
            .cloned()
            .collect();
        Lamination::from_parts(points, self.chords.clone(), polygons, self.radix)
    }
}
