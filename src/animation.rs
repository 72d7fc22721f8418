//! # Morph animation driver
//!
//! [`Interpolation`] is the only piece an animation engine needs: a pure
//! function from `t` in `[0, 1]` to a lamination. [`MorphOcclusion`]
//! builds one from a source lamination and an arc to close up.
//!
//! Frames do not depend on each other, so they can be rendered in any
//! order or in parallel.

use rayon::prelude::*;
use tracing::debug;

use crate::config::{AnimationConfig, SeamPolicy};
use crate::error::{LaminationError, Result};
use crate::lamination::Lamination;
use crate::ops::{interpolate_with, remove_occluded, result, Occlusion};

/// Point-wise interpolation between two same-shaped laminations.
#[derive(Debug, Clone)]
pub struct Interpolation {
    initial: Lamination,
    target: Lamination,
    seam: SeamPolicy,
}

impl Interpolation {
    pub fn new(initial: Lamination, target: Lamination) -> Result<Self> {
        initial.check_shape(&target)?;
        Ok(Self {
            initial,
            target,
            seam: SeamPolicy::default(),
        })
    }

    pub fn with_seam(mut self, seam: SeamPolicy) -> Self {
        self.seam = seam;
        self
    }

    pub fn initial(&self) -> &Lamination {
        &self.initial
    }

    pub fn target(&self) -> &Lamination {
        &self.target
    }

    pub fn seam(&self) -> SeamPolicy {
        self.seam
    }

    pub fn at(&self, t: f64) -> Result<Lamination> {
        interpolate_with(&self.initial, &self.target, t, self.seam)
    }

    /// Evenly spaced frames, evaluated on the rayon pool, returned in `t` order.
    ///
    /// The config's seam policy overrides the one set on `self`.
    pub fn frames(&self, config: &AnimationConfig) -> Result<Vec<Lamination>> {
        config.validate()?;
        debug!(
            frame_count = config.frame_count,
            seam = ?config.seam,
            "sampling interpolation"
        );
        (0..config.frame_count)
            .into_par_iter()
            .map(|i| interpolate_with(&self.initial, &self.target, config.parameter(i), config.seam))
            .collect()
    }
}

/// Closes up an occluded arc of a lamination.
///
/// The reported initial frame hides everything inside the arc; the final
/// frame is that same visible part sent through the morph, so the two
/// always share a shape.
#[derive(Debug, Clone)]
pub struct MorphOcclusion {
    occlusion: Occlusion,
    interpolation: Interpolation,
}

impl MorphOcclusion {
    pub fn new(source: &Lamination, occlusion: Occlusion) -> Result<Self> {
        Self::from_occluded(&source.clone().with_occlusion(occlusion))
    }

    /// Uses the occlusion already assigned to `source`.
    pub fn from_occluded(source: &Lamination) -> Result<Self> {
        let occlusion = source
            .occlusion()
            .cloned()
            .ok_or(LaminationError::MissingOcclusion)?;
        let reported_initial = remove_occluded(source, &occlusion);
        let reported_final = result(&reported_initial.clone().with_occlusion(occlusion.clone()))?;

        debug!(
            start = %occlusion.start(),
            end = %occlusion.end(),
            bite = occlusion.bite_length(),
            polygons_hidden = source.polygons().len() - reported_initial.polygons().len(),
            points_hidden = source.points().len() - reported_initial.points().len(),
            "built occlusion morph"
        );

        Ok(Self {
            occlusion,
            interpolation: Interpolation::new(reported_initial, reported_final)?,
        })
    }

    pub fn occlusion(&self) -> &Occlusion {
        &self.occlusion
    }

    pub fn reported_initial(&self) -> &Lamination {
        self.interpolation.initial()
    }

    pub fn reported_final(&self) -> &Lamination {
        self.interpolation.target()
    }

    pub fn interpolation(&self) -> &Interpolation {
        &self.interpolation
    }

    pub fn at(&self, t: f64) -> Result<Lamination> {
        self.interpolation.at(t)
    }

    pub fn frames(&self, config: &AnimationConfig) -> Result<Vec<Lamination>> {
        self.interpolation.frames(config)
    }
}
