//! JSON ingest and egress for laminations.
//!
//! ```json
//! {"polygons": [["0_003", "0_030", "0_300"]], "chords": [], "points": [], "radix": 4}
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Chord, Lamination, Polygon};
use crate::error::{LaminationError, Result};
use crate::points::CirclePoint;

/// Label-level description of a lamination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaminationDescription {
    #[serde(default)]
    pub polygons: Vec<Vec<String>>,
    #[serde(default)]
    pub chords: Vec<(String, String)>,
    #[serde(default)]
    pub points: Vec<String>,
    pub radix: u32,
}

fn label_of(point: &CirclePoint) -> Result<String> {
    point
        .as_symbolic()
        .map(|p| p.label())
        .ok_or_else(|| LaminationError::NotSymbolic(point.to_float()))
}

impl LaminationDescription {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses every label in the lamination's radix.
    pub fn build(&self) -> Result<Lamination> {
        let radix = self.radix;
        let parse = |label: &String| CirclePoint::parse(label, radix);

        let points = self.points.iter().map(parse).collect::<Result<_>>()?;
        let chords = self
            .chords
            .iter()
            .map(|(a, b)| Ok(Chord(parse(a)?, parse(b)?)))
            .collect::<Result<_>>()?;
        let polygons = self
            .polygons
            .iter()
            .map(|labels| Polygon::new(labels.iter().map(parse).collect::<Result<_>>()?))
            .collect::<Result<_>>()?;

        debug!(
            radix,
            points = self.points.len(),
            chords = self.chords.len(),
            polygons = self.polygons.len(),
            "parsed lamination description"
        );
        Lamination::new(points, chords, polygons, radix)
    }
}

impl Lamination {
    pub fn from_description(description: &LaminationDescription) -> Result<Self> {
        description.build()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        LaminationDescription::from_json(json)?.build()
    }

    /// Labels for every point. Fails on the first numeric point.
    pub fn to_description(&self) -> Result<LaminationDescription> {
        Ok(LaminationDescription {
            polygons: self
                .polygons()
                .iter()
                .map(|p| p.vertices().iter().map(label_of).collect::<Result<Vec<_>>>())
                .collect::<Result<_>>()?,
            chords: self
                .chords()
                .iter()
                .map(|Chord(a, b)| Ok((label_of(a)?, label_of(b)?)))
                .collect::<Result<_>>()?,
            points: self.points().iter().map(label_of).collect::<Result<_>>()?,
            radix: self.radix(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_description()?.to_json()
    }
}
