//! Animation driver settings.

use serde::{Deserialize, Serialize};

use crate::error::{LaminationError, Result};

/// How a point travels from its initial to its final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeamPolicy {
    /// Shorter way around the circle. A half-turn tie goes forward.
    #[default]
    Shortest,
    /// Plain blend of the two floats. Never crosses the 0/1 seam, so it
    /// may go the long way round.
    Linear,
}

/// Settings for sampling an interpolation into frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Samples of `t` in `[0, 1]`, both endpoints included.
    /// Range: `>= 2`
    pub frame_count: usize,

    pub seam: SeamPolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_count: 60,
            seam: SeamPolicy::Shortest,
        }
    }
}

impl AnimationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_count < 2 {
            return Err(LaminationError::InvalidConfig(format!(
                "frame_count must be at least 2, got {}",
                self.frame_count
            )));
        }
        Ok(())
    }

    /// The `t` of frame `index`. An unvalidated single-frame config samples `t = 0`.
    #[inline]
    pub fn parameter(&self, index: usize) -> f64 {
        index as f64 / self.frame_count.saturating_sub(1).max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnimationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seam, SeamPolicy::Shortest);
        assert_eq!(config.parameter(0), 0.0);
        assert_eq!(config.parameter(config.frame_count - 1), 1.0);
    }

    #[test]
    fn test_from_json() {
        let config = AnimationConfig::from_json(r#"{"frame_count": 5, "seam": "linear"}"#).unwrap();
        assert_eq!(config.frame_count, 5);
        assert_eq!(config.seam, SeamPolicy::Linear);
        assert_eq!(config.parameter(2), 0.5);

        let partial = AnimationConfig::from_json(r#"{"frame_count": 3}"#).unwrap();
        assert_eq!(partial.seam, SeamPolicy::Shortest);
    }

    #[test]
    fn test_parameter_without_validation() {
        for frame_count in [0, 1] {
            let config = AnimationConfig {
                frame_count,
                ..AnimationConfig::default()
            };
            assert!(config.validate().is_err());
            assert_eq!(config.parameter(0), 0.0);
        }
    }

    #[test]
    fn test_single_frame_rejected() {
        let err = AnimationConfig::from_json(r#"{"frame_count": 1}"#).unwrap_err();
        assert!(matches!(err, LaminationError::InvalidConfig(_)));
        assert!(matches!(
            AnimationConfig::from_json(r#"{"seam": "sideways"}"#),
            Err(LaminationError::Json(_))
        ));
    }
}
