//! Tunable draw and synthesis policy.
//!
//! The thresholds here are heuristics, not fixed rules, so they live in one
//! serde-friendly struct. Any field left out of a JSON document keeps its
//! default.

use serde::{Deserialize, Serialize};

use crate::reading_engine::error::{ReadingError, ReadingResult};

/// Smallest excerpt length that still leaves room for a few words.
pub const MIN_EXCERPT_LIMIT: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Fisher-Yates passes per draw. Draws never run fewer than two.
    pub shuffle_passes: usize,
    /// Major Arcana dominate when their count exceeds `floor(share * total)`.
    pub major_dominance_share: f64,
    /// Reversal ratio at or above which the reading reads as resistance.
    pub heavy_reversal_ratio: f64,
    /// Maximum characters per role excerpt.
    pub excerpt_limit: usize,
    /// Skip a role clause when its card already spoke for an earlier role.
    pub dedupe_roles: bool,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        ReadingConfig {
            shuffle_passes: 3,
            major_dominance_share: 0.4,
            heavy_reversal_ratio: 0.5,
            excerpt_limit: 180,
            dedupe_roles: false,
        }
    }
}

impl ReadingConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> ReadingResult<Self> {
        let config: ReadingConfig = serde_json::from_str(json)
            .map_err(|e| ReadingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ReadingResult<()> {
        if !(0.0..=1.0).contains(&self.major_dominance_share) {
            return Err(ReadingError::InvalidConfig(format!(
                "major_dominance_share must be within 0..=1 (got {})",
                self.major_dominance_share
            )));
        }
        if !(0.0..=1.0).contains(&self.heavy_reversal_ratio) {
            return Err(ReadingError::InvalidConfig(format!(
                "heavy_reversal_ratio must be within 0..=1 (got {})",
                self.heavy_reversal_ratio
            )));
        }
        if self.excerpt_limit < MIN_EXCERPT_LIMIT {
            return Err(ReadingError::InvalidConfig(format!(
                "excerpt_limit must be at least {MIN_EXCERPT_LIMIT} (got {})",
                self.excerpt_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ReadingConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ReadingConfig::from_json(r#"{ "excerpt_limit": 120 }"#).expect("valid");
        assert_eq!(config.excerpt_limit, 120);
        assert_eq!(config.shuffle_passes, 3);
        assert_eq!(config.major_dominance_share, 0.4);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ReadingConfig::from_json("{}"), Ok(ReadingConfig::default()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        for json in [
            r#"{ "major_dominance_share": 1.5 }"#,
            r#"{ "heavy_reversal_ratio": -0.1 }"#,
            r#"{ "excerpt_limit": 3 }"#,
        ] {
            assert!(
                matches!(ReadingConfig::from_json(json), Err(ReadingError::InvalidConfig(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ReadingConfig::from_json("{ shuffle_passes: "),
            Err(ReadingError::InvalidConfig(_))
        ));
    }
}
