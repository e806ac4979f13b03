//! Evaluation settings.

use crate::verdict::BandPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tenet_criteria::CriteriaConfig;
use tenet_traits::Result;
use tracing::debug;

/// Everything an analysis run can be tuned with: per-philosophy thresholds,
/// the band policy and the number of statement periods kept.
///
/// Every field is optional in the JSON form, e.g.
///
/// ```json
/// { "bands": "inclusive", "buffett": { "min_gross_margin": 35.0 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenetConfig {
    /// Thresholds of each philosophy.
    #[serde(flatten)]
    pub criteria: CriteriaConfig,
    /// Boundary treatment of the "meets some" band.
    pub bands: BandPolicy,
    /// Most recent statement periods kept per store.
    pub periods: usize,
}

impl Default for TenetConfig {
    fn default() -> Self {
        Self {
            criteria: CriteriaConfig::default(),
            bands: BandPolicy::default(),
            periods: 5,
        }
    }
}

impl TenetConfig {
    /// Read a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Override the band policy.
    #[must_use]
    pub const fn with_bands(mut self, bands: BandPolicy) -> Self {
        self.bands = bands;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tenet_traits::TenetError;

    #[test]
    fn test_defaults() {
        let config = TenetConfig::default();
        assert_eq!(config.bands, BandPolicy::Strict);
        assert_eq!(config.periods, 5);
        assert_eq!(config.criteria, CriteriaConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"bands": "inclusive", "periods": 4, "buffett": {{"min_gross_margin": 35.0}}}}"#
        )
        .unwrap();

        let config = TenetConfig::load(file.path()).unwrap();
        assert_eq!(config.bands, BandPolicy::Inclusive);
        assert_eq!(config.periods, 4);
        assert_eq!(config.criteria.buffett.min_gross_margin, 35.0);
        assert_eq!(config.criteria.slater, CriteriaConfig::default().slater);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = TenetConfig::load(dir.path().join("absent.json"));
        assert!(matches!(missing, Err(TenetError::Io(_))));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(TenetConfig::load(&path), Err(TenetError::Json(_))));
    }

    #[test]
    fn test_with_bands() {
        let config = TenetConfig::default().with_bands(BandPolicy::Inclusive);
        assert_eq!(config.bands, BandPolicy::Inclusive);
    }
}
