//! Adaptive chunker configuration.

use serde::{Deserialize, Serialize};

use crate::{Bounds, ComplexityMeasure, Error, Result};

/// Default smallest target size, used for the most complex text.
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 300;
/// Default largest target size, used for the simplest text.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;
/// Default smallest overlap.
pub const DEFAULT_MIN_CHUNK_OVERLAP: usize = 30;
/// Default largest overlap.
pub const DEFAULT_MAX_CHUNK_OVERLAP: usize = 150;

/// Size and overlap ranges plus the complexity measure that moves within them.
///
/// Sizes and overlaps are in units of the chunker's length function, which
/// counts characters unless replaced.
///
/// Every field has a default, so partial JSON works:
///
/// ```rust
/// use adaptive_slabs::{AdaptiveConfig, ComplexityMeasure};
///
/// let config: AdaptiveConfig =
///     serde_json::from_str(r#"{"max_chunk_size": 800, "complexity_measure": "lexical_density"}"#)
///         .unwrap();
/// assert_eq!(config.min_chunk_size, 300);
/// assert_eq!(config.max_chunk_size, 800);
/// assert_eq!(config.complexity_measure, ComplexityMeasure::LexicalDensity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveConfig {
    /// Target size at complexity 1.0.
    pub min_chunk_size: usize,
    /// Target size at complexity 0.0.
    pub max_chunk_size: usize,
    /// Overlap budget at complexity 0.0.
    pub min_chunk_overlap: usize,
    /// Overlap budget at complexity 1.0.
    pub max_chunk_overlap: usize,
    /// How complexity is measured.
    pub complexity_measure: ComplexityMeasure,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            min_chunk_overlap: DEFAULT_MIN_CHUNK_OVERLAP,
            max_chunk_overlap: DEFAULT_MAX_CHUNK_OVERLAP,
            complexity_measure: ComplexityMeasure::default(),
        }
    }
}

impl AdaptiveConfig {
    /// Set the chunk size range.
    #[must_use]
    pub fn with_chunk_size(mut self, min: usize, max: usize) -> Self {
        self.min_chunk_size = min;
        self.max_chunk_size = max;
        self
    }

    /// Set the overlap range.
    #[must_use]
    pub fn with_chunk_overlap(mut self, min: usize, max: usize) -> Self {
        self.min_chunk_overlap = min;
        self.max_chunk_overlap = max;
        self
    }

    /// Set the complexity measure.
    #[must_use]
    pub fn with_measure(mut self, measure: ComplexityMeasure) -> Self {
        self.complexity_measure = measure;
        self
    }

    /// The validated chunk size range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSizeRange`] if `min_chunk_size > max_chunk_size`.
    pub fn size_bounds(&self) -> Result<Bounds> {
        Bounds::new(self.min_chunk_size, self.max_chunk_size)
    }

    /// The validated overlap range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOverlapRange`] if `min_chunk_overlap > max_chunk_overlap`.
    pub fn overlap_bounds(&self) -> Result<Bounds> {
        Bounds::new(self.min_chunk_overlap, self.max_chunk_overlap).map_err(|_| {
            Error::InvalidOverlapRange {
                min: self.min_chunk_overlap,
                max: self.max_chunk_overlap,
            }
        })
    }

    /// Check both ranges.
    ///
    /// # Errors
    ///
    /// Returns the first range error found, sizes before overlaps.
    pub fn validate(&self) -> Result<()> {
        self.size_bounds()?;
        self.overlap_bounds()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdaptiveConfig::default();
        assert_eq!(config.min_chunk_size, 300);
        assert_eq!(config.max_chunk_size, 1000);
        assert_eq!(config.min_chunk_overlap, 30);
        assert_eq!(config.max_chunk_overlap, 150);
        assert_eq!(config.complexity_measure, ComplexityMeasure::Combined);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AdaptiveConfig::default()
            .with_chunk_size(100, 120)
            .with_chunk_overlap(10, 20)
            .with_measure(ComplexityMeasure::SentenceLength);

        assert_eq!(config.size_bounds().unwrap(), Bounds::from(100..=120));
        assert_eq!(config.overlap_bounds().unwrap(), Bounds::from(10..=20));
        assert_eq!(config.complexity_measure, ComplexityMeasure::SentenceLength);
    }

    #[test]
    fn test_invalid_size_range() {
        let config = AdaptiveConfig::default().with_chunk_size(500, 100);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidSizeRange { min: 500, max: 100 })
        ));
    }

    #[test]
    fn test_invalid_overlap_range() {
        let config = AdaptiveConfig::default().with_chunk_overlap(40, 20);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidOverlapRange { min: 40, max: 20 })
        ));
    }

    #[test]
    fn test_unknown_measure_rejected_on_deserialize() {
        let result = serde_json::from_str::<AdaptiveConfig>(r#"{"complexity_measure": "vibes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_config_names() {
        let json = serde_json::to_value(AdaptiveConfig::default()).unwrap();
        assert_eq!(json["complexity_measure"], "combined");
        assert_eq!(json["max_chunk_overlap"], 150);
    }
}
