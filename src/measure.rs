//! Complexity measure selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Which signal drives the complexity score.
///
/// ```rust
/// use adaptive_slabs::ComplexityMeasure;
///
/// let measure: ComplexityMeasure = "sentence_length".parse().unwrap();
/// assert_eq!(measure, ComplexityMeasure::SentenceLength);
/// assert!("readability".parse::<ComplexityMeasure>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityMeasure {
    /// Ratio of distinct words to total words.
    LexicalDensity,
    /// Mean sentence length in characters.
    SentenceLength,
    /// Arithmetic mean of lexical density and sentence length.
    #[default]
    Combined,
}

impl ComplexityMeasure {
    /// Whether the lexical density sub-measure contributes to the score.
    #[must_use]
    pub const fn uses_lexical_density(self) -> bool {
        matches!(self, Self::LexicalDensity | Self::Combined)
    }

    /// Whether the sentence length sub-measure contributes to the score.
    #[must_use]
    pub const fn uses_sentence_length(self) -> bool {
        matches!(self, Self::SentenceLength | Self::Combined)
    }

    /// The configuration name of this measure.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LexicalDensity => "lexical_density",
            Self::SentenceLength => "sentence_length",
            Self::Combined => "combined",
        }
    }
}

impl FromStr for ComplexityMeasure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexical_density" => Ok(Self::LexicalDensity),
            "sentence_length" => Ok(Self::SentenceLength),
            "combined" => Ok(Self::Combined),
            other => Err(Error::UnknownMeasure(other.to_string())),
        }
    }
}

impl std::fmt::Display for ComplexityMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
