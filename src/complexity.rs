//! Text complexity scoring.
//!
//! A complexity score is a number in `[0, 1]`. Higher means denser or
//! longer-winded text, which the adaptive chunker answers with smaller
//! chunks and more overlap.
//!
//! ## Lexical Density
//!
//! ```text
//! "the cat sat on the mat"   tokens: 6, distinct: 5   density: 0.833
//! "go go go go"              tokens: 4, distinct: 1   density: 0.25
//! ```
//!
//! Raw density rarely reaches 1.0 on real prose, so it is divided by a
//! practical ceiling of 0.8 and clamped. Anything at or above 0.8 scores 1.0.
//!
//! ## Sentence Length
//!
//! Mean sentence length in characters, divided by a ceiling of 200 and
//! clamped. A chunk made of 200-character sentences scores 1.0.
//!
//! ## Combined
//!
//! The arithmetic mean of both. Each sub-measure is computed over the same
//! input, so the scorer re-tokenizes the text into sentences even when it is
//! handed a single sentence.

use std::collections::HashSet;
use std::sync::Arc;

use crate::{ComplexityMeasure, SentenceSplitter, UnicodeSentences};

/// Raw lexical density at or above this value scores 1.0.
pub const LEXICAL_DENSITY_CEILING: f64 = 0.8;

/// Mean sentence length (in characters) at or above this value scores 1.0.
pub const SENTENCE_LENGTH_CEILING: f64 = 200.0;

/// Normalized lexical density of `text`.
///
/// Words are maximal runs of alphanumeric characters or `_`, compared
/// case-insensitively. Returns 0.0 when there are no words.
///
/// ```rust
/// use adaptive_slabs::complexity::lexical_density;
///
/// assert_eq!(lexical_density("go go go go"), 0.25 / 0.8);
/// assert_eq!(lexical_density("every word differs"), 1.0);
/// assert_eq!(lexical_density("..."), 0.0);
/// ```
#[must_use]
pub fn lexical_density(text: &str) -> f64 {
    let words: Vec<String> = words(text).map(str::to_lowercase).collect();
    if words.is_empty() {
        return 0.0;
    }

    let distinct: HashSet<&str> = words.iter().map(String::as_str).collect();
    let density = distinct.len() as f64 / words.len() as f64;
    (density / LEXICAL_DENSITY_CEILING).min(1.0)
}

/// Normalized mean length of `sentences`, measured in characters.
///
/// Returns 0.0 for an empty slice.
#[must_use]
pub fn sentence_length<S: AsRef<str>>(sentences: &[S]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }

    let total: usize = sentences.iter().map(|s| s.as_ref().chars().count()).sum();
    let mean = total as f64 / sentences.len() as f64;
    (mean / SENTENCE_LENGTH_CEILING).min(1.0)
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
}

/// Scores text complexity with a fixed measure.
///
/// Scoring is deterministic and has no side effects, so one scorer can be
/// applied to single sentences during segmentation and to finished chunks
/// afterwards.
///
/// ```rust
/// use adaptive_slabs::{ComplexityMeasure, ComplexityScorer};
///
/// let scorer = ComplexityScorer::new(ComplexityMeasure::Combined);
/// let score = scorer.score("A short sentence. Another short one.");
/// assert!((0.0..=1.0).contains(&score));
/// assert_eq!(scorer.score("   "), 0.0);
/// ```
#[derive(Clone)]
pub struct ComplexityScorer {
    measure: ComplexityMeasure,
    splitter: Arc<dyn SentenceSplitter>,
}

impl ComplexityScorer {
    /// Create a scorer using the UAX #29 sentence splitter.
    #[must_use]
    pub fn new(measure: ComplexityMeasure) -> Self {
        Self::with_splitter(measure, Arc::new(UnicodeSentences))
    }

    /// Create a scorer using a custom sentence splitter.
    #[must_use]
    pub fn with_splitter(measure: ComplexityMeasure, splitter: Arc<dyn SentenceSplitter>) -> Self {
        Self { measure, splitter }
    }

    /// The measure this scorer applies.
    #[must_use]
    pub fn measure(&self) -> ComplexityMeasure {
        self.measure
    }

    /// Complexity of `text` in `[0, 1]`. Empty or whitespace-only text scores 0.0.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let density = if self.measure.uses_lexical_density() {
            lexical_density(text)
        } else {
            0.0
        };

        let length = if self.measure.uses_sentence_length() {
            sentence_length(&self.splitter.split(text))
        } else {
            0.0
        };

        match self.measure {
            ComplexityMeasure::LexicalDensity => density,
            ComplexityMeasure::SentenceLength => length,
            ComplexityMeasure::Combined => (density + length) / 2.0,
        }
    }
}

impl std::fmt::Debug for ComplexityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplexityScorer")
            .field("measure", &self.measure)
            .finish_non_exhaustive()
    }
}
