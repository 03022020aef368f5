//! Sentence tokenization.
//!
//! The adaptive chunker never looks inside a sentence boundary decision. It
//! asks a [`SentenceSplitter`] for an ordered list of sentences and works at
//! that granularity from then on.
//!
//! ## The Hard Part: Finding Sentences
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     Not a sentence end (abbreviation)
//! ```
//!
//! The default splitter uses Unicode Standard Annex #29 (UAX #29), which
//! handles decimal numbers, ellipses and many abbreviations. It is not a
//! trained model: a period followed by a capitalized word is a boundary.
//!
//! ## Plugging In Another Tokenizer
//!
//! Any `Fn(&str) -> Vec<String>` works as a splitter, which keeps tests
//! deterministic:
//!
//! ```rust
//! use adaptive_slabs::SentenceSplitter;
//!
//! let lines = |text: &str| -> Vec<String> {
//!     text.lines().map(str::to_string).collect()
//! };
//! assert_eq!(lines.split("one\ntwo"), vec!["one", "two"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into an ordered sequence of sentences.
///
/// Implementations must preserve document order and must not return
/// overlapping pieces.
pub trait SentenceSplitter: Send + Sync {
    /// Split `text` into sentences.
    fn split(&self, text: &str) -> Vec<String>;
}

impl<F> SentenceSplitter for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn split(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// UAX #29 sentence splitter.
///
/// Each sentence is trimmed of surrounding whitespace; whitespace-only
/// pieces are dropped.
///
/// ```rust
/// use adaptive_slabs::{SentenceSplitter, UnicodeSentences};
///
/// let sentences = UnicodeSentences.split("Hello world. How are you? Fine.");
/// assert_eq!(sentences, vec!["Hello world.", "How are you?", "Fine."]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentences;

impl SentenceSplitter for UnicodeSentences {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
