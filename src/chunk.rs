//! Chunk records: text plus metadata.
//!
//! Adaptive chunks are built from sentences joined by single spaces, so they
//! do not map back to byte offsets in the source. What they carry instead is
//! metadata for the index:
//!
//! ```json
//! {
//!     "chunk_id": 0,
//!     "total_chunks": 12,
//!     "chunk_size": 874,
//!     "chunk_type": "adaptive",
//!     "text_complexity": 0.412,
//!     "avg_chunk_size": 801.3,
//!     "size_vs_avg": 1.09
//! }
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `chunk_type` of every chunk this crate produces.
pub const ADAPTIVE_CHUNK_TYPE: &str = "adaptive";

/// Metadata keys owned by the chunker. Caller metadata never overrides them.
pub const RESERVED_KEYS: [&str; 7] = [
    "chunk_id",
    "total_chunks",
    "chunk_size",
    "chunk_type",
    "text_complexity",
    "avg_chunk_size",
    "size_vs_avg",
];

/// A finished chunk, ready to embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Constituent sentences joined by single spaces.
    pub text: String,
    /// Position, size and complexity information.
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// The chunk length as measured by the chunker.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metadata.chunk_size
    }

    /// Whether the chunk has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ id: {}/{}, size: {}, complexity: {:.3} }}",
            self.metadata.chunk_id,
            self.metadata.total_chunks,
            self.metadata.chunk_size,
            self.metadata.text_complexity
        )
    }
}

/// Metadata attached to each [`Chunk`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Zero-based position in the output.
    pub chunk_id: usize,
    /// Number of chunks in the output.
    pub total_chunks: usize,
    /// Length of the chunk text.
    pub chunk_size: usize,
    /// Always [`ADAPTIVE_CHUNK_TYPE`].
    pub chunk_type: String,
    /// Complexity of the whole chunk text, rounded to 3 decimals.
    pub text_complexity: f64,
    /// Mean chunk size across the output, rounded to 1 decimal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_chunk_size: Option<f64>,
    /// This chunk's size divided by the mean, rounded to 2 decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_vs_avg: Option<f64>,
    /// Caller-supplied metadata.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One output window of the segmentation pass, before metadata is attached.
///
/// `sentences` indexes into the sentence sequence the tokenizer produced for
/// the document, after zero-length sentences were skipped. The first
/// `overlap` sentences repeat the tail of the previous segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Sentences joined by single spaces.
    pub text: String,
    /// Range of sentence indices this segment covers.
    pub sentences: Range<usize>,
    /// Number of leading sentences shared with the previous segment.
    pub overlap: usize,
}

impl Segment {
    /// Sentence indices that appear in this segment for the first time.
    #[must_use]
    pub fn fresh(&self) -> Range<usize> {
        self.sentences.start + self.overlap..self.sentences.end
    }
}

/// Round to `decimals` places, ties to even.
///
/// Ties are judged on the exact binary value: `0.125` is a true tie and
/// rounds to `0.12`, while `2.675` is stored just below the tie and rounds
/// to `2.67`. The scaled product can land on `.5` through rounding alone, so
/// the fused residual decides which side the exact product lies on.
#[allow(clippy::float_cmp)]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;

    let rounded = if scaled.fract().abs() == 0.5 {
        let residual = value.mul_add(factor, -scaled);
        if residual > 0.0 {
            scaled.ceil()
        } else if residual < 0.0 {
            scaled.floor()
        } else {
            scaled.round_ties_even()
        }
    } else {
        scaled.round_ties_even()
    };

    rounded / factor
}
