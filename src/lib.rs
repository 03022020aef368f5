//! # adaptive-slabs
//!
//! Complexity-aware text chunking for retrieval-augmented generation (RAG).
//!
//! ## The Problem
//!
//! Documents have to be cut into chunks small enough to embed and large
//! enough to keep their meaning. A fixed chunk size treats every paragraph
//! the same, but text is not uniform:
//!
//! - A changelog of short, repetitive lines loses nothing in a large chunk
//! - A dense legal or technical passage blurs into a useless average
//!   embedding when too much of it shares one vector
//!
//! ## The Approach
//!
//! Score each sentence for complexity, keep a smoothed running value, and
//! let that value pick the chunk size and overlap as the document goes by:
//!
//! ```text
//! complexity:  0.1   0.1   0.2   0.8   0.9   0.9   0.3
//! sentences:   [S1    S2    S3]  [S3    S4]  [S4   S5    S6    S7]
//!              large chunk,      small chunk,
//!              little overlap    more overlap
//! ```
//!
//! Chunks are always whole sentences. A sentence longer than the target size
//! becomes its own chunk rather than being cut.
//!
//! ## Complexity Measures
//!
//! | Measure | Signal |
//! |---------|--------|
//! | `lexical_density` | distinct words / total words, ceiling 0.8 |
//! | `sentence_length` | mean sentence characters, ceiling 200 |
//! | `combined` | mean of the two |
//!
//! ## Quick Start
//!
//! ```rust
//! use adaptive_slabs::{AdaptiveChunker, AdaptiveConfig, Chunker, ComplexityMeasure};
//!
//! let config = AdaptiveConfig::default()
//!     .with_chunk_size(300, 1000)
//!     .with_chunk_overlap(30, 150)
//!     .with_measure(ComplexityMeasure::Combined);
//! let chunker = AdaptiveChunker::new(config)?;
//!
//! let chunks = chunker.chunk("The quick brown fox jumps over the lazy dog. \
//!                             Pack my box with five dozen liquor jugs.");
//!
//! for chunk in &chunks {
//!     println!("{} -> {}", chunk, chunk.text);
//! }
//! # Ok::<(), adaptive_slabs::Error>(())
//! ```
//!
//! ## Pipeline Stages
//!
//! [`Chunker::chunk`] runs three passes, each also available on its own:
//!
//! 1. [`AdaptiveChunker::segment`] / [`AdaptiveChunker::split`]: the greedy
//!    sentence pass
//! 2. [`AdaptiveChunker::create_chunks`]: ids, sizes and whole-chunk complexity
//! 3. [`annotate_size_stats`]: mean size and each chunk's ratio to it
//!
//! ## Logging
//!
//! Segmentation emits `tracing` events: `debug` when a chunk closes and once
//! per document, `trace` per sentence. Install a subscriber to see them.

mod adaptive;
mod bounds;
pub mod chunk;
pub mod complexity;
mod config;
mod error;
mod measure;
mod report;
mod sentence;

pub use adaptive::{annotate_size_stats, char_count, AdaptiveChunker, LengthFn};
pub use bounds::Bounds;
pub use chunk::{Chunk, ChunkMetadata, Segment, ADAPTIVE_CHUNK_TYPE};
pub use complexity::ComplexityScorer;
pub use config::{
    AdaptiveConfig, DEFAULT_MAX_CHUNK_OVERLAP, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_OVERLAP,
    DEFAULT_MIN_CHUNK_SIZE,
};
pub use error::{Error, Result};
pub use measure::ComplexityMeasure;
pub use report::{write_chunks, ChunkReport};
pub use sentence::{SentenceSplitter, UnicodeSentences};

/// A text chunking strategy.
///
/// ```rust
/// use adaptive_slabs::{AdaptiveChunker, AdaptiveConfig, Chunk, Chunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<Chunk> {
///     chunker.chunk(text)
/// }
///
/// let chunker = AdaptiveChunker::new(AdaptiveConfig::default()).unwrap();
/// let chunks = chunk_document(&chunker, "Hello world. This is a test.");
/// assert_eq!(chunks.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks with metadata attached.
    fn chunk(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}
