//! Error types for adaptive-slabs.

/// Errors that can occur while configuring a chunker or reporting its output.
///
/// Segmentation itself never fails: empty input yields no chunks and
/// zero-length sentences are skipped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Minimum chunk size exceeds maximum chunk size.
    #[error("min chunk size {min} exceeds max chunk size {max}")]
    InvalidSizeRange {
        /// The configured minimum.
        min: usize,
        /// The configured maximum.
        max: usize,
    },

    /// Minimum overlap exceeds maximum overlap.
    #[error("min chunk overlap {min} exceeds max chunk overlap {max}")]
    InvalidOverlapRange {
        /// The configured minimum.
        min: usize,
        /// The configured maximum.
        max: usize,
    },

    /// A complexity measure name that is not one of the known measures.
    #[error("unknown complexity measure: {0:?} (expected lexical_density, sentence_length or combined)")]
    UnknownMeasure(String),

    /// Writing a report failed.
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing chunk metadata failed.
    #[error("metadata serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for adaptive-slabs operations.
pub type Result<T> = std::result::Result<T, Error>;
