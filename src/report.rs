//! Summaries and dumps of chunking output.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{Chunk, Result};

/// Complexity and size statistics over one chunking run.
///
/// ```rust
/// use adaptive_slabs::{AdaptiveChunker, AdaptiveConfig, Chunker, ChunkReport};
///
/// let chunker = AdaptiveChunker::new(AdaptiveConfig::default()).unwrap();
/// let chunks = chunker.chunk("One sentence here. And another one.");
/// let report = ChunkReport::from_chunks(&chunks).unwrap();
/// assert_eq!(report.total_chunks, 1);
/// assert!(ChunkReport::from_chunks(&[]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkReport {
    /// Number of chunks.
    pub total_chunks: usize,
    /// Mean of the per-chunk complexity scores.
    pub avg_complexity: f64,
    /// Lowest per-chunk complexity.
    pub min_complexity: f64,
    /// Highest per-chunk complexity.
    pub max_complexity: f64,
    /// Mean chunk size.
    pub avg_size: f64,
    /// Smallest chunk size.
    pub min_size: usize,
    /// Largest chunk size.
    pub max_size: usize,
    /// Index of the first chunk with the highest complexity.
    pub most_complex: usize,
    /// Index of the first chunk with the lowest complexity.
    pub least_complex: usize,
}

impl ChunkReport {
    /// Summarize `chunks`. Returns `None` when there are no chunks.
    #[must_use]
    pub fn from_chunks(chunks: &[Chunk]) -> Option<Self> {
        let first = chunks.first()?;
        let count = chunks.len() as f64;

        let mut report = Self {
            total_chunks: chunks.len(),
            avg_complexity: 0.0,
            min_complexity: first.metadata.text_complexity,
            max_complexity: first.metadata.text_complexity,
            avg_size: 0.0,
            min_size: first.metadata.chunk_size,
            max_size: first.metadata.chunk_size,
            most_complex: 0,
            least_complex: 0,
        };

        let mut complexity_sum = 0.0;
        let mut size_sum = 0usize;

        for (i, chunk) in chunks.iter().enumerate() {
            let complexity = chunk.metadata.text_complexity;
            let size = chunk.metadata.chunk_size;

            complexity_sum += complexity;
            size_sum += size;

            if complexity > report.max_complexity {
                report.max_complexity = complexity;
                report.most_complex = i;
            }
            if complexity < report.min_complexity {
                report.min_complexity = complexity;
                report.least_complex = i;
            }
            report.min_size = report.min_size.min(size);
            report.max_size = report.max_size.max(size);
        }

        report.avg_complexity = complexity_sum / count;
        report.avg_size = size_sum as f64 / count;
        Some(report)
    }
}

impl std::fmt::Display for ChunkReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total adaptive chunks: {}", self.total_chunks)?;
        writeln!(f)?;
        writeln!(f, "----- COMPLEXITY ANALYSIS -----")?;
        writeln!(f, "Average complexity: {:.3}", self.avg_complexity)?;
        writeln!(f, "Min complexity: {:.3}", self.min_complexity)?;
        writeln!(f, "Max complexity: {:.3}", self.max_complexity)?;
        writeln!(f)?;
        writeln!(f, "----- SIZE ANALYSIS -----")?;
        writeln!(f, "Average chunk size: {:.1} characters", self.avg_size)?;
        writeln!(f, "Min chunk size: {} characters", self.min_size)?;
        write!(f, "Max chunk size: {} characters", self.max_size)
    }
}

/// Write every chunk with its metadata as four-space indented JSON.
///
/// ```text
/// --- Chunk 0 ---
///
/// <text>
///
/// Metadata:
/// {
///     "chunk_id": 0,
///     ...
/// }
/// ```
///
/// # Errors
///
/// Returns an error if writing or serializing fails.
pub fn write_chunks<W: Write>(mut writer: W, chunks: &[Chunk]) -> Result<()> {
    for (i, chunk) in chunks.iter().enumerate() {
        write!(writer, "--- Chunk {i} ---\n\n")?;
        write!(writer, "{}\n\n", chunk.text)?;
        writeln!(writer, "Metadata:")?;

        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        chunk.metadata.serialize(&mut serializer)?;

        write!(writer, "\n\n")?;
    }
    writer.flush()?;
    Ok(())
}
