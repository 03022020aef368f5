//! Complexity-aware adaptive chunking.
//!
//! Sentence-aligned chunks whose size and overlap follow the local
//! complexity of the text.
//!
//! ## The Algorithm
//!
//! One forward pass over the sentences, carrying a running complexity:
//!
//! ```text
//! for each sentence s:
//!     c = score(s)
//!     running = pending.is_empty() ? c : (running + c) / 2
//!     target_size    = max_size    - running * (max_size - min_size)
//!     target_overlap = min_overlap + running * (max_overlap - min_overlap)
//!
//!     if pending not empty and pending_len + len(s) > target_size:
//!         emit pending
//!         pending = trailing sentences of pending that fit in target_overlap, then s
//!     else:
//!         pending += s
//! emit pending
//! ```
//!
//! The running value is not a true mean: each update halves the distance to
//! the newest sample, so it tracks recent text.
//!
//! ## Overlap Windows
//!
//! The overlap walks the closed chunk backwards and stops at the first
//! sentence that would push it past `target_overlap`. Whole sentences only:
//!
//! ```text
//! closed:  [S1 S2 S3 S4]        target_overlap = 60
//! lengths:  40 25 30 20
//!                    <-- S4 (20) fits, S3 (50) fits, S2 (75) does not
//! next:    [S3 S4 S5]
//! ```
//!
//! If even the last sentence is longer than `target_overlap`, the next chunk
//! starts with the triggering sentence alone.
//!
//! ## Oversized Sentences
//!
//! A sentence is never split. One longer than the target size becomes a chunk
//! of its own when the next sentence arrives, or stands alone at the end.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::chunk::{round_to, RESERVED_KEYS};
use crate::{
    AdaptiveConfig, Bounds, Chunk, ChunkMetadata, Chunker, ComplexityScorer, Result, Segment,
    SentenceSplitter, UnicodeSentences, ADAPTIVE_CHUNK_TYPE,
};

/// Measures the length of a piece of text.
pub type LengthFn = Arc<dyn Fn(&str) -> usize + Send + Sync>;

/// Length in characters (Unicode scalar values).
#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Adaptive chunker.
///
/// ## Example
///
/// ```rust
/// use adaptive_slabs::{AdaptiveChunker, AdaptiveConfig, Chunker};
///
/// let config = AdaptiveConfig::default().with_chunk_size(5, 1000);
/// let chunker = AdaptiveChunker::new(config).unwrap();
///
/// let chunks = chunker.chunk("A short sentence. Another short one. A third brief sentence.");
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].metadata.chunk_id, 0);
/// assert_eq!(chunks[0].metadata.total_chunks, 1);
/// ```
#[derive(Clone)]
pub struct AdaptiveChunker {
    config: AdaptiveConfig,
    size: Bounds,
    overlap: Bounds,
    splitter: Arc<dyn SentenceSplitter>,
    scorer: ComplexityScorer,
    length: LengthFn,
}

impl AdaptiveChunker {
    /// Create a chunker with the UAX #29 sentence splitter and character lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured minimum exceeds its maximum.
    pub fn new(config: AdaptiveConfig) -> Result<Self> {
        config.validate()?;
        let size = config.size_bounds()?;
        let overlap = config.overlap_bounds()?;
        let splitter: Arc<dyn SentenceSplitter> = Arc::new(UnicodeSentences);

        Ok(Self {
            config,
            size,
            overlap,
            scorer: ComplexityScorer::with_splitter(config.complexity_measure, splitter.clone()),
            splitter,
            length: Arc::new(char_count),
        })
    }

    /// Use a different sentence splitter, for segmentation and scoring alike.
    #[must_use]
    pub fn with_splitter(mut self, splitter: impl SentenceSplitter + 'static) -> Self {
        let splitter: Arc<dyn SentenceSplitter> = Arc::new(splitter);
        self.scorer =
            ComplexityScorer::with_splitter(self.config.complexity_measure, splitter.clone());
        self.splitter = splitter;
        self
    }

    /// Measure sizes and overlaps with `length` instead of character count.
    #[must_use]
    pub fn with_length_fn(
        mut self,
        length: impl Fn(&str) -> usize + Send + Sync + 'static,
    ) -> Self {
        self.length = Arc::new(length);
        self
    }

    /// The configuration this chunker was built with.
    #[must_use]
    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// The scorer used for sentences and finished chunks.
    #[must_use]
    pub fn scorer(&self) -> &ComplexityScorer {
        &self.scorer
    }

    /// Run the segmentation pass, keeping sentence bookkeeping.
    ///
    /// Returns no segments for empty input.
    #[must_use]
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return vec![];
        }

        let sentences: Vec<Sentence> = self
            .splitter
            .split(text)
            .into_iter()
            .filter_map(|text| {
                let len = (self.length)(&text);
                (len > 0).then_some(Sentence { text, len })
            })
            .collect();

        let mut segments = Vec::new();
        let mut run = RunState::default();

        for (index, sentence) in sentences.iter().enumerate() {
            let score = self.scorer.score(&sentence.text);
            run.observe(score);

            let target_size = self.size.shrink(run.complexity);
            let target_overlap = self.overlap.grow(run.complexity);

            trace!(
                index,
                len = sentence.len,
                score,
                running = run.complexity,
                target_size,
                target_overlap,
                "sentence"
            );

            if !run.is_empty() && (run.size + sentence.len) as f64 > target_size {
                debug!(
                    chunk = segments.len(),
                    sentences = run.end - run.start,
                    size = run.size,
                    target_size,
                    "closing chunk"
                );
                segments.push(run.emit(&sentences));
                run.restart(&sentences, index, target_overlap);
            } else {
                run.push(index, sentence.len);
            }
        }

        if !run.is_empty() {
            segments.push(run.emit(&sentences));
        }

        debug!(
            sentences = sentences.len(),
            chunks = segments.len(),
            measure = %self.config.complexity_measure,
            "segmented document"
        );

        segments
    }

    /// Split text into chunk texts.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        self.segment(text).into_iter().map(|s| s.text).collect()
    }

    /// Wrap chunk texts in [`Chunk`]s with per-chunk metadata.
    ///
    /// Each chunk is re-scored as a whole. `extra[i]` is merged into chunk
    /// `i`'s metadata when present; keys the chunker owns are skipped.
    /// Size statistics are left unset; see [`annotate_size_stats`].
    #[must_use]
    pub fn create_chunks<S: AsRef<str>>(
        &self,
        texts: &[S],
        extra: &[Map<String, Value>],
    ) -> Vec<Chunk> {
        let total_chunks = texts.len();

        texts
            .iter()
            .enumerate()
            .map(|(chunk_id, text)| {
                let text: &str = text.as_ref();
                let extra: Map<String, Value> = extra
                    .get(chunk_id)
                    .map(|meta| {
                        meta.iter()
                            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
                            .map(|(key, value)| (key.clone(), value.clone()))
                            .collect()
                    })
                    .unwrap_or_default();

                Chunk {
                    text: text.to_string(),
                    metadata: ChunkMetadata {
                        chunk_id,
                        total_chunks,
                        chunk_size: (self.length)(text),
                        chunk_type: ADAPTIVE_CHUNK_TYPE.to_string(),
                        text_complexity: round_to(self.scorer.score(text), 3),
                        avg_chunk_size: None,
                        size_vs_avg: None,
                        extra,
                    },
                }
            })
            .collect()
    }
}

impl Chunker for AdaptiveChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        let texts = self.split(text);
        let mut chunks = self.create_chunks(&texts, &[]);
        annotate_size_stats(&mut chunks);
        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        let midpoint = (self.size.min() + self.size.max()) / 2;
        if midpoint == 0 {
            return text_len.max(1);
        }
        text_len.div_ceil(midpoint).max(1)
    }
}

impl std::fmt::Debug for AdaptiveChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptiveChunker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Attach the mean chunk size and each chunk's ratio to it.
///
/// The mean is rounded to 1 decimal and the ratio to 2, the ratio being taken
/// against the unrounded mean. Does nothing for an empty slice.
pub fn annotate_size_stats(chunks: &mut [Chunk]) {
    if chunks.is_empty() {
        return;
    }

    let total: usize = chunks.iter().map(|c| c.metadata.chunk_size).sum();
    let avg = total as f64 / chunks.len() as f64;

    for chunk in chunks.iter_mut() {
        let ratio = if avg > 0.0 {
            chunk.metadata.chunk_size as f64 / avg
        } else {
            0.0
        };
        chunk.metadata.avg_chunk_size = Some(round_to(avg, 1));
        chunk.metadata.size_vs_avg = Some(round_to(ratio, 2));
    }
}

struct Sentence {
    text: String,
    len: usize,
}

/// Mutable state of one segmentation run.
///
/// The pending chunk is always a contiguous run of sentences, so it is kept
/// as an index range.
#[derive(Debug)]
struct RunState {
    start: usize,
    end: usize,
    overlap: usize,
    size: usize,
    complexity: f64,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            overlap: 0,
            size: 0,
            complexity: 0.5,
        }
    }
}

impl RunState {
    fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn observe(&mut self, score: f64) {
        self.complexity = if self.is_empty() {
            score
        } else {
            (self.complexity + score) / 2.0
        };
    }

    fn push(&mut self, index: usize, len: usize) {
        if self.is_empty() {
            self.start = index;
        }
        self.end = index + 1;
        self.size += len;
    }

    fn emit(&self, sentences: &[Sentence]) -> Segment {
        let text = sentences[self.start..self.end]
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Segment {
            text,
            sentences: self.start..self.end,
            overlap: self.overlap,
        }
    }

    /// Seed the next chunk with the overlap window and the sentence at `index`.
    fn restart(&mut self, sentences: &[Sentence], index: usize, target_overlap: f64) {
        let mut overlap_start = self.end;
        let mut overlap_size = 0;

        for i in (self.start..self.end).rev() {
            let len = sentences[i].len;
            if (overlap_size + len) as f64 > target_overlap {
                break;
            }
            overlap_size += len;
            overlap_start = i;
        }

        self.start = overlap_start;
        self.end = index + 1;
        self.overlap = index - overlap_start;
        self.size = overlap_size + sentences[index].len;
    }
}
