//! Property-based tests for adaptive chunking.
//!
//! These tests verify that the chunker maintains key invariants:
//! - Ids: chunk ids are contiguous and totals agree
//! - Bounds: complexity scores stay in [0, 1]
//! - Reassembly: dropping overlap sentences gives back the sentence sequence
//! - Overlap: shared sentences never exceed the overlap ceiling

use proptest::prelude::*;
use adaptive_slabs::{
    AdaptiveChunker, AdaptiveConfig, Chunker, ComplexityMeasure, ComplexityScorer, Segment,
    SentenceSplitter, UnicodeSentences,
};

// =============================================================================
// Test Generators
// =============================================================================

/// Generate text made of capitalized, period-terminated sentences
fn sentence_like_text() -> impl Strategy<Value = String> {
    let sentence = prop::collection::vec(
        prop::string::string_regex("[a-z]{1,12}").unwrap(),
        1..15,
    )
    .prop_map(|words| {
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get(..1) {
            let upper = first.to_uppercase();
            sentence.replace_range(..1, &upper);
        }
        sentence.push('.');
        sentence
    });

    prop::collection::vec(sentence, 1..40).prop_map(|sentences| sentences.join(" "))
}

/// Generate arbitrary text, including empty and whitespace-heavy strings
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("(.|\n){0,400}").unwrap()
}

fn measure() -> impl Strategy<Value = ComplexityMeasure> {
    prop_oneof![
        Just(ComplexityMeasure::LexicalDensity),
        Just(ComplexityMeasure::SentenceLength),
        Just(ComplexityMeasure::Combined),
    ]
}

/// Generate a valid configuration (min <= max on both ranges)
fn config() -> impl Strategy<Value = AdaptiveConfig> {
    (0usize..600, 0usize..600, 0usize..200, 0usize..200, measure()).prop_map(
        |(a, b, c, d, measure)| {
            AdaptiveConfig::default()
                .with_chunk_size(a.min(b), a.max(b))
                .with_chunk_overlap(c.min(d), c.max(d))
                .with_measure(measure)
        },
    )
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Sentences as the chunker sees them: tokenized, zero-length ones dropped
fn sentences(text: &str) -> Vec<String> {
    UnicodeSentences
        .split(text)
        .into_iter()
        .filter(|s| s.chars().count() > 0)
        .collect()
}

/// Concatenate the fresh part of every segment
fn reassemble(segments: &[Segment]) -> Vec<usize> {
    segments.iter().flat_map(Segment::fresh).collect()
}

/// Each segment's overlap is exactly the tail of the previous segment
fn overlaps_are_tails(segments: &[Segment]) -> bool {
    if let Some(first) = segments.first() {
        if first.overlap != 0 || first.sentences.start != 0 {
            return false;
        }
    }
    for window in segments.windows(2) {
        let (prev, next) = (&window[0], &window[1]);
        if next.sentences.start + next.overlap != prev.sentences.end {
            return false;
        }
        if next.sentences.start < prev.sentences.start {
            return false;
        }
    }
    true
}

// =============================================================================
// Chunk Metadata
// =============================================================================

proptest! {
    #[test]
    fn chunk_ids_contiguous(text in sentence_like_text(), config in config()) {
        let chunker = AdaptiveChunker::new(config).unwrap();
        let chunks = chunker.chunk(&text);

        prop_assert!(!chunks.is_empty());
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.metadata.chunk_id, i);
            prop_assert_eq!(chunk.metadata.total_chunks, chunks.len());
            prop_assert_eq!(chunk.metadata.chunk_type.as_str(), "adaptive");
        }
    }

    #[test]
    fn complexity_in_unit_range(text in arbitrary_text(), config in config()) {
        let chunker = AdaptiveChunker::new(config).unwrap();
        for chunk in chunker.chunk(&text) {
            prop_assert!(
                (0.0..=1.0).contains(&chunk.metadata.text_complexity),
                "complexity {} out of range",
                chunk.metadata.text_complexity
            );
        }
    }

    #[test]
    fn size_stats_consistent(text in sentence_like_text(), config in config()) {
        let chunker = AdaptiveChunker::new(config).unwrap();
        let chunks = chunker.chunk(&text);

        let avg = chunks[0].metadata.avg_chunk_size;
        prop_assert!(avg.is_some());
        for chunk in &chunks {
            prop_assert_eq!(chunk.metadata.avg_chunk_size, avg);
            prop_assert_eq!(chunk.metadata.chunk_size, chunk.text.chars().count());
            prop_assert!(chunk.metadata.size_vs_avg.is_some());
        }
    }
}

// =============================================================================
// Segmentation
// =============================================================================

proptest! {
    #[test]
    fn reassembly_reproduces_sentences(text in sentence_like_text(), config in config()) {
        let chunker = AdaptiveChunker::new(config).unwrap();
        let segments = chunker.segment(&text);
        let expected = sentences(&text);

        prop_assert_eq!(reassemble(&segments), (0..expected.len()).collect::<Vec<_>>());
        prop_assert!(overlaps_are_tails(&segments));

        for segment in &segments {
            prop_assert_eq!(&segment.text, &expected[segment.sentences.clone()].join(" "));
        }
    }

    #[test]
    fn overlap_within_ceiling(text in sentence_like_text(), config in config()) {
        let chunker = AdaptiveChunker::new(config).unwrap();
        let segments = chunker.segment(&text);
        let expected = sentences(&text);

        for segment in &segments {
            let overlap_end = segment.sentences.start + segment.overlap;
            let overlap_len: usize = expected[segment.sentences.start..overlap_end]
                .iter()
                .map(|s| s.chars().count())
                .sum();
            prop_assert!(overlap_len <= config.max_chunk_overlap);
        }
    }

    #[test]
    fn every_segment_gains_a_sentence(text in sentence_like_text(), config in config()) {
        let chunker = AdaptiveChunker::new(config).unwrap();
        for segment in chunker.segment(&text) {
            prop_assert!(!segment.fresh().is_empty());
        }
    }

    #[test]
    fn split_matches_chunk_texts(text in arbitrary_text(), config in config()) {
        let chunker = AdaptiveChunker::new(config).unwrap();
        let texts = chunker.split(&text);
        let chunks = chunker.chunk(&text);

        prop_assert_eq!(texts.len(), chunks.len());
        for (text, chunk) in texts.iter().zip(&chunks) {
            prop_assert_eq!(text, &chunk.text);
        }
    }
}

// =============================================================================
// Scorer
// =============================================================================

proptest! {
    #[test]
    fn score_in_unit_range(text in arbitrary_text(), measure in measure()) {
        let score = ComplexityScorer::new(measure).score(&text);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn score_is_deterministic(text in arbitrary_text(), measure in measure()) {
        let scorer = ComplexityScorer::new(measure);
        prop_assert_eq!(scorer.score(&text).to_bits(), scorer.score(&text).to_bits());
    }
}

// =============================================================================
// Consistency Tests
// =============================================================================

#[test]
fn chunking_is_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog. Pack my box. \
                How vexingly quick daft zebras jump! The five boxing wizards jump quickly.";

    let config = AdaptiveConfig::default().with_chunk_size(20, 60).with_chunk_overlap(0, 40);
    let chunker = AdaptiveChunker::new(config).unwrap();

    assert_eq!(chunker.chunk(text), chunker.chunk(text));
}
