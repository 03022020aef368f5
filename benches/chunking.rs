//! Benchmarks for adaptive chunking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use adaptive_slabs::{AdaptiveChunker, AdaptiveConfig, Chunker, ComplexityMeasure, ComplexityScorer};

fn sample_text(size: usize) -> String {
    // Mix repetitive and varied sentences so the running complexity moves
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "Go go go go go go go go. ",
        "Sphinx of black quartz, judge my vow, and consider the epistemological ramifications thereof. ",
        "It is what it is and that is that. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_scorer(c: &mut Criterion) {
    let mut group = c.benchmark_group("complexity_scorer");
    let text = sample_text(2_000);

    for measure in [
        ComplexityMeasure::LexicalDensity,
        ComplexityMeasure::SentenceLength,
        ComplexityMeasure::Combined,
    ] {
        let scorer = ComplexityScorer::new(measure);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("score", measure), &text, |b, text| {
            b.iter(|| scorer.score(black_box(text)))
        });
    }

    group.finish();
}

fn bench_adaptive_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_chunker");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let chunker = AdaptiveChunker::new(AdaptiveConfig::default()).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("segment", size), &text, |b, text| {
            b.iter(|| chunker.segment(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("chunk", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scorer, bench_adaptive_chunker);
criterion_main!(benches);
