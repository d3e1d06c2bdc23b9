//! Training and segmentation throughput
//!
//! Run with: cargo bench --bench punkt_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use punkt_core::{SentenceTokenizer, Trainer};
use std::hint::black_box;

const SENTENCES: [&str; 4] = [
    "Dr. Smith went to Washington on Jan. 3 with Mr. Brown. ",
    "The committee met at 10 a.m. and adjourned early. ",
    "Prices rose by approx. 4 percent, etc., as expected. ",
    "However, nobody was surprised (least of all the U.S. press). ",
];

/// Generate test text of roughly the specified size
fn generate_text(size: usize) -> String {
    let mut text = String::with_capacity(size + 64);
    for sentence in SENTENCES.iter().cycle() {
        if text.len() >= size {
            break;
        }
        text.push_str(sentence);
    }
    text
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20);

    for size in [10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("train", size), &text, |b, text| {
            b.iter(|| {
                let mut trainer = Trainer::new();
                trainer.train(black_box(text)).abbreviation_count()
            });
        });
    }

    group.finish();
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    let mut trainer = Trainer::new();
    trainer.train(&generate_text(102_400));
    let trained = SentenceTokenizer::new(trainer.into_parameters());
    let untrained = SentenceTokenizer::untrained();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("trained", size), &text, |b, text| {
            b.iter(|| trained.span_tokenize(black_box(text)).len());
        });
        group.bench_with_input(BenchmarkId::new("untrained", size), &text, |b, text| {
            b.iter(|| untrained.span_tokenize(black_box(text)).len());
        });
    }

    group.finish();
}

fn bench_incremental_training(c: &mut Criterion) {
    let batches: Vec<String> = (0..10).map(|_| generate_text(10_240)).collect();

    c.bench_function("accumulate_10_batches", |b| {
        b.iter(|| {
            let mut trainer = Trainer::new();
            for batch in &batches {
                trainer.accumulate(black_box(batch));
            }
            trainer.finalize().sentence_starter_count()
        });
    });
}

criterion_group!(
    benches,
    bench_training,
    bench_segmentation,
    bench_incremental_training
);
criterion_main!(benches);
