//! Criterion benchmarks for Lexis.
//!
//! Covers the hot paths:
//! - Tag-driven normalization
//! - Classifier training
//! - Classification

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lexis::classifier::{ClassifierConfig, NgramClassifier, TrainingExample};
use lexis::morphology::{Normalizer, SlashTagger};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "what", "time", "is", "it", "the", "weather", "today", "rain", "tomorrow", "order", "pizza",
    "pasta", "please", "tell", "me", "about", "music", "play", "some", "song", "open", "door",
    "close", "window", "turn", "on", "off", "light", "kitchen", "bedroom", "alarm", "set",
];

const CLASSES: &[&str] = &["time", "weather", "food", "music", "home", "alarm"];

/// Generate labeled examples for benchmarking.
fn generate_examples(count: usize) -> Vec<TrainingExample> {
    (0..count)
        .map(|i| {
            let length = 4 + (i % 8);
            let words = (0..length).map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()]);
            TrainingExample::new(words, CLASSES[i % CLASSES.len()])
        })
        .collect()
}

/// Benchmark normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let normalizer = Normalizer::embedded().unwrap();
    let tagger = SlashTagger::new("NN");
    let sentence = "the/DT children/NNS were/VBD happily/RB playing/VBG with/IN \
                    bigger/JJR boxes/NNS and/CC could/MD have/VB stayed/VBN longer/RBR";

    group.bench_function("normalize_word", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box("churches"), Some("NNS"))))
    });

    group.throughput(Throughput::Elements(12));
    group.bench_function("normalize_sentence", |b| {
        b.iter(|| black_box(normalizer.normalize_sentence(&tagger, black_box(sentence))))
    });

    group.finish();
}

/// Benchmark training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");

    for size in [100, 1000, 10000] {
        let examples = generate_examples(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &examples, |b, examples| {
            b.iter_with_setup(
                || NgramClassifier::new(ClassifierConfig::default()).unwrap(),
                |mut classifier| {
                    classifier.fit(black_box(examples));
                    black_box(classifier)
                },
            )
        });
    }

    group.finish();
}

/// Benchmark classification.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let mut classifier = NgramClassifier::new(ClassifierConfig::default()).unwrap();
    classifier.fit(&generate_examples(5000));
    let queries = generate_examples(100);

    group.bench_function("classify_single", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&queries[0].words))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("classify_batch", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(classifier.classify(black_box(&query.words)));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_training,
    bench_classification
);

criterion_main!(benches);
