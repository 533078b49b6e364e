use bytepair_rs::{Symbol, TieBreak, Trainer, TrainerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate repetitive text data
fn generate_repetitive_text(size: usize) -> Vec<Symbol> {
    let pattern = "the quick brown fox jumps over the lazy dog ";
    to_symbols(&pattern.repeat(size / pattern.len()))
}

/// Generate low-repetition data (simulating base64)
fn generate_low_repetition(size: usize) -> Vec<Symbol> {
    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut seed = 12345u64;

    (0..size)
        .map(|_| {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            Symbol::from(chars[(seed % chars.len() as u64) as usize])
        })
        .collect()
}

fn to_symbols(text: &str) -> Vec<Symbol> {
    text.bytes().map(Symbol::from).collect()
}

fn config(merges: i64, tie_break: TieBreak) -> TrainerConfig {
    TrainerConfig::new(merges)
        .expect("non-negative merge count")
        .with_tie_break(tie_break)
}

fn bench_train(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("train");

    for size in sizes.iter() {
        let repetitive = generate_repetitive_text(*size);
        let random = generate_low_repetition(*size);

        group.bench_with_input(
            BenchmarkId::new("repetitive", size),
            &repetitive,
            |b, data| {
                b.iter(|| {
                    let mut trainer = Trainer::new(config(50, TieBreak::SmallestPair));
                    black_box(trainer.train(black_box(data)).expect("train"))
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("low_repetition", size), &random, |b, data| {
            b.iter(|| {
                let mut trainer = Trainer::new(config(50, TieBreak::SmallestPair));
                black_box(trainer.train(black_box(data)).expect("train"))
            });
        });
    }

    group.finish();
}

fn bench_tie_break(c: &mut Criterion) {
    let data = generate_low_repetition(10_000);
    let mut group = c.benchmark_group("tie_break");

    for tie_break in [
        TieBreak::SmallestPair,
        TieBreak::LargestPair,
        TieBreak::FirstOccurrence,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(tie_break),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut trainer = Trainer::new(config(20, tie_break));
                    black_box(trainer.train(black_box(data)).expect("train"))
                });
            },
        );
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("apply");

    for size in sizes.iter() {
        let data = generate_repetitive_text(*size);

        // Prepare the model on a prefix, then encode the whole input
        let mut trainer = Trainer::new(config(50, TieBreak::SmallestPair));
        trainer.train(&data[..data.len().min(1_000)]).expect("train");
        let model = trainer.into_model();

        group.bench_with_input(BenchmarkId::new("apply", size), &data, |b, data| {
            b.iter(|| black_box(model.apply(black_box(data))));
        });

        let encoded = model.apply(&data);
        group.bench_with_input(BenchmarkId::new("expand", size), &encoded, |b, encoded| {
            b.iter(|| black_box(model.expand_iter(encoded.iter().copied()).count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_train, bench_tie_break, bench_apply);
criterion_main!(benches);
