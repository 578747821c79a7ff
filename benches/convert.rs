use criterion::{black_box, criterion_group, criterion_main, Criterion};
use us2uk::converter::{convert, convert_per_token};
use us2uk::SpellingMap;

const SAMPLE: &str = "My favorite color is gray. The neighbors organized a theater \
trip, and everyone traveled together to analyze the flavor of the local humor. ";

fn bench_strategies(c: &mut Criterion) {
    let dictionary = SpellingMap::embedded().unwrap();
    let text = SAMPLE.repeat(200);

    c.bench_function("convert_global", |b| {
        b.iter(|| convert(black_box(&text), &dictionary))
    });
    c.bench_function("convert_per_token", |b| {
        b.iter(|| convert_per_token(black_box(&text), &dictionary))
    });
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
