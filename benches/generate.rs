use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pushid::{ManualClock, PushId, PushIdGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

fn generate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(1));

    group.bench_function("shared", |b| b.iter(|| black_box(pushid::pushid())));

    let generator = PushIdGenerator::new();
    group.bench_function("owned", |b| b.iter(|| black_box(generator.generate())));

    // A frozen clock keeps every call on the increment path.
    let frozen = PushIdGenerator::with_source(
        ManualClock::new(1_700_000_000_000),
        StdRng::seed_from_u64(0),
    );
    group.bench_function("same_millisecond", |b| {
        b.iter(|| black_box(frozen.generate()))
    });

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(pushid::pushid_string()))
    });

    group.finish();
}

fn contended_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    for i in [1000, 10000, 100000] {
        group.throughput(Throughput::Elements(i));
        group.bench_with_input(BenchmarkId::new("par_generate", i), &i, |b, &i| {
            let generator = PushIdGenerator::new();
            b.iter(|| {
                let ids: Vec<PushId> = (0..i).into_par_iter().map(|_| generator.generate()).collect();
                black_box(ids)
            })
        });
    }

    group.finish();
}

fn parse_benchmark(c: &mut Criterion) {
    let id = pushid::pushid_string();
    c.bench_function("parse", |b| {
        b.iter(|| black_box(black_box(id.as_str()).parse::<PushId>()))
    });
}

criterion_group!(
    benches,
    generate_benchmark,
    contended_benchmark,
    parse_benchmark
);
criterion_main!(benches);
