use criterion::{black_box, criterion_group, criterion_main, Criterion};
use star_match::{admissible_sums, find_subset, pick_target, GameRng};

fn bench_targets(c: &mut Criterion) {
    let classic: Vec<i64> = (1..=10).collect();
    let signed: Vec<i64> = (-5..=6).collect();
    let widest: Vec<i64> = (-9..=10).collect();

    c.bench_function("admissible_sums classic", |b| {
        b.iter(|| admissible_sums(black_box(&classic), 10))
    });
    c.bench_function("admissible_sums signed", |b| {
        b.iter(|| admissible_sums(black_box(&signed), 6))
    });
    c.bench_function("admissible_sums widest pool", |b| {
        b.iter(|| admissible_sums(black_box(&widest), 10))
    });

    let mut rng = GameRng::new(42);
    c.bench_function("pick_target signed", |b| {
        b.iter(|| pick_target(black_box(&signed), 6, &mut rng))
    });

    c.bench_function("find_subset signed", |b| {
        b.iter(|| find_subset(black_box(&signed), black_box(4)))
    });
}

criterion_group!(benches, bench_targets);
criterion_main!(benches);
