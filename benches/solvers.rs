use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dpsolve::solvers::{
    solve_coin_change, solve_fibonacci, solve_knapsack, solve_lcs, Item, US_COINS,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_letters(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGH";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

fn random_items(rng: &mut StdRng, n: usize) -> Vec<Item> {
    (0..n)
        .map(|index| {
            Item::new(
                index as u32,
                format!("item-{index}"),
                rng.gen_range(1..=64),
                rng.gen_range(1..=100),
            )
        })
        .collect()
}

fn bench_fibonacci(c: &mut Criterion) {
    c.bench_function("fibonacci_n90", |b| {
        b.iter(|| solve_fibonacci(black_box(90)).unwrap())
    });
}

fn bench_knapsack(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let items = random_items(&mut rng, 64);
    c.bench_function("knapsack_64_items_cap_512", |b| {
        b.iter(|| solve_knapsack(black_box(&items), black_box(512)).unwrap())
    });
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs");
    for &len in &[100usize, 200, 400] {
        let mut rng = StdRng::seed_from_u64(42);
        let first = random_letters(&mut rng, len);
        let second = random_letters(&mut rng, len);
        group.bench_function(format!("lcs_len_{len}"), |b| {
            b.iter(|| solve_lcs(black_box(&first), black_box(&second)))
        });
    }
    group.finish();
}

fn bench_coin_change(c: &mut Criterion) {
    c.bench_function("coin_change_us_coins_10000", |b| {
        b.iter(|| solve_coin_change(black_box(&US_COINS), black_box(10_000)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_fibonacci,
    bench_knapsack,
    bench_lcs,
    bench_coin_change
);
criterion_main!(benches);
