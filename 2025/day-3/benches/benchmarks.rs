use aoc2025_day_3::{part1, part2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::LazyLock;

fn main() {
    divan::main();
}

/// 200 banks of 100 batteries, the shape of a real puzzle input.
static INPUT: LazyLock<String> = LazyLock::new(|| {
    let mut rng = StdRng::seed_from_u64(2025);
    (0..200)
        .map(|_| {
            (0..100)
                .map(|_| char::from(b'0' + rng.random_range(1..10u8)))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
});

#[divan::bench]
fn bench_part1() {
    part1::process(divan::black_box(INPUT.as_str())).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(divan::black_box(INPUT.as_str())).unwrap();
}
