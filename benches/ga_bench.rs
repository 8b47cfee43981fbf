//! Criterion benchmarks for u-bitga.
//!
//! Uses OneMax (count of set bits) to measure pure engine overhead: the
//! fitness function itself is negligible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_bitga::{
    calculate_sampling_probabilities, make_next_generation, random_population,
    roulette_wheel_selection, GaConfig, GaRunner, Genome, RngSource,
};

fn onemax(g: &Genome) -> f64 {
    // Offset keeps the all-zero population selectable
    1.0 + g.count_ones() as f64
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax");
    group.sample_size(10);

    for (k, pop, gen) in [(32usize, 50usize, 50usize), (128, 100, 30), (512, 100, 20)] {
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            genome_length: k,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("k{}_p{}_g{}", k, pop, gen), k),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = GaRunner::run(&onemax, black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    group.sample_size(20);

    for &pop in &[50usize, 200, 1000] {
        let mut rng = RngSource::seeded(42);
        let population = random_population(pop, 64, &onemax, &mut rng).expect("valid population");
        group.bench_with_input(BenchmarkId::from_parameter(pop), &population, |b, p| {
            b.iter(|| {
                let next = make_next_generation(black_box(p), pop, &onemax, 0.1, 0.9, &mut rng);
                black_box(next)
            })
        });
    }
    group.finish();
}

fn bench_roulette(c: &mut Criterion) {
    let mut group = c.benchmark_group("roulette_wheel");

    for &pop in &[50usize, 500, 5000] {
        let mut rng = RngSource::seeded(42);
        let population = random_population(pop, 16, &onemax, &mut rng).expect("valid population");
        let probabilities =
            calculate_sampling_probabilities(&population).expect("positive fitness");
        group.bench_with_input(BenchmarkId::from_parameter(pop), &probabilities, |b, p| {
            b.iter(|| black_box(roulette_wheel_selection(black_box(p), &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_onemax, bench_next_generation, bench_roulette);
criterion_main!(benches);
