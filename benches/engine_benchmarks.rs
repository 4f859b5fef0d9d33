//! Engine benchmarks.
//!
//! Measures the two hot paths of a worker generation: scoring a tour
//! (an O(n) scan recomputed on every comparison, by design) and the
//! full evolve step at reference parameters.
//!
//! Run with: cargo criterion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use evotour::config::GaConfig;
use evotour::engine::genotype::Genotype;
use evotour::engine::population::Population;
use evotour::engine::rng::EvoRng;
use evotour::geo::City;

fn synthetic_genotype(n: usize) -> Genotype {
    let mut rng = EvoRng::new(42);
    Genotype::from_cities(
        (0..n)
            .map(|i| {
                let lat = rng.gen_f64() * 140.0 - 70.0;
                let lon = rng.gen_f64() * 340.0 - 170.0;
                City::new(format!("c{i}"), lat, lon)
            })
            .collect(),
    )
}

fn bench_tour_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_score");

    for n in [10, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::new("score", n), n, |b, &n| {
            let genotype = synthetic_genotype(n);
            let mut rng = EvoRng::new(7);
            let tour = genotype.random_tour(&mut rng);
            b.iter(|| black_box(tour.score()));
        });
    }

    group.finish();
}

fn bench_population_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_evolve");

    for n in [10, 50].iter() {
        group.bench_with_input(BenchmarkId::new("evolve", n), n, |b, &n| {
            let genotype = synthetic_genotype(n);
            let ga = GaConfig::default();
            let mut rng = EvoRng::new(7);
            let mut population = Population::seeded(&genotype, ga.population_size, &mut rng);
            b.iter(|| {
                population.evolve(&ga, &mut rng);
                black_box(population.len())
            });
        });
    }

    group.finish();
}

fn bench_population_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_best");

    group.bench_function("best_of_100", |b| {
        let genotype = synthetic_genotype(50);
        let mut rng = EvoRng::new(7);
        let population = Population::seeded(&genotype, 100, &mut rng);
        b.iter(|| population.best().map(|t| black_box(t.score())));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tour_score,
    bench_population_evolve,
    bench_population_best
);
criterion_main!(benches);
