use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fastrand::Rng;
use scalar_swarm::{
    algorithms::particles::{PSOConfig, PSO},
    test_functions::{Rastrigin, Square},
    traits::{Algorithm, Observers},
};

fn pso_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("PSO");
    for n_particles in [10, 50, 250] {
        let config = PSOConfig::default()
            .with_n_particles(n_particles)
            .with_max_iterations(100);
        group.bench_with_input(
            BenchmarkId::new("Square", n_particles),
            &config,
            |b, config| {
                b.iter_batched(
                    || PSO::new(config.clone(), Rng::with_seed(0)).unwrap(),
                    |mut solver| {
                        let result = solver.process(&Square, &mut (), Observers::empty()).unwrap();
                        black_box(result);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("Rastrigin", n_particles),
            &config,
            |b, config| {
                b.iter_batched(
                    || PSO::new(config.clone(), Rng::with_seed(0)).unwrap(),
                    |mut solver| {
                        let result = solver
                            .process(&Rastrigin, &mut (), Observers::empty())
                            .unwrap();
                        black_box(result);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, pso_benchmark);
criterion_main!(benches);
