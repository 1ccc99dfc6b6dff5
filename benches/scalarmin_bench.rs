//! Criterion benchmarks for u-scalarmin solvers.
//!
//! Uses the shifted quadratic `x² − 2` and a multimodal Rastrigin-style
//! curve to measure pure solver overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_scalarmin::aco::{AcoConfig, AntColony};
use u_scalarmin::gd::{GdConfig, GradientDescent};
use u_scalarmin::newton::{Newton, NewtonConfig};
use u_scalarmin::pso::{ParticleSwarm, PsoConfig};
use u_scalarmin::sa::{SaConfig, SimulatedAnnealing};
use u_scalarmin::Optimizer;

fn shifted_quadratic(x: f64) -> f64 {
    x * x - 2.0
}

fn rastrigin(x: f64) -> f64 {
    10.0 + x * x - 10.0 * (2.0 * std::f64::consts::PI * x).cos()
}

fn bench_local(c: &mut Criterion) {
    let mut group = c.benchmark_group("local");

    group.bench_function("gradient_descent", |b| {
        b.iter(|| {
            let mut gd = GradientDescent::new(shifted_quadratic, GdConfig::default()).unwrap();
            black_box(gd.run())
        })
    });

    group.bench_function("newton", |b| {
        b.iter(|| {
            let mut newton = Newton::new(shifted_quadratic, NewtonConfig::default()).unwrap();
            black_box(newton.run())
        })
    });

    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    for &inner in &[10usize, 100] {
        let config = SaConfig::default()
            .with_iterations_per_temperature(inner)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(inner), &config, |b, config| {
            b.iter(|| {
                let mut sa = SimulatedAnnealing::new(rastrigin, config.clone()).unwrap();
                black_box(sa.run())
            })
        });
    }
    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso");
    group.sample_size(10);

    for &particles in &[10usize, 20, 50] {
        let config = PsoConfig::default().with_particles(particles).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(particles),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut pso = ParticleSwarm::new(rastrigin, config.clone()).unwrap();
                    black_box(pso.run())
                })
            },
        );
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco");
    group.sample_size(10);

    for &ants in &[10usize, 50] {
        let config = AcoConfig::default()
            .with_ants(ants)
            .with_deposit(0.01)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(ants), &config, |b, config| {
            b.iter(|| {
                let mut colony = AntColony::new(shifted_quadratic, config.clone()).unwrap();
                black_box(colony.run())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_local, bench_sa, bench_pso, bench_aco);
criterion_main!(benches);
