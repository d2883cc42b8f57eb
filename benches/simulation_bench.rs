use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monopoly_odds::simulation::{run_game, EventDeck};
use monopoly_odds::{simulate, SimulationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_single_game(c: &mut Criterion) {
    let deck = EventDeck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    c.bench_function("run_game_100_turns", |b| {
        b.iter(|| run_game(black_box(100), &deck, &mut rng))
    });
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_1000x100");
    group.sample_size(20);

    let parallel = SimulationConfig::new(1000, 100).with_seed(7);
    group.bench_function("parallel", |b| b.iter(|| simulate(black_box(&parallel))));

    let mut sequential = parallel.clone();
    sequential.parallel_threshold = u32::MAX;
    group.bench_function("sequential", |b| b.iter(|| simulate(black_box(&sequential))));

    group.finish();
}

criterion_group!(benches, bench_single_game, bench_full_run);
criterion_main!(benches);
