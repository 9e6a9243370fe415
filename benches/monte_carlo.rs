use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use holdem_odds::core::Card;
use holdem_odds::holdem::{CancellationToken, MonteCarloEngine, SimulationSettings};
use rand::{SeedableRng, rngs::StdRng};

fn bench_simulate(c: &mut Criterion) {
    let player = Card::parse_many("AsKs").unwrap();
    let boards = [
        ("preflop", Card::parse_many("").unwrap()),
        ("flop", Card::parse_many("Jh7s2d").unwrap()),
        ("river", Card::parse_many("Jh7s2d9cQs").unwrap()),
    ];

    let mut group = c.benchmark_group("simulate_5000");
    group.sample_size(10);
    for parallelism in [1, 4] {
        let engine =
            MonteCarloEngine::new(SimulationSettings::default().with_parallelism(parallelism))
                .unwrap();
        for (name, board) in &boards {
            group.bench_with_input(
                BenchmarkId::new(*name, parallelism),
                board,
                |b, board| {
                    let mut rng = StdRng::seed_from_u64(7);
                    b.iter(|| {
                        engine
                            .simulate(
                                &player,
                                board,
                                5_000,
                                &CancellationToken::new(),
                                |_| {},
                                &mut rng,
                            )
                            .unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
