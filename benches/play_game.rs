//! Throughput benchmarks for game play.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use war_sim::cards::{sort_descending, Deck};
use war_sim::core::{Card, GameRng, SeedPair};
use war_sim::hand::Hand;
use war_sim::rules::play_game;
use war_sim::sim::Worker;

fn bench_single_game(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    let mut deck = Deck::new();
    let mut one = Hand::new();
    let mut two = Hand::new();

    c.bench_function("play_game", |b| {
        b.iter(|| {
            deck.shuffle(&mut rng);
            let (first, second) = deck.halves();
            one.reset(first);
            two.reset(second);
            black_box(play_game(&mut one, &mut two, &mut rng))
        })
    });
}

fn bench_worker(c: &mut Criterion) {
    let mut group = c.benchmark_group("worker");
    for games in [100u64, 1_000] {
        group.throughput(Throughput::Elements(games));
        group.bench_with_input(BenchmarkId::from_parameter(games), &games, |b, &games| {
            let mut worker = Worker::new(SeedPair::new(1, 2));
            b.iter(|| black_box(worker.play(games)))
        });
    }
    group.finish();
}

fn bench_sort_pile(c: &mut Criterion) {
    let mut rng = GameRng::new(7);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let pile: Vec<Card> = deck.cards()[..18].to_vec();

    c.bench_function("sort_descending_18", |b| {
        b.iter(|| {
            let mut cards = pile.clone();
            sort_descending(&mut cards);
            black_box(cards)
        })
    });
}

criterion_group!(benches, bench_single_game, bench_worker, bench_sort_pile);
criterion_main!(benches);
