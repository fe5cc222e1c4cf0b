//! Benchmarks for running complete matches.
//!
//! This benchmarks the full match loop including the per-slot worker
//! dispatch - the hot path of a tournament run.

#![allow(missing_docs)]

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use kingsheep::agents::{Agent, GreedyAgent, RandomAgent};
use kingsheep::map::parse_map;
use kingsheep::runner::{MatchConfig, run_match};

const BENCH_MAP: &str = "\
S.g......r......g.W
...................
..#####.....#####..
.......g.r.g.......
...................
..g.....###.....g..
.......r...r.......
...................
..#####.....#####..
.g.......g.......g.
...................
...................
..r.....g.g.....r..
...................
s........g........w
";

fn bench_config() -> MatchConfig {
    MatchConfig {
        rounds: 100,
        move_deadline: Duration::from_secs(5),
        ..MatchConfig::default()
    }
}

fn bench_greedy_match(c: &mut Criterion) {
    let config = bench_config();

    c.bench_function("greedy_vs_greedy_100_rounds", |b| {
        b.iter(|| {
            let field = parse_map(BENCH_MAP).expect("valid bench map");
            let agents: [Arc<dyn Agent>; 2] = [Arc::new(GreedyAgent), Arc::new(GreedyAgent)];
            let result = run_match(black_box(field), agents, black_box(&config));
            black_box(result)
        });
    });
}

fn bench_random_match(c: &mut Criterion) {
    let config = bench_config();

    c.bench_function("random_vs_random_100_rounds", |b| {
        b.iter(|| {
            let field = parse_map(BENCH_MAP).expect("valid bench map");
            let agents: [Arc<dyn Agent>; 2] =
                [Arc::new(RandomAgent::new(42)), Arc::new(RandomAgent::new(43))];
            let result = run_match(black_box(field), agents, black_box(&config));
            black_box(result)
        });
    });
}

criterion_group!(benches, bench_greedy_match, bench_random_match);
criterion_main!(benches);
