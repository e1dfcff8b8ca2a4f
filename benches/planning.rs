//! Line-of-sight and training throughput
//!
//! The collision check runs once or twice per learning step and scans every
//! obstacle, so it dominates training time on cluttered maps.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qpath::agent::{Connectivity, GridAgent};
use qpath::cancel::CancelToken;
use qpath::ensemble::{EnsembleConfig, EnsembleQLearning};
use qpath::environment::GridWorld;
use qpath::logging::NullLogger;
use qpath::types::Cell;

/// 20x20 map with a comb of vertical walls
fn cluttered_grid() -> GridWorld {
    let size = 20;
    let rows: Vec<Vec<bool>> = (0..size)
        .map(|row| (0..size).map(|col| !(col % 4 == 2 && row % 10 != 0)).collect())
        .collect();
    GridWorld::from_rows(&rows).unwrap()
}

fn bench_line_of_sight(c: &mut Criterion) {
    let grid = cluttered_grid();
    let from = Cell::new(0, 0);
    let to = Cell::new(19, 19);

    c.bench_function("is_free_diagonal_20x20", |b| {
        b.iter(|| grid.is_free(black_box(from), black_box(to)))
    });

    c.bench_function("is_free_short_move_20x20", |b| {
        b.iter(|| grid.is_free(black_box(Cell::new(5, 5)), black_box(Cell::new(6, 6))))
    });
}

fn bench_training(c: &mut Criterion) {
    c.bench_function("train_200_episodes_10x10", |b| {
        b.iter(|| {
            let grid = GridWorld::from_rows(&vec![vec![true; 10]; 10]).unwrap();
            let agent = GridAgent::new(10, 10, Connectivity::Eight);
            let config = EnsembleConfig::builder()
                .tables(3)
                .episodes(200)
                .max_steps_per_episode(500)
                .seed(0)
                .build()
                .unwrap();
            let mut planner =
                EnsembleQLearning::new(config, agent, grid, Cell::new(0, 0), Cell::new(9, 9)).unwrap();
            planner.learn(&mut NullLogger, &CancelToken::new()).unwrap()
        })
    });
}

criterion_group!(benches, bench_line_of_sight, bench_training);
criterion_main!(benches);
