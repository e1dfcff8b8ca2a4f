/***
# Grid Planner

* Learns a path across a 10x10 map with two walls using ensemble Q-learning
* State: the agent's cell; actions: the 8 neighbouring cells
* Rewards: -10 for leaving the map or touching a wall, +10 at the goal,
  -2 for standing still, minus a tenth of the move length each step
* Pass a JSON config path as the first argument to override the defaults
* Training stops early once TIME_BUDGET has elapsed
***/

use qpath::{
    agent::{Connectivity, GridAgent},
    cancel::CancelToken,
    ensemble::{EnsembleConfig, EnsembleQLearning},
    environment::GridWorld,
    error::Result,
    logging::TracingLogger,
    types::Cell,
    visualization::{history_summary, plot_convergence, plot_returns, render_path, training_progress},
};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const MAP: &str = "
    ..........
    ..........
    ..#######.
    ..........
    ..........
    ..........
    .#######..
    ..........
    ..........
    ..........
";
const START: Cell = Cell::new(0, 0);
const GOAL: Cell = Cell::new(9, 9);
const TIME_BUDGET: Duration = Duration::from_secs(60);
const SHOW_EVERY: usize = 2500;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EnsembleConfig::from_json_file(path)?,
        None => EnsembleConfig::builder()
            .tables(5)
            .episodes(10_000)
            .alpha(0.5)
            .gamma(0.95)
            .epsilon(0.1)
            .build()?,
    };
    let total = config.episodes;
    let epsilon = config.epsilon;

    let grid = GridWorld::from_ascii(MAP)?;
    let agent = GridAgent::new(grid.width(), grid.height(), Connectivity::Eight);
    let mut planner = EnsembleQLearning::new(config, agent, grid.clone(), START, GOAL)?;

    println!("Training grid planner...");
    let start_time = Instant::now();
    let cancel = CancelToken::new();
    let stopper = cancel.clone();
    let mut returns = Vec::new();
    let mut seen = 0;

    let history = planner.learn_with(&mut TracingLogger, &cancel, |episode| {
        seen += 1;
        returns.push(episode.total_return);

        if seen % SHOW_EVERY == 0 {
            let window = &returns[returns.len().saturating_sub(100)..];
            let avg = window.iter().sum::<f64>() / window.len() as f64;
            println!("{}", training_progress(seen, total, avg, epsilon));
            println!("{}", render_path(&grid, &episode.path(), START, GOAL));
        }

        if start_time.elapsed() > TIME_BUDGET {
            stopper.cancel();
        }
    })?;

    println!("Training completed in {:.2?}", start_time.elapsed());
    println!("{}", history_summary(&history));
    println!("{}", plot_convergence(&history, 60, 12));
    println!("{}", plot_returns(&history, 60, 12));

    match planner.policy() {
        Ok(path) => {
            println!("Greedy path ({} moves):", path.steps());
            println!("{}", render_path(&grid, &path.states, START, GOAL));
        }
        Err(e) => println!("No greedy path yet: {}", e),
    }

    Ok(())
}
