//! # qpath - Ensemble Q-Learning Path Planner
//!
//! qpath learns collision-free paths across 2D grids with rectangular
//! obstacles. An agent explores the grid episode after episode and a small
//! ensemble of tabular value functions turns that experience into a greedy
//! start-to-goal path.
//!
//! ## Key Features
//!
//! - **Ensemble Q-learning**: `n` tables, random selector/evaluator pairs per
//!   update (generalized double Q-learning), epsilon-greedy acting on the
//!   summed tables
//! - **Continuous collision model**: blocked cells are unit squares and every
//!   straight move is clipped against them with Liang–Barsky
//! - **Cooperative cancellation**: stop between episodes and keep the series
//!   learned so far
//! - **Persistence**: binary snapshots of the value tables, JSON configs
//! - **Parallel seeds**: independent runs on rayon's pool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qpath::agent::{Connectivity, GridAgent};
//! use qpath::cancel::CancelToken;
//! use qpath::ensemble::{EnsembleConfig, EnsembleQLearning};
//! use qpath::environment::GridWorld;
//! use qpath::logging::TracingLogger;
//! use qpath::types::Cell;
//!
//! let grid = GridWorld::from_ascii("
//!     .....
//!     .###.
//!     .....
//!     .#...
//!     .....
//! ").unwrap();
//! let agent = GridAgent::new(grid.width(), grid.height(), Connectivity::Eight);
//! let config = EnsembleConfig::builder()
//!     .tables(3)
//!     .episodes(2000)
//!     .build()
//!     .unwrap();
//!
//! let mut planner = EnsembleQLearning::new(config, agent, grid, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
//! let history = planner.learn(&mut TracingLogger, &CancelToken::new()).unwrap();
//! let path = planner.policy().unwrap();
//! println!("{} moves, best return {:?}", path.steps(), history.best_adjusted_return());
//! ```
//!
//! ## Module Organization
//!
//! - [`agent`] - State/action encoding and transition dynamics
//! - [`cancel`] - Cooperative stop signal for training
//! - [`ensemble`] - Value tables, configuration and the learning engine
//! - [`environment`] - Occupancy grid and line-of-sight checks
//! - [`error`] - Error types and result handling
//! - [`geometry`] - Segment vs. box clipping
//! - [`logging`] - Progress message sinks
//! - [`metrics`] - Training series and statistics
//! - [`parallel`] - Independent seeded runs in parallel
//! - [`types`] - Cells, points and the state/action traits
//! - [`visualization`] - ASCII rendering and series export

pub mod agent;
pub mod cancel;
pub mod ensemble;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod parallel;
pub mod types;
pub mod visualization;

#[cfg(test)]
mod tests;
