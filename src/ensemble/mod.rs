//! # Ensemble Q-Learning
//!
//! Tabular planner that learns a collision-free path by trial and error.
//!
//! ## Core Concepts
//!
//! - **Ensemble**: `n` independent value tables of shape
//!   `[state_count × action_count]`
//! - **Acting**: epsilon-greedy on the element-wise sum of all tables
//! - **Learning**: per step, one random table selects the bootstrap action
//!   and another values it (generalized double Q-learning)
//! - **Convergence signal**: the ensemble-averaged max value of the start
//!   state, recorded after every episode
//!
//! ## Episode Lifecycle
//!
//! 1. Reset the agent to the initial state
//! 2. Act, observe the next state and motion cost, shape the reward, update
//! 3. Stop once the last move left the grid, hit or crossed an obstacle, or
//!    reached the goal
//!
//! ## Rewards
//!
//! | Outcome | Reward |
//! |---------|--------|
//! | off grid, obstacle, blocked line of sight | -10 |
//! | goal | +10 |
//! | stayed in place | -2 |
//! | other | 0 |
//!
//! The motion cost reported by the agent is subtracted at one tenth.

mod config;
mod engine;
mod episode;
mod tables;

pub use config::{EnsembleConfig, EnsembleConfigBuilder, RewardShaping};
pub use engine::EnsembleQLearning;
pub use episode::{Episode, GreedyPath};
pub use tables::{argmax_first, QEnsemble};
