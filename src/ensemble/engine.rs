use super::config::EnsembleConfig;
use super::episode::{Episode, GreedyPath};
use super::tables::QEnsemble;
use crate::agent::Agent;
use crate::cancel::CancelToken;
use crate::environment::GridWorld;
use crate::error::{PlannerError, Result};
use crate::logging::Logger;
use crate::metrics::TrainingHistory;
use crate::types::{PlannerAction, PlannerState};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Ensemble (generalized double) Q-learning over a grid world
///
/// The engine keeps `n` value tables. Actions are chosen epsilon-greedily on
/// the element-wise sum of all tables; each update picks one random table to
/// select the bootstrap action and another (possibly the same) to evaluate
/// it, and writes only to the evaluating table. With `n = 1` this is plain
/// Q-learning.
///
/// # Example
///
/// ```rust
/// use qpath::agent::{Connectivity, GridAgent};
/// use qpath::cancel::CancelToken;
/// use qpath::ensemble::{EnsembleConfig, EnsembleQLearning};
/// use qpath::environment::GridWorld;
/// use qpath::logging::NullLogger;
/// use qpath::types::Cell;
///
/// let grid = GridWorld::from_ascii("
///     ....
///     .##.
///     ....
/// ").unwrap();
/// let agent = GridAgent::new(grid.width(), grid.height(), Connectivity::Four);
/// let config = EnsembleConfig::builder()
///     .tables(3)
///     .episodes(200)
///     .seed(1)
///     .build()
///     .unwrap();
///
/// let mut planner = EnsembleQLearning::new(config, agent, grid, Cell::new(0, 0), Cell::new(3, 2)).unwrap();
/// let history = planner.learn(&mut NullLogger, &CancelToken::new()).unwrap();
/// assert_eq!(history.episodes(), 200);
/// ```
pub struct EnsembleQLearning<A: Agent, R: Rng = StdRng> {
    config: EnsembleConfig,
    agent: A,
    env: GridWorld,
    init_state: A::State,
    final_state: A::State,
    tables: QEnsemble,
    rng: R,
}

impl<A: Agent> EnsembleQLearning<A, StdRng> {
    /// Create an engine whose random source is seeded from `config.seed`
    pub fn new(
        config: EnsembleConfig,
        agent: A,
        env: GridWorld,
        init_state: A::State,
        final_state: A::State,
    ) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, agent, env, init_state, final_state, rng)
    }

    /// Single-table Q-learning
    pub fn q_learning(
        mut config: EnsembleConfig,
        agent: A,
        env: GridWorld,
        init_state: A::State,
        final_state: A::State,
    ) -> Result<Self> {
        config.tables = 1;
        Self::new(config, agent, env, init_state, final_state)
    }
}

impl<A: Agent, R: Rng> EnsembleQLearning<A, R> {
    /// Create an engine drawing all randomness from `rng`
    pub fn with_rng(
        config: EnsembleConfig,
        agent: A,
        env: GridWorld,
        init_state: A::State,
        final_state: A::State,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        agent.find_state_index(&init_state)?;
        agent.find_state_index(&final_state)?;
        if agent.action_count() == 0 {
            return Err(PlannerError::invalid_parameter("agent", "agent has no actions"));
        }

        let tables = QEnsemble::new(config.tables, agent.state_count(), agent.action_count());

        Ok(EnsembleQLearning {
            config,
            agent,
            env,
            init_state,
            final_state,
            tables,
            rng,
        })
    }

    pub fn config(&self) -> &EnsembleConfig {
        &self.config
    }

    pub fn tables(&self) -> &QEnsemble {
        &self.tables
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn environment(&self) -> &GridWorld {
        &self.env
    }

    pub fn init_state(&self) -> &A::State {
        &self.init_state
    }

    pub fn final_state(&self) -> &A::State {
        &self.final_state
    }

    /// Zero all value tables
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Write the value tables to `path`
    pub fn save_tables<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.tables.save(path)
    }

    /// Replace the value tables with a snapshot; its shape must match
    pub fn load_tables<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let tables = QEnsemble::load(path)?;
        self.replace_tables(tables)
    }

    /// Replace the value tables; the shape must match
    pub fn replace_tables(&mut self, tables: QEnsemble) -> Result<()> {
        tables.ensure_shape(self.tables.shape())?;
        self.tables = tables;
        Ok(())
    }

    pub fn is_final(&self, state: &A::State) -> bool {
        *state == self.final_state
    }

    /// Whether the move `state → next_state` ends an episode
    pub fn is_terminal(&self, state: &A::State, next_state: &A::State) -> bool {
        let from = state.cell();
        let to = next_state.cell();

        !self.env.is_valid(to)
            || self.env.is_obstacle(to)
            || self.is_final(next_state)
            || !self.env.is_free(from, to)
    }

    /// Outcome reward of the move `state → next_state`, before motion cost
    pub fn compute_reward(&self, state: &A::State, next_state: &A::State) -> f64 {
        let rewards = &self.config.rewards;
        let from = state.cell();
        let to = next_state.cell();

        if !self.env.is_valid(to) || self.env.is_obstacle(to) || !self.env.is_free(from, to) {
            rewards.collision
        } else if self.is_final(next_state) {
            rewards.goal
        } else if state == next_state {
            rewards.self_loop
        } else {
            rewards.step
        }
    }

    fn reset_agent(&mut self) {
        self.agent.set_state(self.init_state.clone());
    }

    /// Greedy action on the summed tables; lowest index wins ties
    pub fn greedy_action(&self, state: &A::State) -> Result<A::Action> {
        let row = self.agent.find_state_index(state)?;
        self.agent.action_by_index(self.tables.greedy_action(row))
    }

    /// Epsilon-greedy action over the ensemble
    pub fn epsilon_greedy_action(&mut self, state: &A::State) -> Result<A::Action> {
        if self.rng.gen::<f64>() < self.config.epsilon {
            Ok(self.agent.random_action(&mut self.rng))
        } else {
            self.greedy_action(state)
        }
    }

    /// One generalized double Q-learning update
    ///
    /// Two table indices are drawn with replacement: the bootstrap action is
    /// the argmax of the selector table at `next_state` and is valued by the
    /// evaluator table, which is also the only table written.
    pub fn update(&mut self, state: &A::State, next_state: &A::State, action: &A::Action, reward: f64) -> Result<()> {
        let row = self.agent.find_state_index(state)?;
        let col = self.agent.find_action_index(action)?;

        let n = self.tables.table_count();
        let evaluator = self.rng.gen_range(0..n);
        let selector = self.rng.gen_range(0..n);

        let max_q = if self.is_terminal(state, next_state) {
            0.0
        } else {
            let row_next = self.agent.find_state_index(next_state)?;
            self.tables.cross_value(evaluator, selector, row_next)
        };

        let target = reward + self.config.gamma * max_q;
        self.tables.apply_td(evaluator, row, col, target, self.config.alpha);
        Ok(())
    }

    /// Ensemble-averaged max value of every state
    pub fn convergence(&self) -> Array1<f64> {
        self.tables.state_values()
    }

    /// Ensemble-averaged max value of the initial state
    pub fn start_value(&self) -> Result<f64> {
        let row = self.agent.find_state_index(&self.init_state)?;
        Ok(self.tables.state_value(row))
    }

    /// Run one episode from the initial state, learning as it goes
    pub fn run_episode(&mut self) -> Result<Episode<A::State, A::Action>> {
        self.reset_agent();
        let mut episode = Episode::start(self.agent.state());

        let mut last_state = self.agent.state();
        let mut state = self.agent.state();

        while !self.is_terminal(&last_state, &state) {
            if let Some(cap) = self.config.max_steps_per_episode {
                if episode.len() >= cap {
                    tracing::warn!(cap, state = ?state, "episode truncated at step cap");
                    episode.truncated = true;
                    break;
                }
            }

            let action = self.epsilon_greedy_action(&state)?;
            let (next_state, cost) = self.agent.transition_state(&action);

            let reward = self.compute_reward(&state, &next_state) - self.config.rewards.cost_scale * cost;
            self.update(&state, &next_state, &action, reward)?;

            episode.push(state.clone(), action, reward);
            last_state = std::mem::replace(&mut state, next_state);
        }

        episode.terminal = state;
        Ok(episode)
    }

    /// Train for the configured number of episodes
    pub fn learn(&mut self, logger: &mut dyn Logger, cancel: &CancelToken) -> Result<TrainingHistory> {
        self.learn_with(logger, cancel, |_| {})
    }

    /// Train, handing every finished episode to `on_episode`
    ///
    /// The callback is purely observational (live path display and the
    /// like). Cancellation is checked before each episode; a cancelled run
    /// returns the series recorded so far with `interrupted` set.
    pub fn learn_with<F>(
        &mut self,
        logger: &mut dyn Logger,
        cancel: &CancelToken,
        mut on_episode: F,
    ) -> Result<TrainingHistory>
    where
        F: FnMut(&Episode<A::State, A::Action>),
    {
        let episodes = self.config.episodes;
        let start_row = self.agent.find_state_index(&self.init_state)?;
        let mut history = TrainingHistory::with_capacity(self.config.rewards.goal, episodes);

        tracing::info!(
            episodes,
            tables = self.tables.table_count(),
            states = self.tables.state_count(),
            actions = self.tables.action_count(),
            "starting ensemble Q-learning"
        );

        for i in 1..=episodes {
            if cancel.is_cancelled() {
                logger.log("stop learning ...");
                history.mark_interrupted();
                break;
            }

            let episode = self.run_episode()?;
            let reached_goal = self.is_final(&episode.terminal);
            history.record(self.tables.state_value(start_row), episode.total_return, reached_goal);

            tracing::debug!(
                episode = i,
                steps = episode.len(),
                episode_return = episode.total_return,
                terminal = ?episode.terminal,
                reached_goal,
                "episode finished"
            );

            if reached_goal {
                let best = history.best_return.unwrap_or(episode.total_return);
                logger.log(&format!(
                    "Goal reached! Reward: {} Best Reward: {}",
                    history.adjusted(episode.total_return),
                    history.adjusted(best)
                ));
            }

            on_episode(&episode);

            if i % self.config.heartbeat_interval == 0 {
                logger.log(&format!("Completed Episode {}", i));
            }
        }

        tracing::info!(
            completed = history.episodes(),
            goals = history.goal_episodes,
            interrupted = history.interrupted,
            "training finished"
        );

        Ok(history)
    }

    /// Follow the greedy ensemble policy from the initial state to the goal
    ///
    /// Fails with [`PlannerError::PolicyLoop`] once the walk has visited as
    /// many states as exist, since a deterministic greedy walk that long is
    /// cycling.
    pub fn policy(&mut self) -> Result<GreedyPath<A::State, A::Action>> {
        self.reset_agent();
        let limit = self.agent.state_count();

        let mut states = Vec::new();
        let mut actions = Vec::new();
        let mut state = self.agent.state();

        while !self.is_final(&state) {
            if states.len() >= limit {
                return Err(PlannerError::PolicyLoop { limit });
            }

            let action = self.greedy_action(&state)?;
            states.push(state);
            actions.push(action.clone());
            state = self.agent.transition_state(&action).0;
        }

        states.push(state);
        actions.push(A::Action::noop());

        Ok(GreedyPath { states, actions })
    }
}
