use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rewards handed out for transition outcomes
///
/// The step reward fed to the value update is the outcome reward minus
/// `cost_scale * cost`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardShaping {
    /// Leaving the grid, landing on an obstacle or crossing one
    pub collision: f64,
    /// Reaching the goal
    pub goal: f64,
    /// Staying in place
    pub self_loop: f64,
    /// Any other move
    pub step: f64,
    /// Weight of the agent-reported motion cost
    pub cost_scale: f64,
}

impl Default for RewardShaping {
    fn default() -> Self {
        RewardShaping {
            collision: -10.0,
            goal: 10.0,
            self_loop: -2.0,
            step: 0.0,
            cost_scale: 0.1,
        }
    }
}

/// Hyper-parameters of an ensemble Q-learning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsembleConfig {
    /// Number of value tables (1 is plain Q-learning)
    pub tables: usize,
    /// Episode budget for `learn`
    pub episodes: usize,
    /// Learning rate
    pub alpha: f64,
    /// Discount factor
    pub gamma: f64,
    /// Exploration rate
    pub epsilon: f64,
    /// Episodes between heartbeat messages
    pub heartbeat_interval: usize,
    /// Optional cap on steps per training episode
    pub max_steps_per_episode: Option<usize>,
    /// Seed for the engine's random source; `None` draws from entropy
    pub seed: Option<u64>,
    pub rewards: RewardShaping,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        EnsembleConfig {
            tables: 1,
            episodes: 1000,
            alpha: 0.5,
            gamma: 0.9,
            epsilon: 0.1,
            heartbeat_interval: 1000,
            max_steps_per_episode: None,
            seed: None,
            rewards: RewardShaping::default(),
        }
    }
}

impl EnsembleConfig {
    pub fn builder() -> EnsembleConfigBuilder {
        EnsembleConfigBuilder::new()
    }

    /// Check every parameter is inside its admissible range
    pub fn validate(&self) -> Result<()> {
        if self.tables == 0 {
            return Err(PlannerError::invalid_parameter("tables", "need at least one value table"));
        }
        if self.episodes == 0 {
            return Err(PlannerError::invalid_parameter("episodes", "need at least one episode"));
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(PlannerError::invalid_parameter(
                "alpha".to_string(),
                format!("must be in (0, 1], got {}", self.alpha),
            ));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(PlannerError::invalid_parameter(
                "gamma".to_string(),
                format!("must be in [0, 1], got {}", self.gamma),
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(PlannerError::invalid_parameter(
                "epsilon".to_string(),
                format!("must be in [0, 1], got {}", self.epsilon),
            ));
        }
        if self.heartbeat_interval == 0 {
            return Err(PlannerError::invalid_parameter("heartbeat_interval", "must be positive"));
        }
        if self.max_steps_per_episode == Some(0) {
            return Err(PlannerError::invalid_parameter("max_steps_per_episode", "must be positive"));
        }
        Ok(())
    }

    /// Load and validate a JSON configuration; missing fields take defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

/// Builder pattern for EnsembleConfig
pub struct EnsembleConfigBuilder {
    config: EnsembleConfig,
}

impl EnsembleConfigBuilder {
    pub fn new() -> Self {
        EnsembleConfigBuilder {
            config: EnsembleConfig::default(),
        }
    }

    pub fn tables(mut self, tables: usize) -> Self {
        self.config.tables = tables;
        self
    }

    pub fn episodes(mut self, episodes: usize) -> Self {
        self.config.episodes = episodes;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    pub fn heartbeat_interval(mut self, interval: usize) -> Self {
        self.config.heartbeat_interval = interval;
        self
    }

    pub fn max_steps_per_episode(mut self, steps: usize) -> Self {
        self.config.max_steps_per_episode = Some(steps);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn rewards(mut self, rewards: RewardShaping) -> Self {
        self.config.rewards = rewards;
        self
    }

    pub fn build(self) -> Result<EnsembleConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for EnsembleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
