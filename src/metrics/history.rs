use super::statistics::Statistics;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Per-episode series collected by a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    /// Ensemble-averaged max value of the initial state after each episode
    pub convergence: Vec<f64>,

    /// Total return of each episode
    pub returns: Vec<f64>,

    /// Episodes that ended on the goal
    pub goal_episodes: usize,

    /// Highest return seen so far
    pub best_return: Option<f64>,

    /// Goal bonus included in returns, removed for reporting
    pub goal_reward: f64,

    /// Training stopped on a cancel request
    pub interrupted: bool,
}

impl TrainingHistory {
    pub fn new(goal_reward: f64) -> Self {
        Self::with_capacity(goal_reward, 0)
    }

    pub fn with_capacity(goal_reward: f64, episodes: usize) -> Self {
        TrainingHistory {
            convergence: Vec::with_capacity(episodes),
            returns: Vec::with_capacity(episodes),
            goal_episodes: 0,
            best_return: None,
            goal_reward,
            interrupted: false,
        }
    }

    /// Record one completed episode
    pub fn record(&mut self, convergence: f64, episode_return: f64, reached_goal: bool) {
        self.convergence.push(convergence);
        self.returns.push(episode_return);
        if reached_goal {
            self.goal_episodes += 1;
        }
        self.best_return = Some(match self.best_return {
            Some(best) if best >= episode_return => best,
            _ => episode_return,
        });
    }

    pub fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }

    /// Number of completed episodes
    pub fn episodes(&self) -> usize {
        self.returns.len()
    }

    /// `episode_return` with the goal bonus removed
    pub fn adjusted(&self, episode_return: f64) -> f64 {
        episode_return - self.goal_reward
    }

    /// Best return with the goal bonus removed
    pub fn best_adjusted_return(&self) -> Option<f64> {
        self.best_return.map(|best| self.adjusted(best))
    }

    /// Statistics over the returns of `episodes` (clamped to what was recorded)
    pub fn return_stats(&self, episodes: Range<usize>) -> Statistics {
        let end = episodes.end.min(self.returns.len());
        let start = episodes.start.min(end);
        Statistics::from_slice(&self.returns[start..end])
    }

    /// Statistics over the last `window` returns
    pub fn recent_return_stats(&self, window: usize) -> Statistics {
        let len = self.returns.len();
        self.return_stats(len.saturating_sub(window)..len)
    }

    pub fn final_convergence(&self) -> Option<f64> {
        self.convergence.last().copied()
    }
}
