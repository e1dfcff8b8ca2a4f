use serde::{Deserialize, Serialize};

/// Trace of one training episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode<S, A> {
    /// States the agent acted from, in order
    pub states: Vec<S>,
    /// Action taken from each state
    pub actions: Vec<A>,
    /// Step reward received for each action
    pub rewards: Vec<f64>,
    /// State the episode ended in
    pub terminal: S,
    /// Sum of `rewards`
    pub total_return: f64,
    /// Ended by the step cap rather than a terminal transition
    pub truncated: bool,
}

impl<S: Clone, A> Episode<S, A> {
    pub(crate) fn start(initial: S) -> Self {
        Episode {
            states: Vec::new(),
            actions: Vec::new(),
            rewards: Vec::new(),
            terminal: initial,
            total_return: 0.0,
            truncated: false,
        }
    }

    pub(crate) fn push(&mut self, state: S, action: A, reward: f64) {
        self.states.push(state);
        self.actions.push(action);
        self.rewards.push(reward);
        self.total_return += reward;
    }

    /// Number of actions taken
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Visited states followed by the terminal state
    pub fn path(&self) -> Vec<S> {
        let mut path = self.states.clone();
        path.push(self.terminal.clone());
        path
    }
}

/// Path produced by following the greedy ensemble policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreedyPath<S, A> {
    /// Visited states, starting state first and goal last
    pub states: Vec<S>,
    /// Action taken from each state; the goal carries the no-op action
    pub actions: Vec<A>,
}

impl<S, A> GreedyPath<S, A> {
    /// Number of moves from start to goal
    pub fn steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn goal(&self) -> Option<&S> {
        self.states.last()
    }
}
