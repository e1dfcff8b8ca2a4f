use crate::error::Result;
use crate::types::{PlannerAction, PlannerState};
use rand::RngCore;

/// Discrete state/action encoding and transition dynamics
///
/// The learning engine never interprets states or actions itself. It asks
/// the agent for table indices, random actions and the outcome of a move.
pub trait Agent {
    type State: PlannerState;
    type Action: PlannerAction;

    /// Number of rows in each value table
    fn state_count(&self) -> usize;

    /// Number of columns in each value table
    fn action_count(&self) -> usize;

    /// Place the agent in `state`
    fn set_state(&mut self, state: Self::State);

    /// Current state of the agent
    fn state(&self) -> Self::State;

    /// Table row of `state`
    fn find_state_index(&self, state: &Self::State) -> Result<usize>;

    /// Table column of `action`
    fn find_action_index(&self, action: &Self::Action) -> Result<usize>;

    /// Action stored in table column `index`
    fn action_by_index(&self, index: usize) -> Result<Self::Action>;

    /// Uniformly random action drawn from `rng`
    fn random_action(&self, rng: &mut dyn RngCore) -> Self::Action;

    /// Apply `action` and return the new state with its motion cost
    ///
    /// The returned state may lie off the grid or on an obstacle; judging
    /// that is the environment's job.
    fn transition_state(&mut self, action: &Self::Action) -> (Self::State, f64);
}
