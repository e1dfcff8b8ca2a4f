
use crate::agent::{Connectivity, GridAgent};
use crate::ensemble::{EnsembleConfig, EnsembleQLearning};
use crate::environment::GridWorld;
use crate::types::Cell;

/// Engine on an ASCII map with a 4-connected agent
pub(crate) fn planner_on(map: &str, start: Cell, goal: Cell, config: EnsembleConfig) -> EnsembleQLearning<GridAgent> {
    let grid = GridWorld::from_ascii(map).unwrap();
    let agent = GridAgent::new(grid.width(), grid.height(), Connectivity::Four);
    EnsembleQLearning::new(config, agent, grid, start, goal).unwrap()
}

pub(crate) const CENTER_BLOCKED: &str = "
    ...
    .#.
    ...
";
