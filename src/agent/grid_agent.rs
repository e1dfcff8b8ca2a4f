use super::traits::Agent;
use crate::error::{PlannerError, Result};
use crate::types::{Cell, PlannerAction};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Single-cell displacement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub dx: i64,
    pub dy: i64,
}

impl Move {
    pub const UP: Move = Move { dx: 0, dy: 1 };
    pub const RIGHT: Move = Move { dx: 1, dy: 0 };
    pub const DOWN: Move = Move { dx: 0, dy: -1 };
    pub const LEFT: Move = Move { dx: -1, dy: 0 };
    pub const UP_RIGHT: Move = Move { dx: 1, dy: 1 };
    pub const DOWN_RIGHT: Move = Move { dx: 1, dy: -1 };
    pub const DOWN_LEFT: Move = Move { dx: -1, dy: -1 };
    pub const UP_LEFT: Move = Move { dx: -1, dy: 1 };

    pub const fn new(dx: i64, dy: i64) -> Self {
        Move { dx, dy }
    }

    /// Euclidean length of the move
    pub fn length(&self) -> f64 {
        ((self.dx * self.dx + self.dy * self.dy) as f64).sqrt()
    }
}

impl PlannerAction for Move {
    fn noop() -> Self {
        Move::new(0, 0)
    }
}

/// Neighbourhood the agent may move in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Up, right, down, left
    Four,
    /// Four plus the diagonals
    Eight,
}

impl Connectivity {
    pub fn moves(&self) -> Vec<Move> {
        match self {
            Connectivity::Four => vec![Move::UP, Move::RIGHT, Move::DOWN, Move::LEFT],
            Connectivity::Eight => vec![
                Move::UP,
                Move::RIGHT,
                Move::DOWN,
                Move::LEFT,
                Move::UP_RIGHT,
                Move::DOWN_RIGHT,
                Move::DOWN_LEFT,
                Move::UP_LEFT,
            ],
        }
    }
}

/// Agent moving one cell at a time over a `width × height` grid
///
/// States are cartesian cells indexed row by row from the bottom
/// (`y * width + x`). Moves are not clamped: stepping off the grid yields an
/// off-grid cell that the learning engine treats as a terminal collision.
#[derive(Debug, Clone)]
pub struct GridAgent {
    width: usize,
    height: usize,
    moves: Vec<Move>,
    position: Cell,
}

impl GridAgent {
    pub fn new(width: usize, height: usize, connectivity: Connectivity) -> Self {
        Self::with_moves(width, height, connectivity.moves())
    }

    /// Agent with an explicit action list; column order follows `moves`
    pub fn with_moves(width: usize, height: usize, moves: Vec<Move>) -> Self {
        GridAgent {
            width,
            height,
            moves,
            position: Cell::new(0, 0),
        }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }
}

impl Agent for GridAgent {
    type State = Cell;
    type Action = Move;

    fn state_count(&self) -> usize {
        self.width * self.height
    }

    fn action_count(&self) -> usize {
        self.moves.len()
    }

    fn set_state(&mut self, state: Cell) {
        self.position = state;
    }

    fn state(&self) -> Cell {
        self.position
    }

    fn find_state_index(&self, state: &Cell) -> Result<usize> {
        if !self.contains(*state) {
            return Err(PlannerError::out_of_bounds("state", state, self.state_count()));
        }
        Ok(state.y as usize * self.width + state.x as usize)
    }

    fn find_action_index(&self, action: &Move) -> Result<usize> {
        self.moves
            .iter()
            .position(|m| m == action)
            .ok_or_else(|| PlannerError::out_of_bounds("action", action, self.moves.len()))
    }

    fn action_by_index(&self, index: usize) -> Result<Move> {
        self.moves
            .get(index)
            .copied()
            .ok_or_else(|| PlannerError::out_of_bounds("action index", index, self.moves.len()))
    }

    fn random_action(&self, rng: &mut dyn RngCore) -> Move {
        self.moves[rng.gen_range(0..self.moves.len())]
    }

    fn transition_state(&mut self, action: &Move) -> (Cell, f64) {
        self.position = self.position.offset(action.dx, action.dy);
        (self.position, action.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_state_indexing() {
        let agent = GridAgent::new(5, 3, Connectivity::Four);
        assert_eq!(agent.state_count(), 15);
        assert_eq!(agent.find_state_index(&Cell::new(0, 0)).unwrap(), 0);
        assert_eq!(agent.find_state_index(&Cell::new(4, 0)).unwrap(), 4);
        assert_eq!(agent.find_state_index(&Cell::new(1, 2)).unwrap(), 11);
    }

    #[test]
    fn test_out_of_bounds_state() {
        let agent = GridAgent::new(2, 2, Connectivity::Four);
        assert!(matches!(
            agent.find_state_index(&Cell::new(2, 0)),
            Err(PlannerError::OutOfBounds { .. })
        ));
        assert!(agent.find_state_index(&Cell::new(0, -1)).is_err());
    }

    #[test]
    fn test_action_indexing() {
        let agent = GridAgent::new(3, 3, Connectivity::Eight);
        assert_eq!(agent.action_count(), 8);
        for i in 0..agent.action_count() {
            let action = agent.action_by_index(i).unwrap();
            assert_eq!(agent.find_action_index(&action).unwrap(), i);
        }
        assert!(agent.action_by_index(8).is_err());
        assert!(agent.find_action_index(&Move::noop()).is_err());
    }

    #[test]
    fn test_transition_is_unclamped() {
        let mut agent = GridAgent::new(3, 3, Connectivity::Eight);
        agent.set_state(Cell::new(0, 0));
        let (next, cost) = agent.transition_state(&Move::LEFT);
        assert_eq!(next, Cell::new(-1, 0));
        assert_eq!(cost, 1.0);
        assert_eq!(agent.state(), Cell::new(-1, 0));

        agent.set_state(Cell::new(1, 1));
        let (next, cost) = agent.transition_state(&Move::UP_RIGHT);
        assert_eq!(next, Cell::new(2, 2));
        assert!((cost - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_random_action_in_action_set() {
        let agent = GridAgent::new(3, 3, Connectivity::Four);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let action = agent.random_action(&mut rng);
            assert!(agent.moves().contains(&action));
        }
    }
}
