use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for planner states
///
/// A state may carry more than a position (heading, velocity bucket, ...),
/// but the collision model only ever looks at its grid cell.
pub trait PlannerState: Clone + Debug + PartialEq {
    /// The cartesian grid cell this state occupies
    fn cell(&self) -> Cell;
}

/// Trait for discrete planner actions
pub trait PlannerAction: Clone + Debug + PartialEq {
    /// Action that stands in for "no action taken", used to pad the action
    /// sequence at the goal
    fn noop() -> Self;
}

/// Integer cell in cartesian grid coordinates (origin bottom-left)
///
/// Coordinates are signed so that moves proposing to leave the grid are
/// representable and can be rejected by the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Cell { x, y }
    }

    /// Cell displaced by `(dx, dy)`
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Number of 4-connected moves between two cells
    pub fn manhattan(self, other: Cell) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Cell::new(x, y)
    }
}

impl PlannerState for Cell {
    fn cell(&self) -> Cell {
        *self
    }
}

/// Real-valued point in cartesian space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }
}

impl From<Cell> for Point2 {
    fn from(cell: Cell) -> Self {
        Point2::new(cell.x as f64, cell.y as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_offset_and_distance() {
        let c = Cell::new(1, 2);
        assert_eq!(c.offset(-1, 3), Cell::new(0, 5));
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(4, 4)), 8);
        assert_eq!(Cell::new(-2, 3).manhattan(Cell::new(1, 1)), 5);
    }

    #[test]
    fn test_point_from_cell() {
        let p: Point2 = Cell::new(3, -1).into();
        assert_eq!(p, Point2::new(3.0, -1.0));
    }
}
