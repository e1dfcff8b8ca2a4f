use crate::error::{PlannerError, Result};
use crate::geometry::Aabb;
use crate::types::{Cell, Point2};
use ndarray::Array2;

/// 2D occupancy grid with a continuous collision model
///
/// The matrix is stored row-major with row 0 at the top (`free[[row, col]]`,
/// `true` = traversable). All planning logic works in cartesian cells with
/// the origin at the bottom-left; `to_grid_row` / `to_cartesian_y` convert
/// between the two.
///
/// Every blocked cell is treated as a closed unit square around its
/// cartesian centre, and a move between two cells is free only when the
/// straight segment joining them misses all of those squares.
#[derive(Debug, Clone)]
pub struct GridWorld {
    free: Array2<bool>,
    obstacles: Vec<Aabb>,
}

impl GridWorld {
    /// Create a grid from an occupancy matrix
    pub fn new(free: Array2<bool>) -> Result<Self> {
        let (height, width) = free.dim();
        if height == 0 || width == 0 {
            return Err(PlannerError::invalid_parameter(
                "grid",
                "grid must have at least one row and one column",
            ));
        }

        let obstacles = free
            .indexed_iter()
            .filter(|(_, is_free)| !**is_free)
            .map(|((row, col), _)| {
                let y = (height - 1 - row) as f64;
                Aabb::unit_square(Point2::new(col as f64, y))
            })
            .collect();

        Ok(GridWorld { free, obstacles })
    }

    /// Create a grid from nested rows, top row first
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PlannerError::dimension_mismatch(
                format!("{} columns in every row", width),
                format!("{} columns in row {}", row.len(), i),
            ));
        }

        let flat: Vec<bool> = rows.iter().flatten().copied().collect();
        let free = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| PlannerError::dimension_mismatch(format!("{}x{}", height, width), e.to_string()))?;
        Self::new(free)
    }

    /// Parse an ASCII map: `.` is free, `#` is blocked, top row first.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(map: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in map.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let row = line
                .chars()
                .map(|c| match c {
                    '.' => Ok(true),
                    '#' => Ok(false),
                    other => Err(PlannerError::invalid_parameter(
                        "map".to_string(),
                        format!("unexpected character '{}' on line {}", other, line_no),
                    )),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    pub fn height(&self) -> usize {
        self.free.nrows()
    }

    pub fn width(&self) -> usize {
        self.free.ncols()
    }

    /// Raw occupancy matrix (row 0 at the top)
    pub fn occupancy(&self) -> &Array2<bool> {
        &self.free
    }

    /// Footprints of all blocked cells
    pub fn obstacles(&self) -> &[Aabb] {
        &self.obstacles
    }

    /// Cartesian y → matrix row
    pub fn to_grid_row(&self, y: i64) -> i64 {
        self.height() as i64 - 1 - y
    }

    /// Matrix row → cartesian y
    pub fn to_cartesian_y(&self, row: i64) -> i64 {
        self.height() as i64 - 1 - row
    }

    /// Whether `cell` lies inside the grid
    pub fn is_valid(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width() && (cell.y as usize) < self.height()
    }

    /// Whether `cell` is blocked.
    ///
    /// The caller must check `is_valid` first; out-of-range cells panic on
    /// the matrix index.
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        debug_assert!(self.is_valid(cell), "is_obstacle called with off-grid cell {}", cell);
        let row = self.to_grid_row(cell.y) as usize;
        !self.free[[row, cell.x as usize]]
    }

    /// Whether the straight move `from → to` misses every obstacle footprint
    pub fn is_free(&self, from: Cell, to: Cell) -> bool {
        if from == to {
            return true;
        }

        let start = Point2::from(from);
        let end = Point2::from(to);
        !self.obstacles.iter().any(|bbox| bbox.intersects_segment(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn center_blocked() -> GridWorld {
        GridWorld::from_ascii(
            "...
             .#.
             ...",
        )
        .unwrap()
    }

    #[test]
    fn test_coordinate_conversion() {
        let grid = GridWorld::new(Array2::from_elem((4, 6), true)).unwrap();
        assert_eq!(grid.to_grid_row(0), 3);
        assert_eq!(grid.to_cartesian_y(3), 0);
        for row in 0..4 {
            assert_eq!(grid.to_grid_row(grid.to_cartesian_y(row)), row);
        }
    }

    #[test]
    fn test_is_valid() {
        let grid = GridWorld::new(Array2::from_elem((2, 3), true)).unwrap();
        assert!(grid.is_valid(Cell::new(0, 0)));
        assert!(grid.is_valid(Cell::new(2, 1)));
        assert!(!grid.is_valid(Cell::new(3, 0)));
        assert!(!grid.is_valid(Cell::new(0, 2)));
        assert!(!grid.is_valid(Cell::new(-1, 0)));
    }

    #[test]
    fn test_is_obstacle_uses_cartesian_rows() {
        // Top row is blocked on the left only
        let grid = GridWorld::new(array![[false, true], [true, true]]).unwrap();
        assert!(grid.is_obstacle(Cell::new(0, 1)));
        assert!(!grid.is_obstacle(Cell::new(0, 0)));
        assert!(!grid.is_obstacle(Cell::new(1, 1)));
    }

    #[test]
    fn test_obstacle_footprints() {
        let grid = center_blocked();
        assert_eq!(grid.obstacles().len(), 1);
        assert_eq!(grid.obstacles()[0], Aabb::new(0.5, 1.5, 0.5, 1.5));
    }

    #[test]
    fn test_line_of_sight() {
        let grid = center_blocked();
        assert!(!grid.is_free(Cell::new(0, 0), Cell::new(2, 2)));
        assert!(grid.is_free(Cell::new(0, 0), Cell::new(2, 0)));
        assert!(!grid.is_free(Cell::new(1, 0), Cell::new(1, 2)));
        assert!(grid.is_free(Cell::new(1, 1), Cell::new(1, 1)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![true, true], vec![true]];
        assert!(matches!(
            GridWorld::from_rows(&rows),
            Err(PlannerError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_bad_ascii_rejected() {
        assert!(GridWorld::from_ascii("..\n.x").is_err());
        assert!(GridWorld::from_ascii("").is_err());
    }
}
