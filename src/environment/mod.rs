//! # Grid Environment
//!
//! The world the planner moves in: an immutable occupancy grid whose blocked
//! cells act as real-valued unit-square obstacles.
//!
//! ## Coordinates
//!
//! - **Matrix**: `(row, col)`, row 0 at the top, used only for storage
//! - **Cartesian**: `(x, y)`, y 0 at the bottom, used by everything else
//!
//! ```rust
//! use qpath::environment::GridWorld;
//! use qpath::types::Cell;
//!
//! let grid = GridWorld::from_ascii("
//!     ...
//!     .#.
//!     ...
//! ").unwrap();
//!
//! assert!(!grid.is_free(Cell::new(0, 0), Cell::new(2, 2)));
//! assert!(grid.is_free(Cell::new(0, 0), Cell::new(2, 0)));
//! ```

mod grid;

pub use grid::GridWorld;
