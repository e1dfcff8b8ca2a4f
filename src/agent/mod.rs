//! # Agents
//!
//! An agent owns the discrete side of the problem: how states and actions
//! map to value-table rows and columns, how a move changes the state and
//! what it costs. The learning engine is written against the [`Agent`]
//! trait only.
//!
//! ## Available Agents
//!
//! - **GridAgent**: one-cell moves on a rectangular grid
//!   - 4- or 8-connected action sets
//!   - Cost is the Euclidean move length (1 or √2)
//!   - Moves are never clamped, so leaving the grid is observable
//!
//! ## Example Usage
//!
//! ```rust
//! use qpath::agent::{Agent, Connectivity, GridAgent, Move};
//! use qpath::types::Cell;
//!
//! let mut agent = GridAgent::new(5, 5, Connectivity::Four);
//! agent.set_state(Cell::new(0, 0));
//!
//! let (next, cost) = agent.transition_state(&Move::RIGHT);
//! assert_eq!(next, Cell::new(1, 0));
//! assert_eq!(cost, 1.0);
//! ```

pub mod traits;

mod grid_agent;

pub use grid_agent::{Connectivity, GridAgent, Move};
pub use traits::Agent;
