use thiserror::Error;

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Main error type for the planner
///
/// Collisions, off-grid moves and blocked line of sight are *not* errors:
/// the engine models them as terminal transitions with a negative reward.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PlannerError {
    /// Shapes disagree (grids, value tables, snapshots)
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Invalid parameter value
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A state or action lies outside the agent's index space
    #[error("{kind} {value} is outside the agent's space of {limit}")]
    OutOfBounds {
        kind: &'static str,
        value: String,
        limit: usize,
    },

    /// Greedy rollout visited more states than exist without reaching the goal
    #[error("greedy policy did not reach the goal within {limit} steps")]
    PolicyLoop { limit: usize },

    /// IO errors (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary snapshot encoding/decoding errors
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON configuration/export errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error patterns
impl PlannerError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        PlannerError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        PlannerError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn out_of_bounds<V: std::fmt::Debug>(kind: &'static str, value: V, limit: usize) -> Self {
        PlannerError::OutOfBounds {
            kind,
            value: format!("{:?}", value),
            limit,
        }
    }
}
