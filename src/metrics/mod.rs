pub mod history;
pub mod statistics;

pub use history::TrainingHistory;
pub use statistics::Statistics;
