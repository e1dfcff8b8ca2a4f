pub mod export;
pub mod grid_render;
pub mod text_plots;

pub use export::{export_history_csv, export_history_json};
pub use grid_render::render_path;
pub use text_plots::{history_summary, plot_convergence, plot_returns, plot_series, training_progress};
