pub mod output_errors;
pub mod trajectory_csv;

pub use output_errors::OutputError;
pub use trajectory_csv::{write_trajectory, TrajectoryRecord};
