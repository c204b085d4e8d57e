pub mod state;
pub mod trajectory;

pub use state::State;
pub use trajectory::{Sample, Trajectory};
