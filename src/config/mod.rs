pub mod body;
pub mod scenario;

pub use body::CentralBody;
pub use scenario::Scenario;
