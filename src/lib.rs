//! Two-body orbit propagation with a fixed-step RK4 integrator.
//!
//! The core is `physics::acceleration`, `integrators::step`,
//! `simulation::simulate` and `physics::orbital_elements`; every computation
//! takes the attracting body as an explicit `config::CentralBody`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod integrators;
pub mod models;
pub mod output;
pub mod physics;
pub mod simulation;

pub use config::{CentralBody, Scenario};
pub use errors::SimulationError;
pub use integrators::step;
pub use models::{Sample, State, Trajectory};
pub use physics::{acceleration, orbital_elements, OrbitalElements};
pub use simulation::{simulate, Propagator};
