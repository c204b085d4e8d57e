use super::gravity::acceleration;
use crate::config::CentralBody;
use crate::errors::SimulationError;
use crate::models::State;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Result<Self::State, SimulationError>;
}

/// Unperturbed two-body motion about `body`.
#[derive(Debug, Clone, Copy)]
pub struct TwoBodyDynamics<'a> {
    body: &'a CentralBody,
}

impl<'a> TwoBodyDynamics<'a> {
    pub fn new(body: &'a CentralBody) -> Self {
        Self { body }
    }
}

impl EquationsOfMotion for TwoBodyDynamics<'_> {
    type State = State;

    fn compute_derivative(&self, state: &State) -> Result<State, SimulationError> {
        // Position derivative is velocity, velocity derivative is gravity
        Ok(State {
            position: state.velocity,
            velocity: acceleration(&state.position, self.body)?,
        })
    }
}
