use crate::config::CentralBody;
use crate::models::State;
use nalgebra as na;

/// Specific orbital energy `|v|²/2 − mu/|r|` [J/kg]
pub fn specific_energy(state: &State, body: &CentralBody) -> f64 {
    let r = state.radius();
    let v = state.speed();

    0.5 * v * v - body.mu() / r
}

/// Out-of-plane component of `r × v` [m²/s]; positive for prograde motion.
pub fn specific_angular_momentum(state: &State) -> f64 {
    embed(&state.position).cross(&embed(&state.velocity)).z
}

pub(crate) fn embed(v: &na::Vector2<f64>) -> na::Vector3<f64> {
    na::Vector3::new(v.x, v.y, 0.0)
}
