use crate::config::CentralBody;
use crate::constants::MIN_POSITION_NORM;
use crate::errors::SimulationError;
use nalgebra as na;

/// Newtonian point-mass acceleration `-G·M·r / |r|³` for a body at the origin.
///
/// Fails with a domain error when `|r|` is below `MIN_POSITION_NORM`, i.e. the
/// satellite sits on the attracting centre, or when `|r|` is not finite.
pub fn acceleration(
    position: &na::Vector2<f64>,
    body: &CentralBody,
) -> Result<na::Vector2<f64>, SimulationError> {
    let r2 = position.norm_squared();
    let r = r2.sqrt();
    if !(r >= MIN_POSITION_NORM) {
        return Err(SimulationError::domain(
            "acceleration",
            "position norm below minimum radius",
            r,
        ));
    }
    if !r.is_finite() {
        return Err(SimulationError::domain(
            "acceleration",
            "position norm is not finite",
            r,
        ));
    }
    Ok(position * (-body.mu() / (r2 * r)))
}
