use super::body::CentralBody;
use crate::constants::{DEFAULT_ALTITUDE, DEFAULT_SPEED, R_EARTH};
use crate::errors::SimulationError;
use crate::models::State;
use hifitime::Epoch;
use nalgebra as na;

/// A complete forward-simulation setup: body, initial conditions and time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub body: CentralBody,
    pub position: na::Vector2<f64>, // m
    pub velocity: na::Vector2<f64>, // m/s
    pub dt: f64,                    // s
    pub t_max: f64,                 // s
    pub start_epoch: Epoch,
}

impl Scenario {
    /// Circular orbit at `radius`, starting on the +x axis, moving prograde.
    pub fn circular(body: CentralBody, radius: f64, dt: f64, t_max: f64) -> Self {
        Self {
            position: na::Vector2::new(radius, 0.0),
            velocity: na::Vector2::new(0.0, body.circular_velocity(radius)),
            dt,
            t_max,
            body,
            ..Self::default()
        }
    }

    pub fn initial_state(&self) -> State {
        State::new(self.position, self.velocity)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_time_grid(self.dt, self.t_max)
    }
}

impl Default for Scenario {
    /// Reference run: 700 km altitude above Earth, slightly sub-circular speed.
    fn default() -> Self {
        Self {
            body: CentralBody::EARTH,
            position: na::Vector2::new(R_EARTH + DEFAULT_ALTITUDE, 0.0),
            velocity: na::Vector2::new(0.0, DEFAULT_SPEED),
            dt: 1.0,
            t_max: 6000.0,
            start_epoch: Epoch::from_gregorian_utc(2024, 3, 15, 0, 0, 0, 0),
        }
    }
}

pub(crate) fn validate_time_grid(dt: f64, t_max: f64) -> Result<(), SimulationError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimulationError::InvalidParameter {
            name: "dt",
            value: dt,
        });
    }
    if !(t_max.is_finite() && t_max > 0.0) {
        return Err(SimulationError::InvalidParameter {
            name: "t_max",
            value: t_max,
        });
    }
    Ok(())
}
