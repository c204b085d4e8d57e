use super::energy::embed;
use crate::config::CentralBody;
use crate::constants::{ECCENTRICITY_RADICAND_TOLERANCE, MIN_POSITION_NORM, PI};
use crate::errors::SimulationError;
use nalgebra as na;

/// Size, period and shape of a bound two-body orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: f64, // m
    pub period: f64,          // s
    pub eccentricity: f64,    // -
}

impl OrbitalElements {
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

/// Closed-form elements of the orbit through `(r0, v0)`.
///
/// Assumes a bound (elliptical) orbit: parabolic and hyperbolic inputs are
/// rejected with a domain error, as is a position on the attracting centre.
pub fn orbital_elements(
    r0: &na::Vector2<f64>,
    v0: &na::Vector2<f64>,
    body: &CentralBody,
) -> Result<OrbitalElements, SimulationError> {
    let mu = body.mu();
    let a = OrbitalMechanics::compute_semi_major_axis(r0, v0, body)?;
    let period = OrbitalMechanics::compute_orbital_period(a, body)?;

    let h = embed(r0).cross(&embed(v0)).magnitude();
    let mut radicand = 1.0 - h * h / (mu * a);
    if radicand < 0.0 && radicand >= -ECCENTRICITY_RADICAND_TOLERANCE {
        // Rounding noise of an exactly circular orbit
        radicand = 0.0;
    }
    if !(radicand >= 0.0) {
        return Err(SimulationError::domain(
            "orbital_elements",
            "negative eccentricity radicand",
            radicand,
        ));
    }

    Ok(OrbitalElements {
        semi_major_axis: a,
        period,
        eccentricity: radicand.sqrt(),
    })
}

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    /// Vis-viva: `a = 1 / (2/|r| − |v|²/mu)`
    pub fn compute_semi_major_axis(
        r: &na::Vector2<f64>,
        v: &na::Vector2<f64>,
        body: &CentralBody,
    ) -> Result<f64, SimulationError> {
        let r_mag = r.magnitude();
        if !(r_mag >= MIN_POSITION_NORM) {
            return Err(SimulationError::domain(
                "semi_major_axis",
                "position norm below minimum radius",
                r_mag,
            ));
        }
        if !r_mag.is_finite() {
            return Err(SimulationError::domain(
                "semi_major_axis",
                "position norm is not finite",
                r_mag,
            ));
        }

        let denominator = 2.0 / r_mag - v.norm_squared() / body.mu();
        if !(denominator > 0.0) {
            return Err(SimulationError::domain(
                "semi_major_axis",
                "orbit is not bound (vis-viva denominator <= 0)",
                denominator,
            ));
        }
        Ok(1.0 / denominator)
    }

    /// Kepler's third law: `T = 2π·sqrt(a³/mu)`
    pub fn compute_orbital_period(a: f64, body: &CentralBody) -> Result<f64, SimulationError> {
        if !(a > 0.0) {
            return Err(SimulationError::domain(
                "orbital_period",
                "semi-major axis must be positive",
                a,
            ));
        }
        Ok(2.0 * PI * (a.powi(3) / body.mu()).sqrt())
    }
}
