use crate::constants::{G, M_EARTH, R_EARTH};

/// Physical constants of the attracting body, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    pub gravitational_constant: f64, // m³/kg/s²
    pub mass: f64,                   // kg
    pub radius: f64,                 // m
}

impl CentralBody {
    pub const EARTH: CentralBody = CentralBody {
        gravitational_constant: G,
        mass: M_EARTH,
        radius: R_EARTH,
    };

    pub const fn new(gravitational_constant: f64, mass: f64, radius: f64) -> Self {
        Self {
            gravitational_constant,
            mass,
            radius,
        }
    }

    /// Standard gravitational parameter G·M [m³/s²]
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.mass
    }

    pub fn circular_velocity(&self, r: f64) -> f64 {
        (self.mu() / r).sqrt()
    }
}

impl Default for CentralBody {
    fn default() -> Self {
        Self::EARTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(CentralBody::EARTH, 3.985_892e14; "earth")]
    #[test_case(CentralBody::new(G, 6.4171e23, 3.3895e6), 4.282_965e13; "mars")]
    fn test_mu(body: CentralBody, expected: f64) {
        assert_relative_eq!(body.mu(), expected, max_relative = 1e-4);
    }

    #[test]
    fn circular_velocity_at_700km() {
        let v = CentralBody::EARTH.circular_velocity(R_EARTH + 700e3);
        assert_relative_eq!(v, 7507.96, max_relative = 1e-4);
    }
}
