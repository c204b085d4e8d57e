use nalgebra as na;

/// Translational state of the orbiting body in the orbital plane.
///
/// The same type doubles as the state derivative (velocity, acceleration) so the
/// integrator can combine stages with `+` and `* f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: na::Vector2<f64>,
    pub velocity: na::Vector2<f64>,
}

impl State {
    pub fn new(position: na::Vector2<f64>, velocity: na::Vector2<f64>) -> Self {
        State { position, velocity }
    }

    pub fn zero() -> Self {
        State {
            position: na::Vector2::zeros(),
            velocity: na::Vector2::zeros(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.position.magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

impl std::ops::Add for State {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        State {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
        }
    }
}

impl std::ops::Mul<f64> for State {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        State {
            position: self.position * scalar,
            velocity: self.velocity * scalar,
        }
    }
}
