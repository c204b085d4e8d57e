use crate::config::CentralBody;
use crate::errors::SimulationError;
use crate::models::State;
use crate::physics::dynamics::{EquationsOfMotion, TwoBodyDynamics};

/// Classical fixed-step fourth-order Runge-Kutta.
pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T>
where
    T::State: Clone + std::ops::Add<Output = T::State> + std::ops::Mul<f64, Output = T::State>,
{
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }

    /// Advances `state` by `dt`. Any failing stage aborts the step.
    pub fn integrate(&self, state: &T::State, dt: f64) -> Result<T::State, SimulationError> {
        let k1 = self.eom.compute_derivative(state)?;

        let state2 = state.clone() + k1.clone() * (dt / 2.0);
        let k2 = self.eom.compute_derivative(&state2)?;

        let state3 = state.clone() + k2.clone() * (dt / 2.0);
        let k3 = self.eom.compute_derivative(&state3)?;

        let state4 = state.clone() + k3.clone() * dt;
        let k4 = self.eom.compute_derivative(&state4)?;

        Ok(state.clone() + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0))
    }
}

/// One RK4 step of two-body motion about `body`.
pub fn step(state: &State, dt: f64, body: &CentralBody) -> Result<State, SimulationError> {
    RK4::new(TwoBodyDynamics::new(body)).integrate(state, dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::gravity::acceleration;
    use approx::assert_relative_eq;
    use nalgebra as na;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Harmonic oscillator x'' = -x packed into the planar state.
    struct Oscillator;

    impl EquationsOfMotion for Oscillator {
        type State = State;

        fn compute_derivative(&self, state: &State) -> Result<State, SimulationError> {
            Ok(State::new(state.velocity, -state.position))
        }
    }

    #[test]
    fn oscillator_is_fourth_order() {
        let integrator = RK4::new(Oscillator);
        let exact = |t: f64| (t.cos(), -t.sin());

        let error_with = |dt: f64| {
            let steps = (1.0 / dt).round() as usize;
            let mut state = State::new(na::Vector2::new(1.0, 0.0), na::Vector2::zeros());
            for _ in 0..steps {
                state = integrator.integrate(&state, dt).unwrap();
            }
            (state.position.x - exact(1.0).0).abs()
        };

        let ratio = error_with(0.1) / error_with(0.05);
        // Halving dt shrinks the global error by ~2^4
        assert!(ratio > 12.0 && ratio < 20.0, "ratio = {}", ratio);
        assert!(error_with(0.01) < 1e-9);
    }

    #[test]
    fn step_matches_explicit_stage_formulas() {
        let body = CentralBody::EARTH;
        let dt = 10.0;
        let r = na::Vector2::new(7.071e6, 1.0e5);
        let v = na::Vector2::new(-50.0, 7500.0);
        let a = |p: na::Vector2<f64>| acceleration(&p, &body).unwrap();

        let k1r = v;
        let k1v = a(r);
        let k2r = v + 0.5 * dt * k1v;
        let k2v = a(r + 0.5 * dt * k1r);
        let k3r = v + 0.5 * dt * k2v;
        let k3v = a(r + 0.5 * dt * k2r);
        let k4r = v + dt * k3v;
        let k4v = a(r + dt * k3r);
        let r_new = r + (dt / 6.0) * (k1r + 2.0 * k2r + 2.0 * k3r + k4r);
        let v_new = v + (dt / 6.0) * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);

        let next = step(&State::new(r, v), dt, &body).unwrap();
        assert_relative_eq!(next.position, r_new, max_relative = 1e-12);
        assert_relative_eq!(next.velocity, v_new, max_relative = 1e-12);
    }

    #[test]
    fn step_is_deterministic() {
        let body = CentralBody::EARTH;
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let state = State::new(
                na::Vector2::new(rng.gen_range(6.5e6..4.0e7), rng.gen_range(-1.0e7..1.0e7)),
                na::Vector2::new(rng.gen_range(-8.0e3..8.0e3), rng.gen_range(-8.0e3..8.0e3)),
            );
            let dt = rng.gen_range(0.1..60.0);
            assert_eq!(step(&state, dt, &body), step(&state, dt, &body));
        }
    }

    #[test]
    fn step_through_centre_fails() {
        // The stage-2 midpoint r + dt/2·v lands exactly on the origin
        let state = State::new(na::Vector2::new(1000.0, 0.0), na::Vector2::new(-2000.0, 0.0));
        let err = step(&state, 1.0, &CentralBody::EARTH).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn step_from_centre_fails() {
        let err = step(&State::zero(), 1.0, &CentralBody::EARTH).unwrap_err();
        assert!(err.is_domain_error());
    }
}
