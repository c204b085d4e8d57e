//! Fixed-step forward propagation over the half-open interval `[0, t_max)`.
//!
//! `Propagator::samples` yields one `Sample` per grid time `i·dt` lazily, so a
//! caller can stream, truncate or restart a run without holding the whole
//! trajectory in memory. `simulate` collects a full run.

use crate::config::scenario::validate_time_grid;
use crate::config::{CentralBody, Scenario};
use crate::errors::SimulationError;
use crate::integrators::RK4;
use crate::models::{Sample, State, Trajectory};
use crate::physics::dynamics::TwoBodyDynamics;
use log::{debug, trace};

/// Number of grid times `i·dt` strictly below `t_max`.
///
/// `t = 0` is always sampled. A grid whose size does not fit in `usize` is an
/// invalid parameter.
pub fn sample_count(dt: f64, t_max: f64) -> Result<usize, SimulationError> {
    let quotient = t_max / dt;
    if !quotient.is_finite() || quotient.ceil() >= usize::MAX as f64 {
        return Err(SimulationError::InvalidParameter {
            name: "t_max / dt",
            value: quotient,
        });
    }

    let mut n = (quotient.ceil() as usize).max(1);
    // Guard against the quotient rounding up past the open bound
    while n > 1 && (n - 1) as f64 * dt >= t_max {
        n -= 1;
    }
    Ok(n)
}

/// Immutable description of a run. Every call to `samples` starts over from
/// the initial state.
#[derive(Debug, Clone, Copy)]
pub struct Propagator<'a> {
    body: &'a CentralBody,
    initial: State,
    dt: f64,
    steps: usize,
}

impl<'a> Propagator<'a> {
    pub fn new(
        body: &'a CentralBody,
        initial: State,
        dt: f64,
        t_max: f64,
    ) -> Result<Self, SimulationError> {
        validate_time_grid(dt, t_max)?;
        Ok(Self {
            body,
            initial,
            dt,
            steps: sample_count(dt, t_max)?,
        })
    }

    pub fn from_scenario(scenario: &'a Scenario) -> Result<Self, SimulationError> {
        Self::new(
            &scenario.body,
            scenario.initial_state(),
            scenario.dt,
            scenario.t_max,
        )
    }

    /// Number of samples a complete run yields.
    pub fn len(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    pub fn samples(&self) -> Samples<'a> {
        Samples {
            integrator: RK4::new(TwoBodyDynamics::new(self.body)),
            state: self.initial,
            dt: self.dt,
            index: 0,
            steps: self.steps,
        }
    }
}

/// Lazy sample sequence of a `Propagator` run.
///
/// The first item is the initial state at `t = 0`. After an integration
/// failure the error is yielded once and the sequence ends.
pub struct Samples<'a> {
    integrator: RK4<TwoBodyDynamics<'a>>,
    state: State,
    dt: f64,
    index: usize,
    steps: usize,
}

impl Samples<'_> {
    /// Consumes the sequence and steps once past the last yielded sample.
    pub fn finish(self) -> Result<State, SimulationError> {
        self.integrator.integrate(&self.state, self.dt)
    }
}

impl Iterator for Samples<'_> {
    type Item = Result<Sample, SimulationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.steps {
            return None;
        }
        if self.index > 0 {
            match self.integrator.integrate(&self.state, self.dt) {
                Ok(next) => self.state = next,
                Err(e) => {
                    self.steps = self.index;
                    return Some(Err(e));
                }
            }
        }

        let time = self.index as f64 * self.dt;
        trace!("t = {:.3} s, r = {:.3} m", time, self.state.radius());
        self.index += 1;
        Some(Ok(Sample {
            time,
            state: self.state,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.steps - self.index))
    }
}

/// Runs `initial` forward on the grid `0, dt, 2·dt, ... < t_max`.
///
/// Returns the sampled trajectory and the state one step past the last sample.
pub fn simulate(
    initial: &State,
    dt: f64,
    t_max: f64,
    body: &CentralBody,
) -> Result<(Trajectory, State), SimulationError> {
    let propagator = Propagator::new(body, *initial, dt, t_max)?;
    debug!(
        "propagating {} samples with dt = {} s (t_max = {} s)",
        propagator.len(),
        dt,
        t_max
    );

    let mut trajectory = Trajectory::with_capacity(propagator.len());
    let mut samples = propagator.samples();
    for sample in samples.by_ref() {
        trajectory.push(&sample?);
    }
    let final_state = samples.finish()?;
    debug!("propagation done, final radius {:.3} m", final_state.radius());

    Ok((trajectory, final_state))
}

pub fn simulate_scenario(scenario: &Scenario) -> Result<(Trajectory, State), SimulationError> {
    simulate(
        &scenario.initial_state(),
        scenario.dt,
        scenario.t_max,
        &scenario.body,
    )
}
