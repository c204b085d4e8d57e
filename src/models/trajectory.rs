use super::state::State;
use crate::constants::MAX_PREALLOCATED_SAMPLES;
use nalgebra as na;

/// One sampled point of a propagation: the state at `time` seconds after start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub state: State,
}

/// Sampled positions in increasing time order. Append-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    positions: Vec<na::Vector2<f64>>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `capacity` samples, up to `MAX_PREALLOCATED_SAMPLES`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_PREALLOCATED_SAMPLES);
        Trajectory {
            times: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
        }
    }

    /// Appends a sample. Sample times must be strictly increasing.
    pub fn push(&mut self, sample: &Sample) {
        debug_assert!(self.last_time().map_or(true, |t| sample.time > t));
        self.times.push(sample.time);
        self.positions.push(sample.state.position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[na::Vector2<f64>] {
        &self.positions
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Whether any sampled point lies strictly inside `radius`.
    pub fn dips_below(&self, radius: f64) -> bool {
        self.min_radius().is_some_and(|r| r < radius)
    }

    /// Closest approach to the central body over the sampled points.
    pub fn min_radius(&self) -> Option<f64> {
        self.positions
            .iter()
            .map(|p| p.magnitude())
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn max_radius(&self) -> Option<f64> {
        self.positions
            .iter()
            .map(|p| p.magnitude())
            .max_by(|a, b| a.total_cmp(b))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &na::Vector2<f64>)> + '_ {
        self.times.iter().copied().zip(self.positions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64, x: f64, y: f64) -> Sample {
        Sample {
            time,
            state: State::new(na::Vector2::new(x, y), na::Vector2::zeros()),
        }
    }

    #[test]
    fn push_keeps_time_order() {
        let mut trajectory = Trajectory::new();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.min_radius(), None);

        trajectory.push(&sample(0.0, 3.0, 4.0));
        trajectory.push(&sample(1.0, 0.0, 2.0));
        trajectory.push(&sample(2.0, 10.0, 0.0));

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.times(), &[0.0, 1.0, 2.0]);
        assert_eq!(trajectory.positions()[1], na::Vector2::new(0.0, 2.0));
        assert_eq!(trajectory.last_time(), Some(2.0));
        assert_eq!(trajectory.min_radius(), Some(2.0));
        assert_eq!(trajectory.max_radius(), Some(10.0));

        let times: Vec<f64> = trajectory.iter().map(|(t, _)| t).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn oversized_reservation_is_capped() {
        let mut trajectory = Trajectory::with_capacity(usize::MAX);
        assert!(trajectory.positions.capacity() < 2 * MAX_PREALLOCATED_SAMPLES);
        trajectory.push(&sample(0.0, 1.0, 0.0));
        assert_eq!(trajectory.len(), 1);
    }

    #[test]
    fn dips_below_compares_closest_approach() {
        let mut trajectory = Trajectory::new();
        assert!(!trajectory.dips_below(1.0));

        trajectory.push(&sample(0.0, 7.0e6, 0.0));
        trajectory.push(&sample(1.0, 0.0, 6.0e6));
        assert!(trajectory.dips_below(6.371e6));
        assert!(!trajectory.dips_below(6.0e6));
    }
}
