//! Fixed-step simulation driver
//!
//! `Orbit` owns the state for one run and exposes it as a lazy, finite
//! sequence of pre-update samples. Consumers pull at their own pace and may
//! stop at any point by dropping the iterator. `run` and `record` are the
//! callback and collecting front ends built on top of it.

use tracing::{info, warn};

use super::integrator::step;
use super::params::ForceParameters;
use super::states::{NVec3, OrbitState, Sample, Trajectory};
use crate::error::DomainError;

/// Iterator over the samples of one run
///
/// Each call to `next` first applies the step belonging to the previously
/// emitted sample, then yields the state *before* the following step. The
/// first item is always the initial state. Once the end time is reached, or
/// after a [`DomainError`] has been yielded, the iterator returns `None`
/// forever. Dropping it early simply abandons the remaining steps.
#[derive(Debug, Clone)]
pub struct Orbit {
    state: OrbitState,
    force: ForceParameters,
    dt: f64,
    t_end: f64,
    t0: f64,
    steps: u64, // steps applied so far
    pending: bool, // a sample was emitted but its step not yet applied
    done: bool,
}

impl Orbit {
    /// Validate run settings and set up the sequence
    pub fn new(initial: OrbitState, force: ForceParameters, dt: f64, t_end: f64) -> Result<Self, DomainError> {
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(DomainError::NonPositiveStep(dt));
        }
        if !(t_end >= 0.0) || !t_end.is_finite() {
            return Err(DomainError::InvalidEndTime(t_end));
        }
        if !initial.t.is_finite() {
            return Err(DomainError::InvalidStartTime(initial.t));
        }

        Ok(Self {
            state: initial,
            force,
            dt,
            t_end,
            t0: initial.t,
            steps: 0,
            pending: false,
            done: false,
        })
    }

    /// Current state; after the sequence is exhausted this is the final state
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Number of steps applied so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }

    fn advance(&mut self) -> Result<(), DomainError> {
        let next = step(&self.state, &self.force, self.dt)?;

        self.steps += 1;
        // t_n = t_0 + n * dt, no accumulated rounding
        let t = self.t0 + self.steps as f64 * self.dt;
        self.state = OrbitState { t, ..next };
        Ok(())
    }
}

impl Iterator for Orbit {
    type Item = Result<Sample, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.pending {
            self.pending = false;
            if let Err(e) = self.advance() {
                self.done = true;
                return Some(Err(e));
            }
        }

        if self.state.t >= self.t_end {
            self.done = true;
            return None;
        }

        self.pending = true;
        Some(Ok(Sample::from(&self.state)))
    }
}

impl std::iter::FusedIterator for Orbit {}

/// Run the fixed-step loop to completion
///
/// `on_sample` sees each pre-update position in chronological order, once per
/// step. Returns the final state, or the first [`DomainError`], at which point
/// the run is abandoned.
pub fn run<F>(initial: OrbitState, params: &ForceParameters, dt: f64, t_end: f64, mut on_sample: F) -> Result<OrbitState, DomainError>
where
    F: FnMut(&NVec3),
{
    let mut orbit = Orbit::new(initial, *params, dt, t_end)?;
    info!(dt, t_end, alpha = params.alpha, beta = params.beta, "starting orbit run");

    while let Some(item) = orbit.next() {
        match item {
            Ok(sample) => on_sample(&sample.x),
            Err(e) => {
                warn!(step = orbit.steps(), error = %e, "orbit run aborted");
                return Err(e);
            }
        }
    }

    let last = *orbit.state();
    info!(steps = orbit.steps(), t = last.t, "orbit run finished");
    Ok(last)
}

/// Run to completion and keep every emitted position
pub fn record(initial: OrbitState, params: &ForceParameters, dt: f64, t_end: f64) -> Result<(Trajectory, OrbitState), DomainError> {
    let mut trajectory = Trajectory::new();
    let last = run(initial, params, dt, t_end, |x| trajectory.push(*x))?;
    Ok((trajectory, last))
}
