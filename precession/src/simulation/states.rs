//! Core state types for the orbit simulation.
//!
//! Defines the single-body state carried by the driver:
//! - `OrbitState` : position, velocity and elapsed time of the orbiting body
//! - `Sample`     : one element of the emitted sample sequence
//! - `Trajectory` : append-only record of sampled positions
//!
//! All vectors live in an inertial frame centred on the central mass.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub t: f64, // elapsed time
}

impl OrbitState {
    /// State at `t = 0`
    pub fn at_rest_time(x: NVec3, v: NVec3) -> Self {
        Self { x, v, t: 0.0 }
    }

    /// Body at perihelion distance `r0` on the +x axis, moving with speed `v0`
    /// along +y (counter-clockwise in the xy-plane)
    pub fn from_perihelion(r0: f64, v0: f64) -> Self {
        Self::at_rest_time(NVec3::new(r0, 0.0, 0.0), NVec3::new(0.0, v0, 0.0))
    }

    /// Distance from the central mass
    pub fn radius(&self) -> f64 {
        self.x.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite()) && self.t.is_finite()
    }
}

/// Pre-update snapshot of one simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: NVec3, // position before the step
    pub v: NVec3, // velocity before the step
    pub t: f64, // elapsed time at which the sample was taken
}

impl From<&OrbitState> for Sample {
    fn from(s: &OrbitState) -> Self {
        Self { x: s.x, v: s.v, t: s.t }
    }
}

/// Ordered, append-only list of sampled positions
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: Vec<NVec3>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, x: NVec3) {
        self.points.push(x);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&NVec3> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&NVec3> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NVec3> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[NVec3] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a NVec3;
    type IntoIter = std::slice::Iter<'a, NVec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
