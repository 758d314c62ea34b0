//! Perihelion detection on the emitted sample sequence
//!
//! A passage is flagged when the radial velocity `x . v` turns from negative
//! to non-negative between two consecutive samples. The polar angle of the
//! passage is interpolated linearly between the bracketing samples at the
//! zero crossing of `x . v`. Angles are unwrapped, so a prograde precessing
//! orbit reports strictly increasing values.

use std::f64::consts::PI;

use tracing::debug;

use super::states::{NVec3, Sample};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perihelion {
    pub t: f64, // interpolated passage time
    pub angle: f64, // unwrapped polar angle in the xy-plane, radians
    pub radius: f64, // distance at the closer bracketing sample
}

#[derive(Debug, Clone, Default)]
pub struct PerihelionTracker {
    prev: Option<Sample>,
    unwrapped: f64, // unwrapped polar angle of `prev`
    passages: Vec<Perihelion>,
}

impl PerihelionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next sample; returns the passage if one was completed
    pub fn push(&mut self, sample: &Sample) -> Option<Perihelion> {
        let Some(prev) = self.prev.replace(*sample) else {
            self.unwrapped = polar_angle(&sample.x);
            return None;
        };

        let angle_prev = self.unwrapped;
        let angle_next = angle_prev + wrap(polar_angle(&sample.x) - polar_angle(&prev.x));
        self.unwrapped = angle_next;

        let rv_prev = prev.x.dot(&prev.v);
        let rv_next = sample.x.dot(&sample.v);
        if !(rv_prev < 0.0 && rv_next >= 0.0) {
            return None;
        }

        let f = -rv_prev / (rv_next - rv_prev);
        let p = Perihelion {
            t: prev.t + f * (sample.t - prev.t),
            angle: angle_prev + f * (angle_next - angle_prev),
            radius: prev.x.norm().min(sample.x.norm()),
        };
        debug!(t = p.t, angle = p.angle, radius = p.radius, "perihelion passage");

        self.passages.push(p);
        Some(p)
    }

    pub fn passages(&self) -> &[Perihelion] {
        &self.passages
    }

    /// Mean perihelion shift per revolution, if at least two passages have
    /// been seen. Positive means the perihelion advances in the sense of the
    /// orbital motion, for clockwise and counter-clockwise orbits alike.
    pub fn precession_per_orbit(&self) -> Option<f64> {
        let n = self.passages.len();
        if n < 2 {
            return None;
        }
        let first = self.passages[0].angle;
        let last = self.passages[n - 1].angle;
        let mean = (last - first) / (n - 1) as f64;
        // each full revolution contributes 2*pi on top of the shift
        Some(mean.abs() - 2.0 * PI)
    }
}

fn polar_angle(x: &NVec3) -> f64 {
    x.y.atan2(x.x)
}

// map an angle difference into (-pi, pi]
fn wrap(d: f64) -> f64 {
    let w = (d + PI).rem_euclid(2.0 * PI) - PI;
    if w == -PI { PI } else { w }
}
