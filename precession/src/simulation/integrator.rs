//! Fixed-step time integrator for the orbiting body
//!
//! Semi-implicit (symplectic) Euler: kick the velocity with the acceleration
//! at the old position, then drift the position with the new velocity

use super::forces::{corrected_gravity, CentralAcceleration};
use super::params::ForceParameters;
use super::states::{NVec3, OrbitState};
use crate::error::DomainError;

/// Advance position and velocity by one step `dt`
///
/// `alpha` and `beta` are the correction strengths for this call; the other
/// force constants come from `params`. Returns `(new_x, new_v)` or
/// [`DomainError::ZeroDistance`] when `x` sits on the central mass.
pub fn evolve(x: &NVec3, v: &NVec3, alpha: f64, beta: f64, params: &ForceParameters, dt: f64) -> Result<(NVec3, NVec3), DomainError> {
    // a_n from x_n
    let accel = corrected_gravity(x, alpha, beta, params)?;
    Ok(kick_drift(x, v, &accel, dt))
}

/// Advance a whole state by one step under any central acceleration.
/// Time becomes `t + dt`.
pub fn step<A>(state: &OrbitState, force: &A, dt: f64) -> Result<OrbitState, DomainError>
where
    A: CentralAcceleration + ?Sized,
{
    let accel = force.acceleration(&state.x)?;
    let (x, v) = kick_drift(&state.x, &state.v, &accel, dt);
    Ok(OrbitState { x, v, t: state.t + dt })
}

fn kick_drift(x: &NVec3, v: &NVec3, accel: &NVec3, dt: f64) -> (NVec3, NVec3) {
    // Kick: v_n+1 = v_n + dt * a_n
    let v_new = v + accel * dt;

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    let x_new = x + v_new * dt;

    (x_new, v_new)
}
