//! Force / acceleration law for the single-body orbit
//!
//! Defines the central-acceleration trait and its implementation for
//! inverse-square gravity with post-Newtonian style corrections

use crate::error::DomainError;
use crate::simulation::params::{correction_factor, ForceParameters};
use crate::simulation::states::NVec3;

/// Trait for accelerations that depend only on position relative to the
/// central mass
pub trait CentralAcceleration {
    fn acceleration(&self, x: &NVec3) -> Result<NVec3, DomainError>;
}

impl CentralAcceleration for ForceParameters {
    fn acceleration(&self, x: &NVec3) -> Result<NVec3, DomainError> {
        corrected_gravity(x, self.alpha, self.beta, self)
    }
}

/// Corrected inverse-square acceleration at `x` for explicit correction
/// strengths
///
/// a = gm * (1 + alpha * rs / r + beta * l2 / r^2) / r^2, directed toward the
/// origin. Fails with [`DomainError::ZeroDistance`] when `|x| == 0`, or when
/// `r` is so small that `r^2` underflows and the magnitude is no longer
/// finite.
pub fn corrected_gravity(x: &NVec3, alpha: f64, beta: f64, params: &ForceParameters) -> Result<NVec3, DomainError> {
    // Distance to the central mass
    let r = x.norm();
    let r2 = r * r;
    if r2 == 0.0 {
        return Err(DomainError::ZeroDistance);
    }

    let fact = correction_factor(r, alpha, beta, params);

    // Scalar magnitude, then point it back along -x / r
    let a = params.gm * fact / r2;
    if !a.is_finite() {
        return Err(DomainError::ZeroDistance);
    }
    Ok(-a * (x / r))
}
