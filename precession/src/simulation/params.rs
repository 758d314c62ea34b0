//! Numerical and physical parameters for the simulation
//!
//! `ForceParameters` holds the corrected gravity law:
//! - central acceleration scale `gm`,
//! - Schwarzschild radius `rs` (1/r^3 term),
//! - squared specific angular momentum `l2` (1/r^4 term),
//! - dimensionless strengths `alpha` and `beta` for the two corrections
//!
//! `Parameters` holds the run settings: fixed step size and end time

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParameters {
    pub gm: f64, // central acceleration scale
    pub rs: f64, // schwarzschild radius
    pub l2: f64, // specific angular momentum squared
    pub alpha: f64, // strength of the 1/r^3 correction
    pub beta: f64, // strength of the 1/r^4 correction
}

impl ForceParameters {
    /// Pure inverse-square gravity (alpha = beta = 0)
    pub fn newtonian(gm: f64) -> Self {
        Self {
            gm,
            rs: 0.0,
            l2: 0.0,
            alpha: 0.0,
            beta: 0.0,
        }
    }

    /// Copy of these parameters with new correction strengths
    pub fn with_corrections(self, alpha: f64, beta: f64) -> Self {
        Self { alpha, beta, ..self }
    }

    /// `1 + alpha * rs / r + beta * l2 / r^2` using the stored knobs
    pub fn correction_factor(&self, r: f64) -> f64 {
        correction_factor(r, self.alpha, self.beta, self)
    }
}

/// Relativistic correction factor for explicit `alpha`/`beta`
pub fn correction_factor(r: f64, alpha: f64, beta: f64, params: &ForceParameters) -> f64 {
    1.0 + alpha * params.rs / r + beta * params.l2 / (r * r)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub h0: f64, // step size
    pub t_end: f64, // time end
}

impl Parameters {
    /// Number of steps the driver takes for these settings, saturating at
    /// `usize::MAX`
    pub fn steps(&self) -> usize {
        if !(self.h0 > 0.0) || !(self.t_end > 0.0) {
            return 0;
        }
        let ratio = self.t_end / self.h0;
        if !(ratio < usize::MAX as f64) {
            return usize::MAX;
        }

        let mut n = ratio.floor() as usize;
        // t_n = n * h0 may land either side of t_end after rounding
        for _ in 0..2 {
            if (n as f64) * self.h0 < self.t_end {
                n = n.saturating_add(1);
            }
        }
        for _ in 0..2 {
            if n > 0 && ((n - 1) as f64) * self.h0 >= self.t_end {
                n -= 1;
            }
        }
        n
    }
}
