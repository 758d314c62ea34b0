//! Build fully-initialized orbit scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - force law constants (`ForceParameters`)
//! - step size and end time (`Parameters`)
//! - the initial state at t = 0 (`OrbitState`)

use crate::configuration::config::{ScenarioConfig, DEFAULT_STEPS};
use crate::error::{ConfigError, DomainError};
use crate::simulation::driver::{self, Orbit};
use crate::simulation::params::{ForceParameters, Parameters};
use crate::simulation::states::{NVec3, OrbitState, Trajectory};

// Mercury around the Sun in the simulation's scaled units
pub const MERCURY_R0: f64 = 4.60;
pub const MERCURY_V0: f64 = 0.51;
pub const SUN_GM: f64 = 0.99;
pub const SUN_RS: f64 = 2.95e-7;
pub const MERCURY_L2: f64 = 8.19e-7;

// upper bound on trajectory points reserved before a run
const MAX_PREALLOC: usize = 1 << 16;

/// Runtime bundle for one run, built once before the loop starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub force: ForceParameters,
    pub parameters: Parameters,
    pub initial: OrbitState,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let h0 = cfg.step_size();
        let t_end = cfg.end_time();
        let o = cfg.orbit;
        let f = cfg.force;

        check(o.r0.is_finite() && o.r0 > 0.0, "orbit.r0", "must be positive", o.r0)?;
        check(o.v0.is_finite(), "orbit.v0", "must be finite", o.v0)?;
        check(f.gm.is_finite() && f.gm > 0.0, "force.gm", "must be positive", f.gm)?;
        check(f.rs.is_finite() && f.rs >= 0.0, "force.rs", "must be non-negative", f.rs)?;
        check(f.l2.is_finite() && f.l2 >= 0.0, "force.l2", "must be non-negative", f.l2)?;
        check(f.alpha.is_finite(), "force.alpha", "must be finite", f.alpha)?;
        check(f.beta.is_finite(), "force.beta", "must be finite", f.beta)?;
        check(h0.is_finite() && h0 > 0.0, "parameters.h0", "must be positive", h0)?;
        check(t_end.is_finite() && t_end >= 0.0, "parameters.t_end", "must be non-negative", t_end)?;

        Ok(Self {
            force: ForceParameters {
                gm: f.gm,
                rs: f.rs,
                l2: f.l2,
                alpha: f.alpha,
                beta: f.beta,
            },
            parameters: Parameters { h0, t_end },
            initial: OrbitState::from_perihelion(o.r0, o.v0),
        })
    }

    /// Mercury with the 1/r^3 term boosted by 1e6 so precession is visible
    /// within a few orbits; 1000 steps of `2 * v0 / gm / 20`
    pub fn mercury() -> Self {
        let h0 = 2.0 * MERCURY_V0 / SUN_GM / 20.0;
        Self {
            force: ForceParameters {
                gm: SUN_GM,
                rs: SUN_RS,
                l2: MERCURY_L2,
                alpha: 1.0e6,
                beta: 0.0,
            },
            parameters: Parameters {
                h0,
                t_end: DEFAULT_STEPS as f64 * h0,
            },
            initial: OrbitState::from_perihelion(MERCURY_R0, MERCURY_V0),
        }
    }

    /// Lazy sample sequence for this scenario
    pub fn orbit(&self) -> Result<Orbit, DomainError> {
        Orbit::new(self.initial, self.force, self.parameters.h0, self.parameters.t_end)
    }

    pub fn run<F>(&self, on_sample: F) -> Result<OrbitState, DomainError>
    where
        F: FnMut(&NVec3),
    {
        driver::run(self.initial, &self.force, self.parameters.h0, self.parameters.t_end, on_sample)
    }

    pub fn record(&self) -> Result<(Trajectory, OrbitState), DomainError> {
        let mut trajectory = Trajectory::with_capacity(self.parameters.steps().min(MAX_PREALLOC));
        let last = self.run(|x| trajectory.push(*x))?;
        Ok((trajectory, last))
    }
}

fn check(ok: bool, field: &'static str, reason: &str, value: f64) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{reason}, got {value}")))
    }
}
