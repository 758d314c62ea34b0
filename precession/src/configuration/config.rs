//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`OrbitConfig`]      – initial perihelion distance and speed
//! - [`ForceConfig`]      – central acceleration scale and correction terms
//! - [`ParametersConfig`] – step size and end time (optional)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The Mercury scenario:
//!
//! ```yaml
//! orbit:
//!   r0: 4.60              # initial distance (perihelion)
//!   v0: 0.51              # initial speed, perpendicular to r
//!
//! force:
//!   gm: 0.99              # central acceleration scale
//!   rs: 2.95e-7           # schwarzschild radius
//!   l2: 8.19e-7           # specific angular momentum squared
//!   alpha: 1.0e6          # 1/r^3 strength, 0 for Newtonian
//!   beta: 0.0             # 1/r^4 strength, 0 for Newtonian
//!
//! parameters:             # optional block
//!   steps: 1000           # used when t_end is left out
//! ```
//!
//! Leaving out `h0` gives `2 * v0 / gm / 20`; leaving out `t_end` gives
//! `steps * h0` (1000 steps by default). Values are checked when the runtime
//! [`Scenario`](crate::simulation::scenario::Scenario) is built.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_STEPS: u64 = 1000;

/// Initial conditions
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitConfig {
    pub r0: f64, // initial distance from the central mass along +x
    pub v0: f64, // initial speed along +y
}

/// Force law constants
#[derive(Deserialize, Debug, Clone)]
pub struct ForceConfig {
    pub gm: f64, // central acceleration scale
    #[serde(default)]
    pub rs: f64, // schwarzschild radius
    #[serde(default)]
    pub l2: f64, // specific angular momentum squared
    #[serde(default)]
    pub alpha: f64, // 1/r^3 correction strength
    #[serde(default)]
    pub beta: f64, // 1/r^4 correction strength
}

/// Step size and run length
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub h0: Option<f64>, // fixed step size
    pub t_end: Option<f64>, // time end
    pub steps: Option<u64>, // run length in steps when t_end is missing
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub orbit: OrbitConfig,
    pub force: ForceConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Step size, falling back to 1/20 of `2 * v0 / gm`
    pub fn step_size(&self) -> f64 {
        self.parameters
            .h0
            .unwrap_or(2.0 * self.orbit.v0 / self.force.gm / 20.0)
    }

    /// End time, falling back to `steps * h0`
    pub fn end_time(&self) -> f64 {
        match self.parameters.t_end {
            Some(t_end) => t_end,
            None => self.parameters.steps.unwrap_or(DEFAULT_STEPS) as f64 * self.step_size(),
        }
    }
}
