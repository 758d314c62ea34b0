//! Load a scenario file and run it end to end

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{OrbitState, Trajectory};

pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario> {
    let path = path.as_ref();
    let cfg = ScenarioConfig::from_path(path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let scenario = Scenario::build_scenario(cfg)
        .with_context(|| format!("invalid scenario {}", path.display()))?;

    info!(path = %path.display(), steps = scenario.parameters.steps(), "loaded scenario");
    Ok(scenario)
}

/// Load `path`, run it to completion and return the recorded trajectory
pub fn run_scenario_file(path: impl AsRef<Path>) -> Result<(Trajectory, OrbitState)> {
    let scenario = load_scenario(path)?;
    let out = scenario.record().context("orbit run failed")?;
    Ok(out)
}
