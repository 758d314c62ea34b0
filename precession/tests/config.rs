use std::path::PathBuf;

use approx::assert_relative_eq;

use precession::{run_scenario_file, ConfigError, NVec3, Scenario, ScenarioConfig};

fn scenario_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

const MINIMAL: &str = "
orbit:
  r0: 4.60
  v0: 0.51
force:
  gm: 0.99
";

// ==================================================================================
// Parsing tests
// ==================================================================================

#[test]
fn mercury_file_matches_builtin_scenario() {
    let cfg = ScenarioConfig::from_path(scenario_path("mercury.yaml")).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario, Scenario::mercury());
}

#[test]
fn missing_parameters_fall_back_to_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(MINIMAL).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    let h0 = 2.0 * 0.51 / 0.99 / 20.0;
    assert_relative_eq!(scenario.parameters.h0, h0, epsilon = 1e-15);
    assert_relative_eq!(scenario.parameters.t_end, 1000.0 * h0, epsilon = 1e-12);

    // corrections default to zero: pure inverse-square
    assert_eq!(scenario.force.alpha, 0.0);
    assert_eq!(scenario.force.beta, 0.0);
    assert_eq!(scenario.force.rs, 0.0);
}

#[test]
fn steps_sets_end_time_when_t_end_missing() {
    let yaml = format!("{MINIMAL}parameters:\n  h0: 0.5\n  steps: 8\n");
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.parameters.t_end, 4.0);
    assert_eq!(scenario.parameters.steps(), 8);
}

#[test]
fn initial_state_starts_on_x_axis() {
    let cfg = ScenarioConfig::from_yaml_str(MINIMAL).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.initial.x, NVec3::new(4.60, 0.0, 0.0));
    assert_eq!(scenario.initial.v, NVec3::new(0.0, 0.51, 0.0));
    assert_eq!(scenario.initial.t, 0.0);
}

// ==================================================================================
// Validation tests
// ==================================================================================

#[test]
fn rejects_non_positive_gm() {
    let yaml = MINIMAL.replace("gm: 0.99", "gm: 0.0");
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();

    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "force.gm", .. }), "{err}");
}

#[test]
fn rejects_zero_radius() {
    let yaml = MINIMAL.replace("r0: 4.60", "r0: 0.0");
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();

    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "orbit.r0", .. }), "{err}");
}

#[test]
fn rejects_negative_step() {
    let yaml = format!("{MINIMAL}parameters:\n  h0: -0.1\n  t_end: 1.0\n");
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();

    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "parameters.h0", .. }), "{err}");
}

#[test]
fn malformed_yaml_is_a_yaml_error() {
    let err = ScenarioConfig::from_yaml_str("orbit: [1, 2").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ScenarioConfig::from_path(scenario_path("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

// ==================================================================================
// End to end
// ==================================================================================

#[test]
fn newtonian_file_runs_end_to_end() {
    let (trajectory, last) = run_scenario_file(scenario_path("newtonian.yaml")).unwrap();

    // h0 = 0.05, t_end = 100
    assert_eq!(trajectory.len(), 2000);
    assert_eq!(trajectory.first(), Some(&NVec3::new(4.60, 0.0, 0.0)));
    assert!(last.is_finite());
}

#[test]
fn run_scenario_file_reports_missing_file() {
    let err = run_scenario_file(scenario_path("does_not_exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to load scenario"));
}
