pub mod simulation;
pub mod configuration;
pub mod error;
pub mod runner;

pub use simulation::states::{NVec3, OrbitState, Sample, Trajectory};
pub use simulation::params::{ForceParameters, Parameters, correction_factor};
pub use simulation::forces::{CentralAcceleration, corrected_gravity};
pub use simulation::integrator::{evolve, step};
pub use simulation::driver::{Orbit, run, record};
pub use simulation::perihelion::{Perihelion, PerihelionTracker};
pub use simulation::scenario::Scenario;

pub use configuration::config::{OrbitConfig, ForceConfig, ParametersConfig, ScenarioConfig};

pub use error::{DomainError, ConfigError};

pub use runner::{load_scenario, run_scenario_file};
