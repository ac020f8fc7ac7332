pub mod simulation;
pub mod configuration;
pub mod interaction;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyId, NewBody, System, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{step_system, StepReport};
pub use simulation::collisions::{resolve_collisions, CollisionReport, Merge};
pub use simulation::engine::{CollisionPasses, Engine, World};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig, ViewportConfig};

pub use interaction::pointer::{Pointer, PressOutcome};

pub use error::{Result, SimulationError};

pub use benchmark::benchmark::bench_step;
