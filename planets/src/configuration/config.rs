//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ViewportConfig`]   – canvas size the world is derived from
//! - [`ParametersConfig`] – initial control values and physical constants
//! - [`EngineConfig`]     – collision pass mode
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! viewport:
//!   width: 1280
//!   height: 720
//!
//! parameters:
//!   time_speed: 10000       # multiplies gravity and integration
//!   tail_length: 100        # trail points kept per body
//!   solid_borders: true     # reflect (true) or delete (false) at the edges
//!   g: 6.6743e-11           # gravitational constant
//!   eps2: 0.0               # softening, 0 disables it
//!
//! engine:
//!   collision_passes: per_step   # or per_body
//!
//! bodies:
//!   - mass: 5.0e9
//!     density: 1.0
//!     color: "#ffd54f"
//!     position: [0.0, 0.0]       # offset from the world center
//!     movementVector: [0.0, 0.0]
//!     isBlackHole: false         # optional
//! ```
//!
//! Every section except `bodies` is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::engine::CollisionPasses;
use crate::simulation::params::{DEFAULT_TAIL_LENGTH, DEFAULT_TIME_SPEED, G};

/// Scenario shipped with the crate, used when no file is given
pub const DEFAULT_SCENARIO: &str = include_str!("../../scenarios/solar_system.yaml");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    pub width: f64,  // canvas width in screen units
    pub height: f64, // canvas height in screen units
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Initial control values and physical constants
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub time_speed: f64,
    pub tail_length: usize,
    pub solid_borders: bool,
    pub g: f64,
    pub eps2: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            time_speed: DEFAULT_TIME_SPEED,
            tail_length: DEFAULT_TAIL_LENGTH,
            solid_borders: true,
            g: G,
            eps2: 0.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub collision_passes: CollisionPasses,
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub mass: f64,
    pub density: f64,
    #[serde(default = "default_color")]
    pub color: String,
    pub position: [f64; 2], // offset from the world center
    #[serde(rename = "movementVector", alias = "movement_vector", default)]
    pub movement_vector: [f64; 2],
    #[serde(rename = "isBlackHole", alias = "is_black_hole", default)]
    pub is_black_hole: bool,
}

fn default_color() -> String {
    "#ffffff".to_string()
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// The built-in solar system
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(DEFAULT_SCENARIO)
    }
}
