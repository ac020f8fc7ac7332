//! Runtime engine settings
//!
//! World extents derived from the viewport, and how often the collision
//! resolver runs within one step.

use serde::Deserialize;

use crate::error::{Result, SimulationError};
use crate::simulation::params::ZOOM;
use crate::simulation::states::NVec2;

/// How many collision passes one step performs
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPasses {
    /// One full pairwise pass after every body has moved
    #[default]
    #[serde(rename = "per_step")]
    PerStep,

    /// One full pairwise pass after each body moves (separates deep overlaps faster)
    #[serde(rename = "per_body")]
    PerBody,
}

/// Simulated world rectangle, `[0, width] x [0, height]` in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub width: f64,
    pub height: f64,
}

impl World {
    /// The world is the viewport scaled up by `1 / ZOOM`
    pub fn from_viewport(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimulationError::InvalidViewport { width, height });
        }
        Ok(Self {
            width: width / ZOOM,
            height: height / ZOOM,
        })
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Canvas coordinates to world coordinates
    pub fn screen_to_world(point: NVec2) -> NVec2 {
        point / ZOOM
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub world: World,
    pub collisions: CollisionPasses,
}
