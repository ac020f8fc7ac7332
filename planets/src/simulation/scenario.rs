//! Build a runnable simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`: world bounds, collision passes)
//! - control parameters (`Parameters`)
//! - system state (`System` with the initial bodies)
//! - active force set (`AccelSet`)
//!
//! `Scenario` is the single owner of the body collection; the renderer reads
//! [`Scenario::bodies`] after each [`Scenario::step`].

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Result, SimulationError};
use crate::simulation::engine::{Engine, World};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{step_system, StepReport};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, NVec2, NewBody, System};

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let world = World::from_viewport(cfg.viewport.width, cfg.viewport.height)?;
        let center = world.center();

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let mut parameters = Parameters::default();
        parameters.set_time_speed(p_cfg.time_speed)?;
        parameters.set_tail_length(p_cfg.tail_length)?;
        parameters.set_solid_borders(p_cfg.solid_borders);
        // nothing to reset before the first step
        parameters.take_trail_reset();

        // Bodies: offsets from the world center -> absolute positions
        let mut system = System::new();
        for (index, bc) in cfg.bodies.into_iter().enumerate() {
            system
                .spawn(new_body(bc, center))
                .map_err(|e| match e {
                    SimulationError::InvalidBody { reason, .. } => {
                        SimulationError::InvalidBody { index, reason }
                    }
                    other => other,
                })?;
        }

        let engine = Engine {
            world,
            collisions: cfg.engine.collision_passes,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: p_cfg.g,
            eps2: p_cfg.eps2,
        });

        log::info!(
            "scenario ready: {} bodies in a {:.0}x{:.0} world, time speed {}",
            system.len(),
            world.width,
            world.height,
            parameters.time_speed()
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    /// Advance by one frame
    pub fn step(&mut self) -> StepReport {
        let Scenario {
            engine,
            parameters,
            system,
            forces,
        } = self;

        step_system(system, forces, parameters, engine)
    }

    /// Current body collection, in simulation order
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.system.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.system.get_mut(id)
    }

    /// Add a body at an absolute world position
    pub fn spawn(&mut self, init: NewBody) -> Result<BodyId> {
        self.system.spawn(init)
    }

    /// Delete a body right away (controls panel action)
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.system.remove(id)
    }

    pub fn set_highlighted(&mut self, id: BodyId, highlighted: bool) -> bool {
        match self.system.get_mut(id) {
            Some(body) => {
                body.highlighted = highlighted;
                true
            }
            None => false,
        }
    }

    /// Change the time speed; trails restart sampling on the next step
    pub fn set_time_speed(&mut self, time_speed: f64) -> Result<bool> {
        let reset = self.parameters.set_time_speed(time_speed)?;
        log::info!("time speed set to {time_speed}");
        Ok(reset)
    }

    pub fn set_tail_length(&mut self, tail_length: usize) -> Result<()> {
        self.parameters.set_tail_length(tail_length)?;
        log::info!("tail length set to {tail_length}");
        Ok(())
    }

    pub fn set_solid_borders(&mut self, solid_borders: bool) {
        self.parameters.set_solid_borders(solid_borders);
        log::info!("solid borders {}", if solid_borders { "on" } else { "off" });
    }
}

fn new_body(bc: BodyConfig, center: NVec2) -> NewBody {
    NewBody {
        mass: bc.mass,
        density: bc.density,
        color: bc.color,
        position: NVec2::new(bc.position[0], bc.position[1]) + center,
        velocity: NVec2::new(bc.movement_vector[0], bc.movement_vector[1]),
        is_black_hole: bc.is_black_hole,
    }
}
