//! Core state types for the simulation
//!
//! - `Body`   one planet or black hole, with mass/density-derived geometry
//! - `System` the ordered body collection, the step counter and id allocator
//!
//! Mass and density are only reachable through setters so that radius,
//! diameter and the black-hole flag never go stale.

use std::collections::{HashMap, VecDeque};
use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::error::{Result, SimulationError};
use crate::simulation::params::{BLACK_HOLE_DENSITY, BLACK_HOLE_THRESHOLD, MAX_SPEED};

pub type NVec2 = Vector2<f64>;

/// Stable identity of a body, never reused within one system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

/// Scale `v` down to `max` magnitude, keeping its direction
pub fn limit(v: NVec2, max: f64) -> NVec2 {
    let norm = v.norm();
    if norm > max {
        v * (max / norm)
    } else {
        v
    }
}

/// Initial state of a body before it joins a system
#[derive(Debug, Clone)]
pub struct NewBody {
    pub mass: f64,
    pub density: f64,
    pub color: String,
    pub position: NVec2,
    pub velocity: NVec2,
    pub is_black_hole: bool,
}

#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    pub position: NVec2,
    pub(crate) velocity: NVec2, // movement vector
    mass: f64,
    density: f64,
    radius: f64,
    diameter: f64,
    is_black_hole: bool,
    pub color: String,
    pub(crate) trail: VecDeque<NVec2>, // newest first
    pub(crate) tail_interval: f64,
    pub is_deleted: bool,
    pub highlighted: bool,
    pub(crate) overlapped: HashMap<usize, BodyId>, // partner index -> partner, this step only
}

impl Body {
    pub fn new(id: BodyId, init: NewBody) -> Self {
        let mut body = Body {
            id,
            position: init.position,
            velocity: limit(init.velocity, MAX_SPEED),
            mass: init.mass,
            density: init.density,
            radius: 0.0,
            diameter: 0.0,
            is_black_hole: init.is_black_hole,
            color: init.color,
            trail: VecDeque::new(),
            tail_interval: 0.0,
            is_deleted: false,
            highlighted: false,
            overlapped: HashMap::new(),
        };
        // run the threshold rule on the initial mass as well
        body.set_mass(init.mass);
        body
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    /// Replace the velocity, clamped to `MAX_SPEED`
    pub fn set_velocity(&mut self, velocity: NVec2) {
        self.velocity = limit(velocity, MAX_SPEED);
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn is_black_hole(&self) -> bool {
        self.is_black_hole
    }

    /// Past positions, newest first
    pub fn trail(&self) -> &VecDeque<NVec2> {
        &self.trail
    }

    /// Collisions recorded for this body during the current step
    pub fn overlapped(&self) -> &HashMap<usize, BodyId> {
        &self.overlapped
    }

    /// Set the mass; above `BLACK_HOLE_THRESHOLD` the body turns into a
    /// black hole for good and takes `BLACK_HOLE_DENSITY`
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
        if mass > BLACK_HOLE_THRESHOLD {
            if !self.is_black_hole {
                log::debug!("body {:?} collapsed into a black hole (mass {mass:e})", self.id);
            }
            self.is_black_hole = true;
            self.density = BLACK_HOLE_DENSITY;
        }
        self.recalc_diameter();
    }

    pub fn set_density(&mut self, density: f64) {
        self.density = density;
        self.recalc_diameter();
    }

    /// Grow mass by `factor` and density by `factor^0.33`
    ///
    /// Density is scaled first so that a black-hole transition triggered by
    /// the new mass leaves the density at `BLACK_HOLE_DENSITY`.
    pub fn increase(&mut self, factor: f64) {
        self.density *= factor.powf(0.33);
        self.set_mass(self.mass * factor);
    }

    fn recalc_diameter(&mut self) {
        let volume = self.mass / self.density;
        self.radius = (volume * 3.0 / (4.0 * PI)).cbrt();
        self.diameter = self.radius * 2.0;
    }

    /// Display metric shown next to a body, not a physical energy
    pub fn energy(&self) -> f64 {
        self.mass * self.velocity.norm() * 1000.0
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    /// Whether `point` lies within `radius + margin` of the center
    pub fn intersects(&self, point: NVec2, margin: f64) -> bool {
        (self.position - point).norm() < self.radius + margin
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection, iteration order matters for tie-breaks
    pub steps: u64,        // completed steps
    next_id: u64,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a body, returning its id
    pub fn spawn(&mut self, init: NewBody) -> Result<BodyId> {
        let index = self.bodies.len();
        for (what, value) in [("mass", init.mass), ("density", init.density)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidBody {
                    index,
                    reason: format!("{what} must be finite and positive, got {value}"),
                });
            }
        }
        if !(init.position.iter().chain(init.velocity.iter())).all(|c| c.is_finite()) {
            return Err(SimulationError::InvalidBody {
                index,
                reason: "position and velocity must be finite".to_string(),
            });
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, init));
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        self.index_of(id).map(|i| self.bodies.remove(i))
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
