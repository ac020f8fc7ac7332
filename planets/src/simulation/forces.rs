//! Acceleration contributors for the stepper
//!
//! An [`AccelSet`] sums every registered [`Acceleration`] term for one body.
//! Only Newtonian gravity is registered today.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`]; their contributions are summed
/// into a single per-step velocity change
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Net velocity change this step for `sys.bodies[target]`
    pub fn accel_on(&self, target: usize, sys: &System, params: &Parameters) -> NVec2 {
        self.terms
            .iter()
            .map(|term| term.acceleration(target, sys, params))
            .fold(NVec2::zeros(), |acc, a| acc + a)
    }
}

/// Source of acceleration on one body of a [`System`]
///
/// The returned vector is already scaled by the time speed: it is added
/// directly to the body's velocity.
pub trait Acceleration {
    fn acceleration(&self, target: usize, sys: &System, params: &Parameters) -> NVec2;
}

/// Pairwise Newtonian gravity, direct O(n) sum per body
///
/// With `eps2 = 0` no softening is applied: two bodies at the same position
/// produce a non-finite contribution.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64,    // gravitational constant
    pub eps2: f64, // optional softening, 0 disables it
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, target: usize, sys: &System, params: &Parameters) -> NVec2 {
        let xi = sys.bodies[target].position;

        sys.bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != target)
            .fold(NVec2::zeros(), |acc, (_, other)| {
                // points from the target towards the other body
                let delta = other.position - xi;
                let r = (delta.norm_squared() + self.eps2).sqrt();
                let coef = self.G * other.mass() / (r * r * r);
                acc + delta * (coef * params.time_speed())
            })
    }
}
