use std::time::Instant;

use crate::simulation::engine::{CollisionPasses, Engine, World};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::step_system;
use crate::simulation::params::{Parameters, G};
use crate::simulation::states::{NVec2, NewBody, System};

/// Deterministic ring of `n` small bodies around the world center
fn bench_system(n: usize, world: &World) -> System {
    let mut sys = System::new();
    let center = world.center();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let offset = NVec2::new((i_f * 0.37).sin(), (i_f * 0.13).cos()) * 5000.0;
        let body = NewBody {
            mass: 1.0e5,
            density: 1.0,
            color: "#ffffff".to_string(),
            position: center + offset,
            velocity: NVec2::zeros(),
            is_black_hole: false,
        };
        // inputs are finite and positive
        if let Err(e) = sys.spawn(body) {
            log::error!("bench body {i} rejected: {e}");
        }
    }
    sys
}

/// Time full steps for growing body counts, once per collision pass mode
pub fn bench_step() {
    let ns = [25, 50, 100, 200, 400];
    let steps = 20; // steps timed per configuration

    let world = World {
        width: 25_600.0,
        height: 14_400.0,
    };

    for n in ns {
        for passes in [CollisionPasses::PerStep, CollisionPasses::PerBody] {
            let mut sys = bench_system(n, &world);
            let mut params = Parameters::default();
            let engine = Engine {
                world,
                collisions: passes,
            };
            let forces = AccelSet::new().with(NewtonianGravity { G, eps2: 0.0 });

            // Warm up
            step_system(&mut sys, &forces, &mut params, &engine);

            let t0 = Instant::now();
            for _ in 0..steps {
                step_system(&mut sys, &forces, &mut params, &engine);
            }
            let per_step = t0.elapsed().as_secs_f64() / steps as f64;

            println!("N = {n:4}, {passes:?}: {per_step:10.6} s/step ({} bodies left)", sys.len());
        }
    }
}
