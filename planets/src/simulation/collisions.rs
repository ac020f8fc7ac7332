//! Pairwise collision resolution
//!
//! One call scans every unordered pair once. Ordinary bodies bounce off each
//! other elastically (with restitution); any pair involving a black hole merges
//! the other body into it. Absorbed bodies are tombstoned during the scan and
//! removed from the collection before returning.

use crate::simulation::params::RESTITUTION;
use crate::simulation::states::{Body, BodyId, System};

/// One black-hole absorption
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    pub absorber: BodyId,
    pub absorbed: BodyId,
    pub absorbed_mass: f64,
}

/// What one or more resolver passes did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub bounces: usize,
    pub merges: Vec<Merge>,
}

impl CollisionReport {
    pub fn extend(&mut self, other: CollisionReport) {
        self.bounces += other.bounces;
        self.merges.extend(other.merges);
    }
}

/// Detect and resolve every overlapping pair in `sys`
pub fn resolve_collisions(sys: &mut System) -> CollisionReport {
    let n = sys.bodies.len();
    let mut report = CollisionReport::default();
    let mut absorbed = vec![false; n]; // tombstones

    for i in 0..n {
        for j in (i + 1)..n {
            if absorbed[i] {
                break;
            }
            if absorbed[j] {
                continue;
            }

            let (left, right) = sys.bodies.split_at_mut(j);
            let (first, second) = (&mut left[i], &mut right[0]);

            let dist = (first.position - second.position).norm();
            if first.radius() + second.radius() <= dist {
                continue;
            }

            if !first.is_black_hole() && !second.is_black_hole() {
                if bounce(first, second, dist) {
                    report.bounces += 1;
                }
                first.overlapped.insert(j, second.id());
            } else {
                // the first black hole in collection order absorbs
                let (black_hole, merging, merging_index) = if first.is_black_hole() {
                    (first, second, j)
                } else {
                    (second, first, i)
                };

                let absorbed_mass = merging.mass();
                black_hole.set_mass(black_hole.mass() + absorbed_mass);
                absorbed[merging_index] = true;

                log::debug!(
                    "{:?} absorbed {:?} (+{absorbed_mass:e}, now {:e})",
                    black_hole.id(),
                    merging.id(),
                    black_hole.mass()
                );
                report.merges.push(Merge {
                    absorber: black_hole.id(),
                    absorbed: merging.id(),
                    absorbed_mass,
                });
            }
        }
    }

    if !report.merges.is_empty() {
        let mut index = 0;
        sys.bodies.retain(|_| {
            let keep = !absorbed[index];
            index += 1;
            keep
        });
    }

    report
}

/// Elastic bounce between two overlapping ordinary bodies
///
/// Pushes the pair apart along the normal by half the overlap each, then
/// exchanges an impulse unless they are already separating. Returns whether
/// the pair was resolved at all (coincident centers are skipped).
pub fn bounce(first: &mut Body, second: &mut Body, dist: f64) -> bool {
    if dist == 0.0 {
        return false;
    }

    // normal pointing from second to first
    let normal = (first.position - second.position) / dist;
    let overlap = first.radius() + second.radius() - dist;

    let separation = normal * (overlap * 0.5);
    first.position += separation;
    second.position -= separation;

    let relative_velocity = first.velocity - second.velocity;
    let velocity_along_normal = relative_velocity.dot(&normal);

    // already moving apart
    if velocity_along_normal > 0.0 {
        return true;
    }

    let impulse_scalar = -(1.0 + RESTITUTION) * velocity_along_normal;
    let impulse = normal * (impulse_scalar / (first.mass() + second.mass()));

    first.velocity += impulse * second.mass();
    second.velocity -= impulse * first.mass();
    true
}
