//! Springs connecting pairs of particles, with a one-pass stretch constraint.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Connectivity class of a spring in the cloth lattice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpringKind {
    /// Immediate south/east neighbor; stretch resistance.
    Structural,
    /// Diagonal neighbor; shear resistance.
    Shear,
    /// Skip-one south/east neighbor; bend resistance.
    Flexion,
}

/// An elastic connector between two particles in the cloth's arena.
///
/// Endpoints are stored as indices rather than references, so the
/// particle/spring graph has no ownership cycles and serializes plainly.
/// The resting length is captured once from the endpoints' initial
/// positions and never recomputed.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub stiffness: F,
    pub rest_length: F,
    pub kind: SpringKind,
}

impl<F: Float> Spring<F> {
    /// Wire a spring between `a` and `b`, taking the resting length from
    /// their initial positions.
    pub fn new(
        a: usize,
        b: usize,
        particles: &[Particle<F>],
        stiffness: F,
        kind: SpringKind,
    ) -> Self {
        let rest_length = particles[a].initial_pos.distance(particles[b].initial_pos);
        Spring { a, b, stiffness, rest_length, kind }
    }

    /// The endpoint opposite `index`.
    pub fn other(&self, index: usize) -> usize {
        if index == self.a { self.b } else { self.a }
    }

    /// Hooke's-law force this spring exerts on the endpoint at `index`.
    ///
    /// Evaluated against the *saved* positions of both endpoints, so all
    /// force computations in a tick share one consistent snapshot. Positive
    /// stretch pulls `index` toward the other endpoint; compression pushes
    /// it away. A degenerate (coincident) pair contributes no force.
    pub fn force_on(&self, index: usize, particles: &[Particle<F>]) -> Vec3<F> {
        let other = self.other(index);
        let delta = particles[other].last_pos - particles[index].last_pos;
        let distance = delta.length();
        delta
            .normalize()
            .scale((distance - self.rest_length) * self.stiffness)
    }

    /// Cap the endpoint distance at `rest_length * deformation`.
    ///
    /// Runs on the *current* (post-integration) positions. When the limit is
    /// exceeded the endpoints are pulled back along their connecting line so
    /// the distance equals the limit exactly: both free, each absorbs half
    /// the excess and the midpoint stays put; one fixed, the free endpoint
    /// absorbs all of it; both fixed, the over-stretch is accepted. This is
    /// a geometric correction, not a force, applied once per tick.
    pub fn constrain(&self, particles: &mut [Particle<F>], deformation: F) {
        let limit = self.rest_length * deformation;
        let delta = particles[self.b].pos - particles[self.a].pos;
        let distance = delta.length();
        if distance <= limit {
            return;
        }

        let direction = delta.normalize();
        if direction == Vec3::zero() {
            return; // coincident endpoints, no defined correction axis
        }
        let excess = distance - limit;

        let a_fixed = particles[self.a].fixed;
        let b_fixed = particles[self.b].fixed;

        if a_fixed && b_fixed {
            return;
        } else if a_fixed {
            particles[self.b].pos = particles[self.b].pos - direction.scale(excess);
        } else if b_fixed {
            particles[self.a].pos = particles[self.a].pos + direction.scale(excess);
        } else {
            let half = direction.scale(excess * F::half());
            particles[self.a].pos = particles[self.a].pos + half;
            particles[self.b].pos = particles[self.b].pos - half;
        }
    }
}
