//! Snapshot of the simulation state for exact save/restore.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position and history of a single particle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticleState<F: Float> {
    pub pos: Vec3<F>,
    pub last_pos: Vec3<F>,
    pub second_last_pos: Vec3<F>,
}

/// Full dynamic state of a cloth: every particle's position plus its
/// two-step history. Topology (springs, resting lengths) is not included;
/// it is a function of the construction-time config.
///
/// Restoring a snapshot and continuing the simulation is bit-for-bit
/// identical to never having interrupted it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothState<F: Float> {
    pub particles: AllocVec<ParticleState<F>>,
}

impl<F: Float> ClothState<F> {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
